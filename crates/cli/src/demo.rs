//! Sample patients for `dxr demo`.

use dxr_core::Patient;

fn build(id: &str, duration_days: u32, symptoms: &[&str], risk_factors: &[&str]) -> Patient {
    let mut patient = Patient::new(id, duration_days);
    for symptom in symptoms {
        patient.add_symptom(*symptom);
    }
    for factor in risk_factors {
        patient.add_risk_factor(*factor);
    }
    patient
}

/// Early COVID-19 with sensory loss.
pub fn covid_patient() -> Patient {
    build(
        "paciente1",
        3,
        &[
            "fiebre_alta",
            "tos_seca",
            "dolor_muscular",
            "perdida_olfato",
            "perdida_gusto",
            "fatiga",
        ],
        &[],
    )
}

/// Pneumonia with low oxygen saturation and two risk factors.
pub fn pneumonia_patient() -> Patient {
    build(
        "paciente2",
        5,
        &[
            "fiebre_alta",
            "tos_productiva",
            "dificultad_respirar",
            "dolor_pecho",
            "saturacion_baja",
        ],
        &["edad_avanzada", "fumador"],
    )
}

/// Afebrile respiratory allergy.
pub fn allergy_patient() -> Patient {
    build(
        "paciente3",
        7,
        &["estornudos", "congestion_nasal", "mucosidad", "dolor_cabeza"],
        &[],
    )
}

pub fn sample_patients() -> Vec<Patient> {
    vec![covid_patient(), pneumonia_patient(), allergy_patient()]
}
