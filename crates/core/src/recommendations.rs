//! Exam and treatment recommendations.
//!
//! Both derivations keep the first occurrence of each item and never re-sort.

use crate::constants::{
    DIFICULTAD_RESPIRAR, FEVER_BLOOD_COUNT_AFTER_DAYS, FIEBRE_ALTA, FLU_ANTIVIRAL_WINDOW_DAYS,
};
use crate::diagnosis::Diagnosis;
use crate::disease::Disease;
use crate::patient::Patient;
use crate::severity::Severity;
use serde::{Serialize, Serializer};

/// A recommended diagnostic exam.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Exam {
    PcrCovid19,
    ChestXRay,
    FullBloodCount,
    Oximetry,
}

impl Exam {
    pub fn label(self) -> &'static str {
        match self {
            Exam::PcrCovid19 => "PCR COVID-19",
            Exam::ChestXRay => "Chest X-Ray",
            Exam::FullBloodCount => "Full Blood Count",
            Exam::Oximetry => "Oximetry",
        }
    }
}

/// A suggested treatment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Treatment {
    UrgentHospitalization,
    Antibiotics,
    Antivirals,
    Antitussives,
    Antihistamines,
    RestAndHydration,
    AntiInflammatories,
}

impl Treatment {
    pub fn label(self) -> &'static str {
        match self {
            Treatment::UrgentHospitalization => "Urgent Hospitalization",
            Treatment::Antibiotics => "Antibiotics",
            Treatment::Antivirals => "Antivirals",
            Treatment::Antitussives => "Antitussives",
            Treatment::Antihistamines => "Antihistamines",
            Treatment::RestAndHydration => "Rest and Hydration",
            Treatment::AntiInflammatories => "Anti-inflammatories",
        }
    }
}

macro_rules! label_impls {
    ($($ty:ty),*) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.label())
                }
            }

            impl Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    serializer.serialize_str(self.label())
                }
            }
        )*
    };
}

label_impls!(Exam, Treatment);

/// Derives exams and treatments from diagnoses and raw patient signals.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Recommends exams for the diagnosed diseases plus symptom-driven extras.
    pub fn recommend_exams(&self, patient: &Patient, diagnoses: &[Diagnosis]) -> Vec<Exam> {
        let mut exams = Vec::new();

        for diagnosis in diagnoses {
            match diagnosis.disease() {
                Disease::Covid19 => push_unique(&mut exams, Exam::PcrCovid19),
                Disease::Neumonia => {
                    push_unique(&mut exams, Exam::ChestXRay);
                    push_unique(&mut exams, Exam::FullBloodCount);
                }
                Disease::Bronquitis | Disease::Gripe | Disease::AlergiaRespiratoria => {}
            }
        }

        if patient.has_symptom(DIFICULTAD_RESPIRAR) {
            push_unique(&mut exams, Exam::Oximetry);
            push_unique(&mut exams, Exam::ChestXRay);
        }

        if patient.has_symptom(FIEBRE_ALTA)
            && patient.duration_days() > FEVER_BLOOD_COUNT_AFTER_DAYS
        {
            push_unique(&mut exams, Exam::FullBloodCount);
        }

        exams
    }

    /// Recommends treatments. A critical patient gets urgent hospitalization only.
    pub fn recommend_treatments(
        &self,
        patient: &Patient,
        diagnoses: &[Diagnosis],
        severity: Severity,
    ) -> Vec<Treatment> {
        if severity == Severity::Critica {
            return vec![Treatment::UrgentHospitalization];
        }

        let mut treatments = Vec::new();

        for diagnosis in diagnoses {
            match diagnosis.disease() {
                Disease::Neumonia => push_unique(&mut treatments, Treatment::Antibiotics),
                Disease::Covid19 => {
                    if severity == Severity::Alta {
                        push_unique(&mut treatments, Treatment::Antivirals);
                    }
                }
                Disease::Gripe => {
                    if patient.has_risk_factors()
                        && patient.duration_days() <= FLU_ANTIVIRAL_WINDOW_DAYS
                    {
                        push_unique(&mut treatments, Treatment::Antivirals);
                    }
                }
                Disease::Bronquitis => push_unique(&mut treatments, Treatment::Antitussives),
                Disease::AlergiaRespiratoria => {
                    push_unique(&mut treatments, Treatment::Antihistamines)
                }
            }
        }

        if severity == Severity::Baja {
            push_unique(&mut treatments, Treatment::RestAndHydration);
        }

        if patient.has_symptom(FIEBRE_ALTA) {
            push_unique(&mut treatments, Treatment::AntiInflammatories);
        }

        treatments
    }
}

fn push_unique<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if !items.contains(&item) {
        items.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DiagnosticEngine;

    fn patient(duration: u32, symptoms: &[&str], risk_factors: &[&str]) -> Patient {
        let mut p = Patient::new("rec", duration);
        for s in symptoms {
            p.add_symptom(*s);
        }
        for r in risk_factors {
            p.add_risk_factor(*r);
        }
        p
    }

    fn diagnosis(disease: Disease) -> Diagnosis {
        Diagnosis::new(disease, String::new(), Vec::new())
    }

    #[test]
    fn pneumonia_with_breathing_difficulty_gets_one_chest_xray() {
        let engine = DiagnosticEngine::new();
        let p = patient(
            3,
            &["fiebre_alta", "dificultad_respirar", "dolor_pecho", "tos_seca"],
            &[],
        );
        let exams = RecommendationEngine.recommend_exams(&p, &engine.evaluate(&p));
        assert_eq!(
            exams,
            vec![Exam::ChestXRay, Exam::FullBloodCount, Exam::Oximetry]
        );
    }

    #[test]
    fn covid_gets_pcr() {
        let p = patient(3, &["fiebre_alta"], &[]);
        let exams = RecommendationEngine.recommend_exams(&p, &[diagnosis(Disease::Covid19)]);
        assert_eq!(exams, vec![Exam::PcrCovid19]);
    }

    #[test]
    fn long_fever_adds_blood_count_once() {
        let p = patient(6, &["fiebre_alta"], &[]);
        assert_eq!(
            RecommendationEngine.recommend_exams(&p, &[]),
            vec![Exam::FullBloodCount]
        );

        let at_threshold = patient(5, &["fiebre_alta"], &[]);
        assert!(RecommendationEngine
            .recommend_exams(&at_threshold, &[])
            .is_empty());

        let exams = RecommendationEngine.recommend_exams(&p, &[diagnosis(Disease::Neumonia)]);
        assert_eq!(exams, vec![Exam::ChestXRay, Exam::FullBloodCount]);
    }

    #[test]
    fn breathing_difficulty_alone_adds_oximetry_and_xray() {
        let p = patient(1, &["dificultad_respirar"], &[]);
        assert_eq!(
            RecommendationEngine.recommend_exams(&p, &[]),
            vec![Exam::Oximetry, Exam::ChestXRay]
        );
    }

    #[test]
    fn critical_short_circuits_treatments() {
        let p = patient(5, &["fiebre_alta"], &[]);
        let treatments = RecommendationEngine.recommend_treatments(
            &p,
            &[diagnosis(Disease::Neumonia), diagnosis(Disease::Bronquitis)],
            Severity::Critica,
        );
        assert_eq!(treatments, vec![Treatment::UrgentHospitalization]);
    }

    #[test]
    fn covid_antivirals_only_when_high() {
        let p = patient(3, &["fiebre_alta"], &[]);
        let covid = [diagnosis(Disease::Covid19)];
        assert_eq!(
            RecommendationEngine.recommend_treatments(&p, &covid, Severity::Media),
            vec![Treatment::AntiInflammatories]
        );
        assert_eq!(
            RecommendationEngine.recommend_treatments(&p, &covid, Severity::Alta),
            vec![Treatment::Antivirals, Treatment::AntiInflammatories]
        );
    }

    #[test]
    fn flu_antivirals_need_risk_factor_and_early_onset() {
        let flu = [diagnosis(Disease::Gripe)];

        let early_at_risk = patient(2, &["fiebre_alta"], &["asma"]);
        assert_eq!(
            RecommendationEngine.recommend_treatments(&early_at_risk, &flu, Severity::Media),
            vec![Treatment::Antivirals, Treatment::AntiInflammatories]
        );

        let late_at_risk = patient(3, &["fiebre_alta"], &["asma"]);
        assert_eq!(
            RecommendationEngine.recommend_treatments(&late_at_risk, &flu, Severity::Media),
            vec![Treatment::AntiInflammatories]
        );

        let early_no_risk = patient(1, &["fiebre_alta"], &[]);
        assert_eq!(
            RecommendationEngine.recommend_treatments(&early_no_risk, &flu, Severity::Media),
            vec![Treatment::AntiInflammatories]
        );
    }

    #[test]
    fn antivirals_are_not_duplicated() {
        let p = patient(1, &["fiebre_alta"], &["edad_avanzada"]);
        let treatments = RecommendationEngine.recommend_treatments(
            &p,
            &[diagnosis(Disease::Covid19), diagnosis(Disease::Gripe)],
            Severity::Alta,
        );
        assert_eq!(
            treatments,
            vec![Treatment::Antivirals, Treatment::AntiInflammatories]
        );
    }

    #[test]
    fn allergy_at_low_severity_gets_antihistamines_and_rest() {
        let p = patient(7, &["estornudos", "congestion_nasal", "mucosidad"], &[]);
        let treatments = RecommendationEngine.recommend_treatments(
            &p,
            &[diagnosis(Disease::AlergiaRespiratoria)],
            Severity::Baja,
        );
        assert_eq!(
            treatments,
            vec![Treatment::Antihistamines, Treatment::RestAndHydration]
        );
    }

    #[test]
    fn bronchitis_gets_antitussives() {
        let p = patient(14, &["tos_productiva", "mucosidad"], &[]);
        let treatments = RecommendationEngine.recommend_treatments(
            &p,
            &[diagnosis(Disease::Bronquitis)],
            Severity::Baja,
        );
        assert_eq!(
            treatments,
            vec![Treatment::Antitussives, Treatment::RestAndHydration]
        );
    }

    #[test]
    fn no_diagnosis_and_no_signals_yields_empty_exams() {
        let p = patient(2, &["dolor_cabeza"], &[]);
        assert!(RecommendationEngine.recommend_exams(&p, &[]).is_empty());
        assert_eq!(
            RecommendationEngine.recommend_treatments(&p, &[], Severity::Baja),
            vec![Treatment::RestAndHydration]
        );
        assert!(RecommendationEngine
            .recommend_treatments(&p, &[], Severity::Media)
            .is_empty());
    }

    #[test]
    fn labels_serialise_as_display_text() {
        let json = serde_json::to_string(&vec![Exam::ChestXRay]).expect("serialise");
        assert_eq!(json, "[\"Chest X-Ray\"]");
        assert_eq!(Treatment::AntiInflammatories.to_string(), "Anti-inflammatories");
    }
}
