//! Diagnostic engine.
//!
//! Runs every registered rule against a patient and classifies severity. The engine holds only
//! its ordered rule list; it keeps no per-patient state, so results are never cached between
//! calls.

use crate::constants::{DIFICULTAD_RESPIRAR, FIEBRE_ALTA, SATURACION_BAJA};
use crate::diagnosis::Diagnosis;
use crate::disease::Disease;
use crate::patient::Patient;
use crate::rules::{default_rules, Rule};
use crate::severity::Severity;

/// Evaluates a fixed, ordered list of rules.
pub struct DiagnosticEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl DiagnosticEngine {
    /// Creates an engine over the built-in rules.
    pub fn new() -> Self {
        Self::with_rules(default_rules())
    }

    /// Creates an engine over an explicit rule list. Result order follows list order.
    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Returns one diagnosis per matching rule, in rule-registration order.
    pub fn evaluate(&self, patient: &Patient) -> Vec<Diagnosis> {
        let diagnoses: Vec<Diagnosis> = self
            .rules
            .iter()
            .filter(|rule| rule.matches(patient))
            .map(|rule| {
                tracing::debug!(
                    patient = patient.id(),
                    disease = rule.disease().name(),
                    "rule matched"
                );
                Diagnosis::new(
                    rule.disease(),
                    rule.explain(patient),
                    patient.symptom_names(),
                )
            })
            .collect();

        tracing::debug!(
            patient = patient.id(),
            rules = self.rules.len(),
            matched = diagnoses.len(),
            "evaluation finished"
        );

        diagnoses
    }

    /// Classifies severity, running a fresh evaluation for the pneumonia check.
    pub fn severity(&self, patient: &Patient) -> Severity {
        if is_critical(patient) {
            return Severity::Critica;
        }
        self.classify(patient, &self.evaluate(patient))
    }

    /// Classifies severity against diagnoses already computed for this patient.
    ///
    /// First matching branch wins:
    /// 1. `CRITICA`: low saturation and shortness of breath
    /// 2. `ALTA`: pneumonia diagnosed, or shortness of breath with high fever
    /// 3. `MEDIA`: high fever
    /// 4. `BAJA`: otherwise
    pub fn classify(&self, patient: &Patient, diagnoses: &[Diagnosis]) -> Severity {
        if is_critical(patient) {
            Severity::Critica
        } else if diagnoses.iter().any(|d| d.disease() == Disease::Neumonia)
            || (patient.has_symptom(DIFICULTAD_RESPIRAR) && patient.has_symptom(FIEBRE_ALTA))
        {
            Severity::Alta
        } else if patient.has_symptom(FIEBRE_ALTA) {
            Severity::Media
        } else {
            Severity::Baja
        }
    }

    /// Returns the diagnosis for `disease` if its rule matches the patient.
    pub fn explain(&self, patient: &Patient, disease: Disease) -> Option<Diagnosis> {
        self.evaluate(patient)
            .into_iter()
            .find(|d| d.disease() == disease)
    }
}

impl Default for DiagnosticEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn is_critical(patient: &Patient) -> bool {
    patient.has_symptom(SATURACION_BAJA) && patient.has_symptom(DIFICULTAD_RESPIRAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{AlergiaRule, Covid19Rule, NeumoniaRule};

    fn patient(id: &str, duration: u32, symptoms: &[&str]) -> Patient {
        let mut p = Patient::new(id, duration);
        for s in symptoms {
            p.add_symptom(*s);
        }
        p
    }

    fn diseases(diagnoses: &[Diagnosis]) -> Vec<Disease> {
        diagnoses.iter().map(|d| d.disease()).collect()
    }

    #[test]
    fn scenario_covid_is_medium() {
        let engine = DiagnosticEngine::new();
        let p = patient(
            "a",
            3,
            &["fiebre_alta", "tos_seca", "perdida_olfato", "perdida_gusto"],
        );

        let diagnoses = engine.evaluate(&p);
        assert!(diseases(&diagnoses).contains(&Disease::Covid19));
        assert_eq!(engine.severity(&p), Severity::Media);
    }

    #[test]
    fn scenario_pneumonia_with_low_saturation_is_critical() {
        let engine = DiagnosticEngine::new();
        let p = patient(
            "b",
            5,
            &[
                "fiebre_alta",
                "tos_productiva",
                "dificultad_respirar",
                "dolor_pecho",
                "saturacion_baja",
            ],
        );

        assert!(diseases(&engine.evaluate(&p)).contains(&Disease::Neumonia));
        assert_eq!(engine.severity(&p), Severity::Critica);
    }

    #[test]
    fn scenario_allergy_is_low() {
        let engine = DiagnosticEngine::new();
        let p = patient("c", 7, &["estornudos", "congestion_nasal", "mucosidad"]);

        assert_eq!(
            diseases(&engine.evaluate(&p)),
            vec![Disease::AlergiaRespiratoria]
        );
        assert_eq!(engine.severity(&p), Severity::Baja);
    }

    #[test]
    fn comorbidities_are_reported_in_registration_order() {
        let engine = DiagnosticEngine::new();
        // COVID-19 and pneumonia at once; flu is excluded by the loss of smell.
        let p = patient(
            "multi",
            4,
            &[
                "dolor_pecho",
                "perdida_olfato",
                "dificultad_respirar",
                "tos_seca",
                "fiebre_alta",
                "dolor_muscular",
            ],
        );
        assert_eq!(
            diseases(&engine.evaluate(&p)),
            vec![Disease::Covid19, Disease::Neumonia]
        );
    }

    #[test]
    fn removing_a_non_matching_rule_keeps_other_verdicts() {
        let p = patient("c", 7, &["estornudos", "congestion_nasal"]);
        let full = DiagnosticEngine::new().evaluate(&p);
        let reduced = DiagnosticEngine::with_rules(vec![
            Box::new(Covid19Rule),
            Box::new(AlergiaRule),
        ])
        .evaluate(&p);
        assert_eq!(full, reduced);
    }

    #[test]
    fn result_order_follows_registration() {
        let p = patient(
            "multi",
            4,
            &["fiebre_alta", "tos_seca", "perdida_olfato", "dificultad_respirar", "dolor_pecho"],
        );
        let reversed =
            DiagnosticEngine::with_rules(vec![Box::new(NeumoniaRule), Box::new(Covid19Rule)]);
        assert_eq!(
            diseases(&reversed.evaluate(&p)),
            vec![Disease::Neumonia, Disease::Covid19]
        );
    }

    #[test]
    fn diagnoses_carry_all_reported_symptoms() {
        let engine = DiagnosticEngine::new();
        let p = patient(
            "c",
            7,
            &["estornudos", "congestion_nasal", "mucosidad", "dolor_cabeza"],
        );
        let diagnoses = engine.evaluate(&p);
        assert_eq!(
            diagnoses[0].reported_symptoms(),
            &["estornudos", "congestion_nasal", "mucosidad", "dolor_cabeza"]
        );
    }

    #[test]
    fn unknown_symptoms_are_inert() {
        let engine = DiagnosticEngine::new();
        let p = patient("x", 2, &["dolor_cabeza", "fatiga", "Fiebre_Alta"]);
        assert!(engine.evaluate(&p).is_empty());
        assert_eq!(engine.severity(&p), Severity::Baja);
    }

    #[test]
    fn critical_wins_over_lower_tiers() {
        let engine = DiagnosticEngine::new();
        let p = patient(
            "crit",
            1,
            &["saturacion_baja", "dificultad_respirar", "fiebre_alta", "dolor_pecho", "tos_seca"],
        );
        assert_eq!(engine.severity(&p), Severity::Critica);
        assert_eq!(engine.classify(&p, &[]), Severity::Critica);
    }

    #[test]
    fn breathing_difficulty_with_fever_is_high_without_pneumonia() {
        let engine = DiagnosticEngine::new();
        let p = patient("alta", 2, &["dificultad_respirar", "fiebre_alta"]);
        assert!(engine.evaluate(&p).is_empty());
        assert_eq!(engine.severity(&p), Severity::Alta);
    }

    #[test]
    fn low_saturation_alone_is_not_critical() {
        let engine = DiagnosticEngine::new();
        let p = patient("sat", 2, &["saturacion_baja"]);
        assert_eq!(engine.severity(&p), Severity::Baja);
    }

    #[test]
    fn severity_reflects_later_mutation() {
        let engine = DiagnosticEngine::new();
        let mut p = patient("m", 2, &["fiebre_alta"]);
        assert_eq!(engine.severity(&p), Severity::Media);
        p.add_symptom("dificultad_respirar");
        assert_eq!(engine.severity(&p), Severity::Alta);
        p.add_symptom("saturacion_baja");
        assert_eq!(engine.severity(&p), Severity::Critica);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let engine = DiagnosticEngine::new();
        let p = patient(
            "a",
            3,
            &["fiebre_alta", "tos_seca", "perdida_olfato", "dolor_muscular"],
        );
        assert_eq!(engine.evaluate(&p), engine.evaluate(&p));
        assert_eq!(engine.severity(&p), engine.severity(&p));
    }

    #[test]
    fn explain_returns_none_for_undiagnosed_disease() {
        let engine = DiagnosticEngine::new();
        let p = patient("c", 7, &["estornudos", "congestion_nasal"]);
        assert!(engine.explain(&p, Disease::Covid19).is_none());
        let diagnosis = engine
            .explain(&p, Disease::AlergiaRespiratoria)
            .expect("allergy should be diagnosed");
        assert!(diagnosis.explanation().contains("Nasal congestion"));
    }
}
