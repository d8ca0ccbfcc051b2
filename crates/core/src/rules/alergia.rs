use super::{Explanation, Rule};
use crate::constants::{CONGESTION_NASAL, ESTORNUDOS, FIEBRE_ALTA, FIEBRE_MODERADA};
use crate::disease::Disease;
use crate::patient::Patient;

/// Sneezing and nasal congestion with no fever of any grade.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlergiaRule;

impl Rule for AlergiaRule {
    fn disease(&self) -> Disease {
        Disease::AlergiaRespiratoria
    }

    fn matches(&self, p: &Patient) -> bool {
        p.has_symptom(ESTORNUDOS)
            && p.has_symptom(CONGESTION_NASAL)
            && !p.has_any_symptom(&[FIEBRE_ALTA, FIEBRE_MODERADA])
    }

    fn explain(&self, p: &Patient) -> String {
        Explanation::new()
            .line_if(p.has_symptom(ESTORNUDOS), "Frequent sneezing")
            .line_if(p.has_symptom(CONGESTION_NASAL), "Nasal congestion")
            .line_if(
                !p.has_any_symptom(&[FIEBRE_ALTA, FIEBRE_MODERADA]),
                "No fever (rules out infection)",
            )
            .finish()
    }

    fn criteria(&self) -> &'static str {
        "estornudos + congestion_nasal, no fiebre_alta, no fiebre_moderada"
    }
}
