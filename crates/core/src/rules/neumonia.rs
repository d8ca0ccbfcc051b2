use super::{Explanation, Rule};
use crate::constants::{DIFICULTAD_RESPIRAR, DOLOR_PECHO, FIEBRE_ALTA, TOS_PRODUCTIVA, TOS_SECA};
use crate::disease::Disease;
use crate::patient::Patient;

/// High fever, shortness of breath and chest pain with any cough. No duration limit.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeumoniaRule;

impl Rule for NeumoniaRule {
    fn disease(&self) -> Disease {
        Disease::Neumonia
    }

    fn matches(&self, p: &Patient) -> bool {
        p.has_symptom(FIEBRE_ALTA)
            && p.has_symptom(DIFICULTAD_RESPIRAR)
            && p.has_symptom(DOLOR_PECHO)
            && p.has_any_symptom(&[TOS_PRODUCTIVA, TOS_SECA])
    }

    fn explain(&self, p: &Patient) -> String {
        Explanation::new()
            .line_if(p.has_symptom(FIEBRE_ALTA), "High fever")
            .line_if(
                p.has_symptom(DIFICULTAD_RESPIRAR),
                "Shortness of breath (serious symptom)",
            )
            .line_if(p.has_symptom(DOLOR_PECHO), "Chest pain")
            .finish()
    }

    fn criteria(&self) -> &'static str {
        "fiebre_alta + dificultad_respirar + dolor_pecho + (tos_productiva | tos_seca)"
    }
}
