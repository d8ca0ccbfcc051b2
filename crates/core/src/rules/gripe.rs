use super::{Explanation, Rule};
use crate::constants::{DOLOR_MUSCULAR, FIEBRE_ALTA, PERDIDA_OLFATO, TOS_PRODUCTIVA, TOS_SECA};
use crate::disease::Disease;
use crate::patient::Patient;

const MAX_DURATION_DAYS: u32 = 10;

/// High fever, muscle pain and any cough, without loss of smell, for up to ten days.
#[derive(Clone, Copy, Debug, Default)]
pub struct GripeRule;

impl Rule for GripeRule {
    fn disease(&self) -> Disease {
        Disease::Gripe
    }

    fn matches(&self, p: &Patient) -> bool {
        p.has_symptom(FIEBRE_ALTA)
            && p.has_symptom(DOLOR_MUSCULAR)
            && p.has_any_symptom(&[TOS_SECA, TOS_PRODUCTIVA])
            && !p.has_symptom(PERDIDA_OLFATO)
            && p.duration_days() <= MAX_DURATION_DAYS
    }

    fn explain(&self, p: &Patient) -> String {
        Explanation::new()
            .line_if(p.has_symptom(FIEBRE_ALTA), "High fever")
            .line_if(
                p.has_symptom(DOLOR_MUSCULAR),
                "Muscle pain (very common in flu)",
            )
            .line_if(
                !p.has_symptom(PERDIDA_OLFATO),
                "No loss of smell (rules out COVID-19)",
            )
            .finish()
    }

    fn criteria(&self) -> &'static str {
        "fiebre_alta + dolor_muscular + (tos_seca | tos_productiva), no perdida_olfato, duration <= 10 days"
    }
}
