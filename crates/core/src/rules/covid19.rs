use super::{Explanation, Rule};
use crate::constants::{FIEBRE_ALTA, PERDIDA_GUSTO, PERDIDA_OLFATO, TOS_SECA};
use crate::disease::Disease;
use crate::patient::Patient;

const MAX_DURATION_DAYS: u32 = 7;

/// High fever and dry cough with loss of smell or taste, within the first week.
#[derive(Clone, Copy, Debug, Default)]
pub struct Covid19Rule;

impl Rule for Covid19Rule {
    fn disease(&self) -> Disease {
        Disease::Covid19
    }

    fn matches(&self, p: &Patient) -> bool {
        p.has_symptom(FIEBRE_ALTA)
            && p.has_symptom(TOS_SECA)
            && p.has_any_symptom(&[PERDIDA_OLFATO, PERDIDA_GUSTO])
            && p.duration_days() <= MAX_DURATION_DAYS
    }

    fn explain(&self, p: &Patient) -> String {
        Explanation::new()
            .line_if(
                p.has_symptom(FIEBRE_ALTA),
                "High fever (key COVID-19 symptom)",
            )
            .line_if(p.has_symptom(TOS_SECA), "Dry cough (common in COVID-19)")
            .line_if(
                p.has_any_symptom(&[PERDIDA_OLFATO, PERDIDA_GUSTO]),
                "Loss of smell/taste (characteristic symptom)",
            )
            .line(&format!(
                "Duration: {} days (typical of early phase)",
                p.duration_days()
            ))
            .finish()
    }

    fn criteria(&self) -> &'static str {
        "fiebre_alta + tos_seca + (perdida_olfato | perdida_gusto), duration <= 7 days"
    }
}
