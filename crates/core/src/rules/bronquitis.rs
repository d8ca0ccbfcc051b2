use super::{Explanation, Rule};
use crate::constants::{DIFICULTAD_RESPIRAR, MUCOSIDAD, TOS_PRODUCTIVA};
use crate::disease::Disease;
use crate::patient::Patient;

const MIN_DURATION_DAYS: u32 = 10;

/// Productive cough with mucus lasting more than ten days, without shortness of breath.
#[derive(Clone, Copy, Debug, Default)]
pub struct BronquitisRule;

impl Rule for BronquitisRule {
    fn disease(&self) -> Disease {
        Disease::Bronquitis
    }

    fn matches(&self, p: &Patient) -> bool {
        p.has_symptom(TOS_PRODUCTIVA)
            && p.has_symptom(MUCOSIDAD)
            && p.duration_days() > MIN_DURATION_DAYS
            && !p.has_symptom(DIFICULTAD_RESPIRAR)
    }

    fn explain(&self, p: &Patient) -> String {
        Explanation::new()
            .line_if(
                p.has_symptom(TOS_PRODUCTIVA) && p.has_symptom(MUCOSIDAD),
                "Productive cough with mucus",
            )
            .line(&format!("Prolonged duration: {} days", p.duration_days()))
            .finish()
    }

    fn criteria(&self) -> &'static str {
        "tos_productiva + mucosidad, no dificultad_respirar, duration > 10 days"
    }
}
