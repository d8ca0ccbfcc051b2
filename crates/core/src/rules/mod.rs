//! Diagnostic rules.
//!
//! Each rule is a stateless predicate over a [`Patient`] bound to exactly one [`Disease`], plus
//! an explanation generator. Rules never see each other's verdicts. Adding a disease means adding
//! a variant to [`Disease`], a rule type here, and registering it in [`default_rules`].

mod alergia;
mod bronquitis;
mod covid19;
mod gripe;
mod neumonia;

pub use alergia::AlergiaRule;
pub use bronquitis::BronquitisRule;
pub use covid19::Covid19Rule;
pub use gripe::GripeRule;
pub use neumonia::NeumoniaRule;

use crate::constants::EXPLANATION_HEADER;
use crate::disease::Disease;
use crate::patient::Patient;

/// A single disease-matching predicate and its explanation.
pub trait Rule: Send + Sync {
    /// The disease this rule diagnoses.
    fn disease(&self) -> Disease;

    /// Returns `true` if the patient satisfies the rule.
    fn matches(&self, patient: &Patient) -> bool;

    /// Lists the rule's conditions the patient satisfies, one line each, in declaration order.
    ///
    /// Only meaningful for patients the rule matches.
    fn explain(&self, patient: &Patient) -> String;

    /// One-line summary of the rule's criteria.
    fn criteria(&self) -> &'static str;
}

/// The built-in rules in registration order.
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(Covid19Rule),
        Box::new(NeumoniaRule),
        Box::new(BronquitisRule),
        Box::new(GripeRule),
        Box::new(AlergiaRule),
    ]
}

/// Line-by-line builder for rule explanations.
pub(crate) struct Explanation(String);

impl Explanation {
    pub(crate) fn new() -> Self {
        Self(EXPLANATION_HEADER.to_string())
    }

    pub(crate) fn line(mut self, text: &str) -> Self {
        self.0.push_str("  ✓ ");
        self.0.push_str(text);
        self.0.push('\n');
        self
    }

    pub(crate) fn line_if(self, condition: bool, text: &str) -> Self {
        if condition {
            self.line(text)
        } else {
            self
        }
    }

    pub(crate) fn finish(self) -> String {
        self.0
    }
}
