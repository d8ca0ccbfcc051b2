//! Patient model.
//!
//! A patient accumulates symptoms and risk factors through explicit `add_*` calls before being
//! handed to the engine. There is no removal operation.

use crate::symptom::Symptom;

/// A patient's reported symptoms, symptom duration and risk factors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Patient {
    id: String,
    symptoms: Vec<Symptom>,
    duration_days: u32,
    risk_factors: Vec<String>,
}

impl Patient {
    /// Creates a patient with no symptoms and no risk factors.
    ///
    /// The duration is fixed for the lifetime of the patient and is not validated.
    pub fn new(id: impl Into<String>, duration_days: u32) -> Self {
        Self {
            id: id.into(),
            symptoms: Vec::new(),
            duration_days,
            risk_factors: Vec::new(),
        }
    }

    /// Adds a symptom unless one with the same name is already present.
    ///
    /// Returns `true` if the symptom was inserted.
    pub fn add_symptom(&mut self, symptom: impl Into<Symptom>) -> bool {
        let symptom = symptom.into();
        if self.symptoms.contains(&symptom) {
            return false;
        }
        self.symptoms.push(symptom);
        true
    }

    /// Appends a free-text risk factor. Duplicates are kept.
    pub fn add_risk_factor(&mut self, factor: impl Into<String>) {
        self.risk_factors.push(factor.into());
    }

    pub fn has_symptom(&self, name: &str) -> bool {
        self.symptoms.iter().any(|s| s.name() == name)
    }

    /// Returns `true` if at least one of `names` is present.
    pub fn has_any_symptom(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.has_symptom(name))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Symptoms in insertion order.
    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    /// Symptom names in insertion order.
    pub fn symptom_names(&self) -> Vec<String> {
        self.symptoms.iter().map(|s| s.name().to_string()).collect()
    }

    pub fn duration_days(&self) -> u32 {
        self.duration_days
    }

    pub fn risk_factors(&self) -> &[String] {
        &self.risk_factors
    }

    pub fn has_risk_factors(&self) -> bool {
        !self.risk_factors.is_empty()
    }
}
