//! Symptom value object.

use serde::{Deserialize, Serialize};

/// A single reported symptom, identified by its canonical name.
///
/// Equality and hashing use the name only. Names are case-sensitive and are not validated
/// against any vocabulary.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symptom(String);

impl Symptom {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symptom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symptom {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symptom {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Symptom {
    fn from(name: String) -> Self {
        Self(name)
    }
}
