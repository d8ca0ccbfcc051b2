//! The closed set of diseases the built-in rules can diagnose.

use serde::{Serialize, Serializer};
use std::str::FromStr;

/// A disease with a built-in diagnostic rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Disease {
    Covid19,
    Neumonia,
    Bronquitis,
    Gripe,
    AlergiaRespiratoria,
}

impl Disease {
    /// All diseases, in rule-registration order.
    pub const ALL: [Disease; 5] = [
        Disease::Covid19,
        Disease::Neumonia,
        Disease::Bronquitis,
        Disease::Gripe,
        Disease::AlergiaRespiratoria,
    ];

    /// Canonical display name.
    pub fn name(self) -> &'static str {
        match self {
            Disease::Covid19 => "COVID-19",
            Disease::Neumonia => "Neumonía",
            Disease::Bronquitis => "Bronquitis",
            Disease::Gripe => "Gripe",
            Disease::AlergiaRespiratoria => "Alergia Respiratoria",
        }
    }

    /// ASCII identifier accepted on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            Disease::Covid19 => "covid19",
            Disease::Neumonia => "neumonia",
            Disease::Bronquitis => "bronquitis",
            Disease::Gripe => "gripe",
            Disease::AlergiaRespiratoria => "alergia_respiratoria",
        }
    }
}

impl std::fmt::Display for Disease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Disease {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

/// Error returned when a string names no known disease.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown disease: {0}")]
pub struct ParseDiseaseError(pub String);

impl FromStr for Disease {
    type Err = ParseDiseaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Disease::ALL
            .into_iter()
            .find(|d| d.name() == s || d.slug() == s)
            .ok_or_else(|| ParseDiseaseError(s.to_string()))
    }
}
