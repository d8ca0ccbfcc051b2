//! Ordinal severity levels.

use serde::Serialize;

/// Urgency classification, ordered `Baja < Media < Alta < Critica`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Baja,
    Media,
    Alta,
    Critica,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Baja => "BAJA",
            Severity::Media => "MEDIA",
            Severity::Alta => "ALTA",
            Severity::Critica => "CRITICA",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered() {
        assert!(Severity::Critica > Severity::Alta);
        assert!(Severity::Alta > Severity::Media);
        assert!(Severity::Media > Severity::Baja);
    }

    #[test]
    fn display_and_serde_agree() {
        for level in [
            Severity::Baja,
            Severity::Media,
            Severity::Alta,
            Severity::Critica,
        ] {
            let json = serde_json::to_string(&level).expect("serialise");
            assert_eq!(json, format!("\"{level}\""));
        }
    }
}
