//! Patient intake from YAML and JSON files.
//!
//! Responsibilities:
//! - Define a strict wire model for patient records
//! - Translate wire records into [`Patient`] values through the normal `add_*` operations
//! - Surface the failing field path when a document does not match the schema
//!
//! Notes:
//! - Symptom tokens and risk factors are not validated; unknown tokens are inert in the engine
//! - Duplicate symptoms in a document collapse to one, as with [`Patient::add_symptom`]

use crate::error::{IntakeError, IntakeResult};
use crate::patient::Patient;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Wire representation of a patient record.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct PatientRecord {
    id: String,

    duration_days: u32,

    #[serde(default)]
    symptoms: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    risk_factors: Vec<String>,
}

impl From<PatientRecord> for Patient {
    fn from(record: PatientRecord) -> Self {
        let mut patient = Patient::new(record.id, record.duration_days);
        for symptom in record.symptoms {
            patient.add_symptom(symptom);
        }
        for factor in record.risk_factors {
            patient.add_risk_factor(factor);
        }
        patient
    }
}

impl From<&Patient> for PatientRecord {
    fn from(patient: &Patient) -> Self {
        Self {
            id: patient.id().to_string(),
            duration_days: patient.duration_days(),
            symptoms: patient.symptom_names(),
            risk_factors: patient.risk_factors().to_vec(),
        }
    }
}

/// Parse a patient record from YAML text.
///
/// This uses `serde_path_to_error` to surface a best-effort "path" (e.g. `duration_days`)
/// to the failing field when the YAML does not match the wire schema.
///
/// # Errors
///
/// Returns [`IntakeError::Translation`] if a field is missing, has the wrong type,
/// or an unknown key is present.
pub fn parse_yaml(yaml_text: &str) -> IntakeResult<Patient> {
    let deserializer = serde_yaml::Deserializer::from_str(yaml_text);
    let record = serde_path_to_error::deserialize::<_, PatientRecord>(deserializer)
        .map_err(|err| schema_mismatch(err.path().to_string(), err.into_inner()))?;
    Ok(record.into())
}

/// Parse a patient record from JSON text.
///
/// # Errors
///
/// Same as [`parse_yaml`].
pub fn parse_json(json_text: &str) -> IntakeResult<Patient> {
    let mut deserializer = serde_json::Deserializer::from_str(json_text);
    let record = serde_path_to_error::deserialize::<_, PatientRecord>(&mut deserializer)
        .map_err(|err| schema_mismatch(err.path().to_string(), err.into_inner()))?;
    Ok(record.into())
}

/// Load a patient from a `.yaml`, `.yml` or `.json` file.
///
/// # Errors
///
/// Returns [`IntakeError::UnsupportedFormat`] for any other extension, [`IntakeError::FileRead`]
/// if the file cannot be read, or a translation error from the parser.
pub fn load(path: &Path) -> IntakeResult<Patient> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let parse: fn(&str) -> IntakeResult<Patient> = match extension.as_deref() {
        Some("yaml" | "yml") => parse_yaml,
        Some("json") => parse_json,
        _ => {
            return Err(IntakeError::UnsupportedFormat(
                path.display().to_string(),
            ))
        }
    };

    let contents = std::fs::read_to_string(path).map_err(IntakeError::FileRead)?;
    let patient = parse(&contents)?;
    tracing::debug!(
        path = %path.display(),
        patient = patient.id(),
        symptoms = patient.symptoms().len(),
        "patient loaded"
    );
    Ok(patient)
}

/// Render a patient as YAML in the intake wire format.
///
/// # Errors
///
/// Returns [`IntakeError::Serialization`] if serialisation fails.
pub fn render_yaml(patient: &Patient) -> IntakeResult<String> {
    serde_yaml::to_string(&PatientRecord::from(patient))
        .map_err(|e| IntakeError::Serialization(e.to_string()))
}

fn schema_mismatch(path: String, source: impl std::fmt::Display) -> IntakeError {
    let path = if path.is_empty() || path == "." {
        "<root>".to_string()
    } else {
        path
    };
    IntakeError::Translation(format!("intake schema mismatch at {path}: {source}"))
}
