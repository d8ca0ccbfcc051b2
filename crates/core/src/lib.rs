//! # dxr Core
//!
//! Core logic for the dxr respiratory diagnosis rule engine.
//!
//! This crate contains pure, synchronous operations over a [`Patient`] snapshot:
//! - Rule evaluation against a fixed, ordered rule set ([`DiagnosticEngine`])
//! - Severity classification through a first-match cascade ([`Severity`])
//! - Exam and treatment recommendations ([`RecommendationEngine`])
//! - Patient intake from YAML/JSON records ([`intake`])
//!
//! **No presentation concerns**: report text, sample patients and command-line wiring belong in
//! `dxr-cli`.

pub mod assessment;
pub mod constants;
pub mod diagnosis;
pub mod disease;
pub mod engine;
pub mod error;
pub mod intake;
pub mod patient;
pub mod recommendations;
pub mod rules;
pub mod severity;
pub mod symptom;

pub use assessment::{Assessment, DiagnosticService};
pub use diagnosis::Diagnosis;
pub use disease::{Disease, ParseDiseaseError};
pub use engine::DiagnosticEngine;
pub use error::{IntakeError, IntakeResult};
pub use patient::Patient;
pub use recommendations::{Exam, RecommendationEngine, Treatment};
pub use rules::Rule;
pub use severity::Severity;
pub use symptom::Symptom;
