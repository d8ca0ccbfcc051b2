//! Constants used throughout the dxr core crate.
//!
//! Symptom tokens are the canonical names the built-in rules look for. The vocabulary is open:
//! a patient may report any token, and tokens not listed here are never matched by a rule.

/// High fever.
pub const FIEBRE_ALTA: &str = "fiebre_alta";

/// Moderate fever.
pub const FIEBRE_MODERADA: &str = "fiebre_moderada";

/// Dry cough.
pub const TOS_SECA: &str = "tos_seca";

/// Productive cough.
pub const TOS_PRODUCTIVA: &str = "tos_productiva";

/// Loss of smell.
pub const PERDIDA_OLFATO: &str = "perdida_olfato";

/// Loss of taste.
pub const PERDIDA_GUSTO: &str = "perdida_gusto";

/// Shortness of breath.
pub const DIFICULTAD_RESPIRAR: &str = "dificultad_respirar";

/// Chest pain.
pub const DOLOR_PECHO: &str = "dolor_pecho";

/// Muscle pain.
pub const DOLOR_MUSCULAR: &str = "dolor_muscular";

/// Mucus.
pub const MUCOSIDAD: &str = "mucosidad";

/// Sneezing.
pub const ESTORNUDOS: &str = "estornudos";

/// Nasal congestion.
pub const CONGESTION_NASAL: &str = "congestion_nasal";

/// Low oxygen saturation.
pub const SATURACION_BAJA: &str = "saturacion_baja";

/// Days of fever after which a full blood count is requested.
pub const FEVER_BLOOD_COUNT_AFTER_DAYS: u32 = 5;

/// Maximum symptom duration (days) for which influenza antivirals are still useful.
pub const FLU_ANTIVIRAL_WINDOW_DAYS: u32 = 2;

/// First line of every rule explanation.
pub const EXPLANATION_HEADER: &str = "The patient presents:\n";
