#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("failed to read patient file: {0}")]
    FileRead(std::io::Error),
    #[error("unsupported patient file format: {0}")]
    UnsupportedFormat(String),
    #[error("translation error: {0}")]
    Translation(String),
    #[error("failed to serialise patient: {0}")]
    Serialization(String),
}

pub type IntakeResult<T> = std::result::Result<T, IntakeError>;
