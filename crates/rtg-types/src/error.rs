use thiserror::Error;

#[derive(Error, Debug)]
pub enum RtgError {
    #[error("Cannot parse field '{field}' from value '{value}'")]
    ConfigParse { field: String, value: String },

    #[error("Ignored duplicate fuel type {0}")]
    DuplicateDefinition(String),

    #[error("Fuel '{0}' not found in catalog")]
    UnresolvedReference(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Generator unit used before load")]
    Uninitialized,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type RtgResult<T> = Result<T, RtgError>;
