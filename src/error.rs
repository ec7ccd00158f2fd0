use thiserror::Error;

#[derive(Error, Debug)]
pub enum PitchError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Unknown value '{value}' for field '{field}' (expected one of: {expected})")]
    UnknownValue {
        field: &'static str,
        value: String,
        expected: String,
    },

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type PitchResult<T> = Result<T, PitchError>;
