use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchTranslateError {
    #[error("IO error: {0}")]
    IOError(String),

    #[error("Invalid configuration error: {0}")]
    InvalidConfigurationError(String),

    #[error("Value error: {0}")]
    ValueError(String),

    #[error("Model error: {0}")]
    ModelError(String),
}

impl From<std::io::Error> for BatchTranslateError {
    fn from(error: std::io::Error) -> Self {
        BatchTranslateError::IOError(error.to_string())
    }
}

impl From<tempfile::PersistError> for BatchTranslateError {
    fn from(error: tempfile::PersistError) -> Self {
        BatchTranslateError::IOError(error.error.to_string())
    }
}

impl From<serde_json::Error> for BatchTranslateError {
    fn from(error: serde_json::Error) -> Self {
        BatchTranslateError::InvalidConfigurationError(error.to_string())
    }
}

#[cfg(feature = "marian")]
impl From<rust_bert::RustBertError> for BatchTranslateError {
    fn from(error: rust_bert::RustBertError) -> Self {
        BatchTranslateError::ModelError(error.to_string())
    }
}
