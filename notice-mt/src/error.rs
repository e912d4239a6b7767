/// Error types for the translation pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MtError {
    /// Caller supplied blank text; a validation failure, not a system fault
    EmptyInput,
    /// Request fields are outside their accepted bounds
    InvalidRequest(String),
    /// Backend could not be configured (missing or malformed model location)
    ConfigError(String),
    /// Source text could not be encoded into a backend request
    EncodingError(String),
    /// Backend generation call failed
    GenerationError(String),
    /// Backend output could not be decoded into text
    DecodingError(String),
}

impl MtError {
    /// Whether this error originated in the model backend (encode, generate or decode)
    pub fn is_backend_failure(&self) -> bool {
        matches!(
            self,
            MtError::EncodingError(_) | MtError::GenerationError(_) | MtError::DecodingError(_)
        )
    }
}

impl std::fmt::Display for MtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MtError::EmptyInput => write!(f, "Empty input"),
            MtError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            MtError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            MtError::EncodingError(msg) => write!(f, "Encoding error: {}", msg),
            MtError::GenerationError(msg) => write!(f, "Generation error: {}", msg),
            MtError::DecodingError(msg) => write!(f, "Decoding error: {}", msg),
        }
    }
}

impl std::error::Error for MtError {}

impl From<reqwest::Error> for MtError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            MtError::DecodingError(err.to_string())
        } else {
            MtError::GenerationError(err.to_string())
        }
    }
}

/// Result type for translation operations
pub type MtResult<T> = Result<T, MtError>;
