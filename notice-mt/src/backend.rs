//! Model backend trait and generation parameters
//!
//! The translation model itself is an opaque collaborator: given source text and
//! a set of beam-search parameters it returns a decoded target-language string.
//! This module defines the `ModelBackend` trait so the service can be composed
//! with any engine (a hosted inference endpoint, a mock, etc.) without coupling
//! the post-processing code to a specific runtime.
//!
//! # Example
//!
//! ```ignore
//! use notice_mt::{GenerationConfig, InferenceApiBackend, ModelBackend};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = InferenceApiBackend::from_env()?;
//!     let config = GenerationConfig::with_beams(4);
//!     let hindi = backend.generate("Parking is not allowed.", &config).await?;
//!     println!("{}", hindi);
//!     Ok(())
//! }
//! ```

use crate::error::MtResult;
use async_trait::async_trait;
use serde::Serialize;

/// Beam-search parameters passed to the backend on every call
///
/// Only `num_beams` is caller-controlled. The remaining fields are fixed engine
/// tuning constants; `max_length` bounds the output so callers cannot request
/// unbounded generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationConfig {
    pub max_length: usize,
    pub num_beams: u32,
    pub length_penalty: f32,
    pub early_stopping: bool,
    pub no_repeat_ngram_size: usize,
    pub repetition_penalty: f32,
}

impl GenerationConfig {
    /// Maximum number of tokens the backend may generate
    pub const MAX_LENGTH: usize = 96;

    /// Default beam width when the caller does not specify one
    pub const DEFAULT_BEAMS: u32 = 4;

    /// Build the fixed generation profile with the given beam width
    pub fn with_beams(num_beams: u32) -> Self {
        Self {
            max_length: Self::MAX_LENGTH,
            num_beams,
            length_penalty: 1.0,
            early_stopping: true,
            no_repeat_ngram_size: 2,
            repetition_penalty: 1.2,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::with_beams(Self::DEFAULT_BEAMS)
    }
}

/// Generic trait for translation model backends
///
/// Implementations cover the whole encode → generate → decode round trip and
/// report failures of any stage as an `MtError` rather than panicking.
/// A single backend instance is shared read-only across concurrent requests.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Translate `text` and return the decoded target-language candidate
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The decoded translation (special tokens stripped)
    /// * `Err(MtError)` - `EncodingError`, `GenerationError` or `DecodingError`
    async fn generate(&self, text: &str, config: &GenerationConfig) -> MtResult<String>;

    /// Identifier of the loaded model, reported by the health endpoint
    fn model_name(&self) -> &str;

    /// Opaque identifier of where inference runs (e.g. "cpu", "remote:host")
    fn device(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_beams_keeps_fixed_tuning() {
        let config = GenerationConfig::with_beams(7);
        assert_eq!(config.num_beams, 7);
        assert_eq!(config.max_length, 96);
        assert_eq!(config.length_penalty, 1.0);
        assert!(config.early_stopping);
        assert_eq!(config.no_repeat_ngram_size, 2);
        assert_eq!(config.repetition_penalty, 1.2);
    }

    #[test]
    fn test_default_uses_four_beams() {
        assert_eq!(GenerationConfig::default().num_beams, 4);
    }

    #[test]
    fn test_serializes_as_generation_parameters() {
        let json = serde_json::to_value(GenerationConfig::with_beams(2)).unwrap();
        assert_eq!(json["num_beams"], 2);
        assert_eq!(json["max_length"], 96);
        assert_eq!(json["no_repeat_ngram_size"], 2);
        assert_eq!(json["early_stopping"], true);
    }
}
