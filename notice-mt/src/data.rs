//! Request and result types for a single translation
//!
//! Both are transient: created per request and never persisted. Field names on
//! the wire follow the public JSON API (`num_beams`, `input_length`, ...).

use crate::backend::GenerationConfig;
use crate::error::{MtError, MtResult};
use serde::{Deserialize, Serialize};

fn default_beam_width() -> u32 {
    GenerationConfig::DEFAULT_BEAMS
}

fn default_preserve_numbers() -> bool {
    true
}

/// A caller's translation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// English source text
    pub text: String,
    /// Beam search width (1-10)
    #[serde(rename = "num_beams", default = "default_beam_width")]
    pub beam_width: u32,
    /// Apply section-number and curfew corrections
    #[serde(default = "default_preserve_numbers")]
    pub preserve_numbers: bool,
}

impl TranslationRequest {
    pub const MAX_TEXT_CHARS: usize = 1000;
    pub const MIN_BEAM_WIDTH: u32 = 1;
    pub const MAX_BEAM_WIDTH: u32 = 10;

    /// Create a request with default beam width and preservation enabled
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            beam_width: default_beam_width(),
            preserve_numbers: default_preserve_numbers(),
        }
    }

    pub fn with_beam_width(mut self, beam_width: u32) -> Self {
        self.beam_width = beam_width;
        self
    }

    pub fn with_preserve_numbers(mut self, preserve_numbers: bool) -> Self {
        self.preserve_numbers = preserve_numbers;
        self
    }

    /// Check field bounds before the request reaches the service
    ///
    /// Whitespace-only text passes here on purpose; the service reports it as
    /// `Empty input` without touching the backend.
    pub fn validate(&self) -> MtResult<()> {
        let chars = self.text.chars().count();
        if chars == 0 {
            return Err(MtError::InvalidRequest(
                "text must contain at least 1 character".to_string(),
            ));
        }
        if chars > Self::MAX_TEXT_CHARS {
            return Err(MtError::InvalidRequest(format!(
                "text must be at most {} characters, got {}",
                Self::MAX_TEXT_CHARS,
                chars
            )));
        }
        if !(Self::MIN_BEAM_WIDTH..=Self::MAX_BEAM_WIDTH).contains(&self.beam_width) {
            return Err(MtError::InvalidRequest(format!(
                "num_beams must be between {} and {}, got {}",
                Self::MIN_BEAM_WIDTH,
                Self::MAX_BEAM_WIDTH,
                self.beam_width
            )));
        }
        Ok(())
    }
}

/// Details reported alongside a translation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationMetadata {
    /// Whitespace-delimited word count of the source
    #[serde(rename = "input_length")]
    pub input_word_count: usize,
    /// Whitespace-delimited word count of the final translation
    #[serde(rename = "output_length")]
    pub output_word_count: usize,
    #[serde(rename = "num_beams")]
    pub beam_width: u32,
    pub device: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of one translation
///
/// When `metadata.error` is set the translation is empty and confidence is 0.0;
/// `TranslationResult::failed` is the only constructor for that state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub translation: String,
    pub confidence: f64,
    pub metadata: TranslationMetadata,
}

impl TranslationResult {
    pub fn failed(error: impl Into<String>, beam_width: u32, device: &str) -> Self {
        Self {
            translation: String::new(),
            confidence: 0.0,
            metadata: TranslationMetadata {
                input_word_count: 0,
                output_word_count: 0,
                beam_width,
                device: device.to_string(),
                error: Some(error.into()),
            },
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.metadata.error.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.metadata.error.is_none()
    }
}
