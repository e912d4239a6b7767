//! Mock model backend for testing
//!
//! This module provides a deterministic, model-free backend for exercising the
//! translation service without network access or model weights.
//!
//! # Example
//!
//! ```ignore
//! use notice_mt::{GenerationConfig, MockBackend, MockMode, ModelBackend};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let mock = MockBackend::new(MockMode::Fixed("पार्किंग की अनुमति नहीं है।".into()));
//!     let result = mock.generate("Parking is not allowed.", &GenerationConfig::default()).await.unwrap();
//!     assert_eq!(result, "पार्किंग की अनुमति नहीं है।");
//! }
//! ```

use crate::backend::{GenerationConfig, ModelBackend};
use crate::error::{MtError, MtResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Mock generation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Return the same output for every input
    Fixed(String),

    /// Use predefined source → translation mappings, echoing unknown input
    Mappings(HashMap<String, String>),

    /// Return the input unchanged
    Echo,

    /// Simulate a backend failure
    Error(MtError),
}

/// Mock backend that simulates model output
///
/// Counts every `generate` call so tests can assert whether the backend was
/// reached at all.
#[derive(Debug)]
pub struct MockBackend {
    mode: MockMode,
    /// Optional simulated inference delay (in milliseconds)
    delay_ms: u64,
    calls: AtomicUsize,
}

impl MockBackend {
    pub const MODEL_NAME: &'static str = "mock-en-hi";
    pub const DEVICE: &'static str = "mock";

    pub fn new(mode: MockMode) -> Self {
        Self::with_delay(mode, 0)
    }

    /// Create a MockBackend with simulated inference latency
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self {
            mode,
            delay_ms,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times `generate` has been invoked
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }
}

#[async_trait]
impl ModelBackend for MockBackend {
    async fn generate(&self, text: &str, _config: &GenerationConfig) -> MtResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.apply_delay().await;

        match &self.mode {
            MockMode::Fixed(output) => Ok(output.clone()),
            MockMode::Mappings(map) => Ok(map
                .get(text)
                .cloned()
                .unwrap_or_else(|| text.to_string())),
            MockMode::Echo => Ok(text.to_string()),
            MockMode::Error(err) => Err(err.clone()),
        }
    }

    fn model_name(&self) -> &str {
        Self::MODEL_NAME
    }

    fn device(&self) -> &str {
        Self::DEVICE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_ignores_input() {
        let mock = MockBackend::new(MockMode::Fixed("नमस्ते".to_string()));
        let config = GenerationConfig::default();
        assert_eq!(mock.generate("hello", &config).await.unwrap(), "नमस्ते");
        assert_eq!(mock.generate("goodbye", &config).await.unwrap(), "नमस्ते");
    }

    #[tokio::test]
    async fn test_mapping_lookup_and_fallback() {
        let mut map = HashMap::new();
        map.insert(
            "Parking is not allowed.".to_string(),
            "पार्किंग की अनुमति नहीं है।".to_string(),
        );
        let mock = MockBackend::new(MockMode::Mappings(map));
        let config = GenerationConfig::default();

        let known = mock.generate("Parking is not allowed.", &config).await.unwrap();
        assert_eq!(known, "पार्किंग की अनुमति नहीं है।");

        let unknown = mock.generate("Unmapped text", &config).await.unwrap();
        assert_eq!(unknown, "Unmapped text");
    }

    #[tokio::test]
    async fn test_echo_returns_input() {
        let mock = MockBackend::new(MockMode::Echo);
        let result = mock.generate("Section 144", &GenerationConfig::default()).await.unwrap();
        assert_eq!(result, "Section 144");
    }

    #[tokio::test]
    async fn test_error_mode_returns_error() {
        let mock = MockBackend::new(MockMode::Error(MtError::GenerationError(
            "CUDA out of memory".to_string(),
        )));
        let result = mock.generate("hello", &GenerationConfig::default()).await;
        match result {
            Err(MtError::GenerationError(msg)) => assert_eq!(msg, "CUDA out of memory"),
            _ => panic!("Expected GenerationError"),
        }
    }

    #[tokio::test]
    async fn test_call_count_tracks_invocations() {
        let mock = MockBackend::new(MockMode::Echo);
        assert_eq!(mock.call_count(), 0);
        let config = GenerationConfig::default();
        let _ = mock.generate("a", &config).await;
        let _ = mock.generate("b", &config).await;
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn test_delay_adds_latency() {
        let mock = MockBackend::with_delay(MockMode::Echo, 50);
        let start = std::time::Instant::now();
        let _ = mock.generate("hello", &GenerationConfig::default()).await.unwrap();
        assert!(start.elapsed().as_millis() >= 50);
    }

    #[test]
    fn test_identifiers() {
        let mock = MockBackend::new(MockMode::Echo);
        assert_eq!(mock.model_name(), "mock-en-hi");
        assert_eq!(mock.device(), "mock");
    }
}
