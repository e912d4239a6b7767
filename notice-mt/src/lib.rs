//! English → Hindi public-notice translation
//!
//! This crate wraps a pretrained translation model with the domain-specific
//! post-processing public notices need (section numbers, fixed vocabulary) and a
//! length-ratio confidence score.
//!
//! # Workflow Example
//!
//! ```ignore
//! use notice_mt::{InferenceApiBackend, TranslationRequest, TranslationService};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Build the backend once at startup
//!     let backend = Arc::new(InferenceApiBackend::from_env()?);
//!
//!     // 2. Hand it to the service
//!     let service = TranslationService::new(backend);
//!
//!     // 3. Translate; failures come back inside the result
//!     let request = TranslationRequest::new("This notice is issued under Section 144");
//!     let result = service.translate(&request).await;
//!
//!     println!("{} ({:.1})", result.translation, result.confidence);
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod confidence;
pub mod data;
pub mod error;
pub mod inference_api;
pub mod mock;
pub mod preserve;
pub mod samples;
pub mod service;

// Integration tests (only available during testing)
#[cfg(test)]
mod integration_tests;

// Re-export main types for convenient access
pub use backend::{GenerationConfig, ModelBackend};
pub use confidence::{estimate, word_count};
pub use data::{TranslationMetadata, TranslationRequest, TranslationResult};
pub use error::{MtError, MtResult};
pub use inference_api::InferenceApiBackend;
pub use mock::{MockBackend, MockMode};
pub use preserve::{preserve, section_numbers};
pub use samples::{SAMPLE_PAIRS, SamplePair};
pub use service::TranslationService;
