//! Translation service: backend call, post-processing and scoring
//!
//! `TranslationService` owns a handle to the model backend, built once by the
//! composition root and shared read-only by every request. A translation never
//! fails with an error value: blank input and backend faults are folded into a
//! `TranslationResult` whose `metadata.error` explains what went wrong.

use crate::backend::{GenerationConfig, ModelBackend};
use crate::confidence::{estimate, word_count};
use crate::data::{TranslationMetadata, TranslationRequest, TranslationResult};
use crate::error::{MtError, MtResult};
use crate::preserve::preserve;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

pub struct TranslationService {
    backend: Arc<dyn ModelBackend>,
}

impl TranslationService {
    pub fn new(backend: Arc<dyn ModelBackend>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &dyn ModelBackend {
        self.backend.as_ref()
    }

    /// Translate a request, capturing every failure in the result
    pub async fn translate(&self, request: &TranslationRequest) -> TranslationResult {
        match self.try_translate(request).await {
            Ok(result) => result,
            Err(err) => {
                if err.is_backend_failure() {
                    warn!(error = %err, "Translation backend failed");
                } else {
                    debug!(error = %err, "Translation request rejected");
                }
                TranslationResult::failed(
                    err.to_string(),
                    request.beam_width,
                    self.backend.device(),
                )
            }
        }
    }

    /// Translate a request, returning blank input and backend faults as errors
    pub async fn try_translate(&self, request: &TranslationRequest) -> MtResult<TranslationResult> {
        let text = request.text.as_str();
        if word_count(text) == 0 {
            return Err(MtError::EmptyInput);
        }

        debug!(
            chars = text.chars().count(),
            num_beams = request.beam_width,
            preserve_numbers = request.preserve_numbers,
            "Translating"
        );

        let start = Instant::now();
        let config = GenerationConfig::with_beams(request.beam_width);
        let raw = self.backend.generate(text, &config).await?;

        let translation = if request.preserve_numbers {
            preserve(text, &raw)
        } else {
            raw
        };

        let confidence = estimate(text, &translation);

        info!(
            confidence,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Translation complete"
        );

        Ok(TranslationResult {
            metadata: TranslationMetadata {
                input_word_count: word_count(text),
                output_word_count: word_count(&translation),
                beam_width: request.beam_width,
                device: self.backend.device().to_string(),
                error: None,
            },
            translation,
            confidence,
        })
    }
}

impl std::fmt::Debug for TranslationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationService")
            .field("model", &self.backend.model_name())
            .field("device", &self.backend.device())
            .finish()
    }
}
