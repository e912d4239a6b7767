//! Hosted inference endpoint backend
//!
//! This module talks to a text2text-generation inference endpoint that serves the
//! fine-tuned English → Hindi model (Hugging Face Inference API wire format).
//! The model weights, tokenizer and beam search all live on the server; this
//! backend only ships the source text plus the generation parameters and reads
//! back the decoded translation.
//!
//! # Configuration
//!
//! - `NOTICE_MT_MODEL_URL` (required): endpoint serving the model, e.g.
//!   `https://api-inference.huggingface.co/models/utkarshsingh0013/enghind-translator`
//! - `NOTICE_MT_API_TOKEN` (optional): bearer token sent with every request
//!
//! # Example
//!
//! ```ignore
//! use notice_mt::{GenerationConfig, InferenceApiBackend, ModelBackend};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = InferenceApiBackend::from_env()?;
//!     let result = backend
//!         .generate("Smoking is strictly forbidden.", &GenerationConfig::default())
//!         .await?;
//!     println!("{}", result);
//!     Ok(())
//! }
//! ```

use crate::backend::{GenerationConfig, ModelBackend};
use crate::error::{MtError, MtResult};
use async_trait::async_trait;
use reqwest::Url;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

pub const MODEL_URL_VAR: &str = "NOTICE_MT_MODEL_URL";
pub const API_TOKEN_VAR: &str = "NOTICE_MT_API_TOKEN";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationConfig,
}

/// Backend that delegates generation to a remote inference endpoint
#[derive(Clone)]
pub struct InferenceApiBackend {
    url: Url,
    api_token: Option<String>,
    client: reqwest::Client,
    model_name: String,
    device: String,
}

impl InferenceApiBackend {
    /// Timeout for a single generation round trip
    const REQUEST_TIMEOUT_SECS: u64 = 60;

    /// Create a backend for the given model location
    ///
    /// The URL is validated eagerly so a misconfigured server fails at startup
    /// rather than on the first request.
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - New backend instance
    /// * `Err(MtError::ConfigError)` - If the URL is empty, malformed or not http(s)
    pub fn new(model_url: &str, api_token: Option<String>) -> MtResult<Self> {
        let model_url = model_url.trim();
        if model_url.is_empty() {
            return Err(MtError::ConfigError("Model URL cannot be empty".to_string()));
        }

        let url = Url::parse(model_url).map_err(|e| {
            MtError::ConfigError(format!("Invalid model URL '{}': {}", model_url, e))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(MtError::ConfigError(format!(
                "Unsupported model URL scheme '{}'",
                url.scheme()
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(Self::REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| MtError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        let model_name = match url.path().strip_prefix("/models/") {
            Some(name) if !name.is_empty() => name.trim_end_matches('/').to_string(),
            _ => url.to_string(),
        };
        let device = format!("remote:{}", url.host_str().unwrap_or("unknown"));

        Ok(Self {
            url,
            api_token: api_token.filter(|t| !t.trim().is_empty()),
            client,
            model_name,
            device,
        })
    }

    /// Create a backend from `NOTICE_MT_MODEL_URL` and optional `NOTICE_MT_API_TOKEN`
    pub fn from_env() -> MtResult<Self> {
        let model_url = std::env::var(MODEL_URL_VAR).map_err(|_| {
            MtError::ConfigError(format!("{} environment variable not set", MODEL_URL_VAR))
        })?;

        Self::new(&model_url, std::env::var(API_TOKEN_VAR).ok())
    }

    fn encode(text: &str, config: &GenerationConfig) -> MtResult<Vec<u8>> {
        serde_json::to_vec(&GenerateRequest {
            inputs: text,
            parameters: config,
        })
        .map_err(|e| MtError::EncodingError(format!("Failed to encode request: {}", e)))
    }

    /// Extract the first decoded candidate from an endpoint response
    ///
    /// Accepts either a list of candidates or a single candidate object, keyed
    /// by `translation_text` or `generated_text`. The text is returned as the
    /// endpoint produced it, surrounding whitespace included.
    fn decode(body: &Value) -> MtResult<String> {
        let candidate = match body {
            Value::Array(items) => items.first().ok_or_else(|| {
                MtError::DecodingError("Invalid response: empty candidate list".to_string())
            })?,
            other => other,
        };

        candidate
            .get("translation_text")
            .or_else(|| candidate.get("generated_text"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                MtError::DecodingError(
                    "Invalid response: missing 'translation_text' field".to_string(),
                )
            })
    }
}

impl std::fmt::Debug for InferenceApiBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceApiBackend")
            .field("url", &self.url.as_str())
            .field("api_token", &self.api_token.as_ref().map(|_| "***"))
            .field("model_name", &self.model_name)
            .finish()
    }
}

#[async_trait]
impl ModelBackend for InferenceApiBackend {
    async fn generate(&self, text: &str, config: &GenerationConfig) -> MtResult<String> {
        let body = Self::encode(text, config)?;

        let mut request = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        debug!(
            model = %self.model_name,
            num_beams = config.num_beams,
            "Sending generation request"
        );
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MtError::GenerationError(format!(
                "Inference endpoint error ({}): {}",
                status, error_text
            )));
        }

        let raw = response.text().await?;
        let json: Value = serde_json::from_str(&raw)
            .map_err(|e| MtError::DecodingError(format!("Failed to parse response: {}", e)))?;

        Self::decode(&json)
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn device(&self) -> &str {
        &self.device
    }
}
