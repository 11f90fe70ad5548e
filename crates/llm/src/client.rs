use async_trait::async_trait;
use lightnovel_common::{BackendConfig, NovelError, Result};
use reqwest::Client;
use tracing::{debug, info, trace};

use crate::llm_trait::LlmClient;
use crate::types::{GenerateOptions, GenerateRequest, GenerateResponse};

/// Ollama API client
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: String,
    default_options: GenerateOptions,
    client: Client,
}

impl OllamaClient {
    /// Create new Ollama client
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        let default_options = GenerateOptions {
            temperature: config.temperature,
            ..Default::default()
        };

        info!(
            "Ollama client initialized: {} (timeout {:?})",
            config.base_url, config.timeout
        );
        Ok(Self {
            base_url: config.base_url.clone(),
            default_options,
            client,
        })
    }

    /// Base URL of the daemon
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generate text with Ollama
    ///
    /// Every call is a fresh round trip. Failures are not retried.
    pub async fn generate(&self, request: GenerateRequest) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);
        let request = self.apply_defaults(request);

        debug!(
            "Sending generate request to Ollama - Model: {}, Prompt length: {}",
            request.model,
            request.prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| classify_transport_error(&self.base_url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NovelError::generation(format!(
                "Ollama API error {}: {}",
                status,
                body.trim()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| classify_transport_error(&self.base_url, e))?;
        let result: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| NovelError::generation(format!("Failed to parse response: {}", e)))?;

        if let Some(error) = result.error {
            return Err(NovelError::generation(format!("Ollama error: {}", error)));
        }

        let text = result.response.trim();
        if text.is_empty() {
            return Err(NovelError::generation(format!(
                "Empty response from Ollama (model {})",
                request.model
            )));
        }

        debug!("Received response from Ollama - Length: {}", text.len());
        trace!("Ollama response:\n{}", text);

        Ok(text.to_string())
    }

    /// Test connection to Ollama
    pub async fn test_connection(&self) -> Result<bool> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| classify_transport_error(&self.base_url, e))?;
        Ok(response.status().is_success())
    }

    fn apply_defaults(&self, mut request: GenerateRequest) -> GenerateRequest {
        if request.stream.is_none() {
            request.stream = Some(false);
        }
        if request.options.is_none() && !self.default_options.is_empty() {
            request = request.with_options(self.default_options.clone());
        }
        request
    }
}

/// Map a reqwest failure onto the backend error kinds
fn classify_transport_error(base_url: &str, error: reqwest::Error) -> NovelError {
    if error.is_timeout() {
        NovelError::backend_timeout(format!("Ollama at {} did not respond in time: {}", base_url, error))
    } else if error.is_connect() {
        NovelError::backend_unavailable(format!(
            "Cannot reach Ollama at {} (is `ollama serve` running?): {}",
            base_url, error
        ))
    } else if error.is_decode() || error.is_body() {
        NovelError::generation(format!("Failed to read response body: {}", error))
    } else {
        NovelError::backend_unavailable(format!("Request to {} failed: {}", base_url, error))
    }
}

#[async_trait]
impl LlmClient for OllamaClient {
    async fn generate(&self, request: GenerateRequest) -> Result<String> {
        OllamaClient::generate(self, request).await
    }

    async fn test_connection(&self) -> Result<bool> {
        OllamaClient::test_connection(self).await
    }
}
