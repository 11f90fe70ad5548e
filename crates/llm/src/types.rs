use serde::{Deserialize, Serialize};

/// Ollama generate request
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// Model name (e.g., "mistral:7b", "qwen2.5:32b")
    pub model: String,

    /// Prompt text
    pub prompt: String,

    /// Disable streaming
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,

    /// Generation options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<GenerateOptions>,
}

impl GenerateRequest {
    /// Create non-streaming request with server-side default options
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: Some(false),
            options: None,
        }
    }

    /// Attach generation options
    pub fn with_options(mut self, options: GenerateOptions) -> Self {
        self.options = Some(options);
        self
    }
}

/// Generation options
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct GenerateOptions {
    /// Temperature (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Top-p sampling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<i32>,
}

impl GenerateOptions {
    /// Whether every option is left to the server default
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.top_p.is_none() && self.num_predict.is_none()
    }
}

/// Ollama generate response
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// Model name
    #[serde(default)]
    pub model: String,

    /// Generated text
    #[serde(default)]
    pub response: String,

    /// Whether generation is complete
    #[serde(default)]
    pub done: bool,

    /// Error reported by the daemon in place of a completion
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization_skips_unset_options() {
        let request = GenerateRequest::new("mistral:7b", "Hello");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"model": "mistral:7b", "prompt": "Hello", "stream": false})
        );
    }

    #[test]
    fn test_request_serialization_with_options() {
        let request = GenerateRequest::new("mistral:7b", "Hello").with_options(GenerateOptions {
            temperature: Some(0.5),
            ..Default::default()
        });
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["options"], serde_json::json!({"temperature": 0.5}));
    }

    #[test]
    fn test_response_tolerates_extra_fields() {
        let body = r#"{"model":"mistral:7b","created_at":"2024-01-01T00:00:00Z","response":"Once upon a time","done":true,"context":[1,2,3]}"#;
        let response: GenerateResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.response, "Once upon a time");
        assert!(response.done);
        assert!(response.error.is_none());
    }

    #[test]
    fn test_response_carries_daemon_error() {
        let body = r#"{"error":"model 'mistral:7b' not found, try pulling it first"}"#;
        let response: GenerateResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.response, "");
        assert_eq!(
            response.error.as_deref(),
            Some("model 'mistral:7b' not found, try pulling it first")
        );
    }
}
