use crate::error::NovelError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Light novel generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Ollama API base URL
    pub ollama_base_url: String,

    /// Model used for every generation stage
    pub llm_model: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// Sampling temperature (server default when unset)
    pub temperature: Option<f32>,

    /// Directory the finished novel is written to
    pub output_dir: PathBuf,

    /// File name of the finished novel
    pub output_file: String,

    /// Reader audience mentioned in the prompts
    pub target_audience: String,

    /// Lower bound of the requested chapter length in words
    pub min_words: u32,

    /// Upper bound of the requested chapter length in words
    pub max_words: u32,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ollama_base_url: "http://localhost:11434".to_string(),
            llm_model: "mistral:7b".to_string(),
            request_timeout_secs: 300,
            temperature: None,
            output_dir: PathBuf::from("./output"),
            output_file: "generated_novel.txt".to_string(),
            target_audience: "General".to_string(),
            min_words: 800,
            max_words: 2000,
            log_dir: PathBuf::from("./output/log"),
            log_level: "info".to_string(),
        }
    }
}

/// Connection settings handed to the generation client
#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    /// Ollama API base URL, without trailing slash
    pub base_url: String,

    /// Model identifier (e.g., "mistral:7b", "qwen2.5:32b")
    pub model: String,

    /// Per-request timeout
    pub timeout: Duration,

    /// Sampling temperature
    pub temperature: Option<f32>,
}

impl BackendConfig {
    /// Create backend config with default timeout
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            timeout: Duration::from_secs(300),
            temperature: None,
        }
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    ///
    /// The nearest .env (cwd or any parent) is loaded once here; variables
    /// already set in the process environment win over the file.
    pub fn from_env() -> Result<Self, NovelError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        Ok(Self::from_lookup(|key| std::env::var(key).ok()))
    }

    /// Build configuration from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            ollama_base_url: get("OLLAMA_BASE_URL").unwrap_or(defaults.ollama_base_url),
            llm_model: get("LLM_MODEL").unwrap_or(defaults.llm_model),
            request_timeout_secs: get("REQUEST_TIMEOUT_SECS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            temperature: get("LLM_TEMPERATURE").and_then(|s| s.trim().parse().ok()),
            output_dir: get("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            output_file: get("OUTPUT_FILE").unwrap_or(defaults.output_file),
            target_audience: get("TARGET_AUDIENCE").unwrap_or(defaults.target_audience),
            min_words: get("CHAPTER_MIN_WORDS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.min_words),
            max_words: get("CHAPTER_MAX_WORDS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.max_words),
            log_dir: get("LOG_DIR").map(PathBuf::from).unwrap_or(defaults.log_dir),
            log_level: get("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// Full path of the exported novel
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }

    /// Backend settings for the generation client
    pub fn backend_config(&self) -> BackendConfig {
        BackendConfig {
            temperature: self.temperature,
            ..BackendConfig::new(&self.ollama_base_url, &self.llm_model)
                .with_timeout(Duration::from_secs(self.request_timeout_secs))
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), NovelError> {
        if self.llm_model.trim().is_empty() {
            return Err(NovelError::config("LLM model name cannot be empty"));
        }

        // Validate Ollama URL
        if !self.ollama_base_url.starts_with("http://")
            && !self.ollama_base_url.starts_with("https://")
        {
            return Err(NovelError::config(
                "Ollama base URL must start with http:// or https://",
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(NovelError::config("Request timeout cannot be 0"));
        }

        if self.output_file.trim().is_empty() {
            return Err(NovelError::config("Output file name cannot be empty"));
        }

        if self.min_words == 0 || self.min_words > self.max_words {
            return Err(NovelError::config(format!(
                "Invalid chapter length range {}-{} words",
                self.min_words, self.max_words
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.llm_model, "mistral:7b");
        assert_eq!(
            config.output_path(),
            PathBuf::from("./output").join("generated_novel.txt")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("LLM_MODEL", "qwen2.5:32b"),
            ("REQUEST_TIMEOUT_SECS", "60"),
            ("LLM_TEMPERATURE", "0.7"),
            ("OUTPUT_DIR", "/tmp/novels"),
        ]));
        assert_eq!(config.llm_model, "qwen2.5:32b");
        assert_eq!(config.request_timeout_secs, 60);
        assert_eq!(config.temperature, Some(0.7));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/novels"));
        assert_eq!(config.ollama_base_url, "http://localhost:11434");
    }

    #[test]
    fn test_from_env_reads_process_environment() {
        // Only test in the crate that touches the real environment
        std::env::set_var("CHAPTER_MAX_WORDS", "1500");
        let config = AppConfig::from_env().unwrap();
        std::env::remove_var("CHAPTER_MAX_WORDS");

        assert_eq!(config.max_words, 1500);
    }

    #[test]
    fn test_unparseable_numbers_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("REQUEST_TIMEOUT_SECS", "soon"),
            ("CHAPTER_MIN_WORDS", "-3"),
        ]));
        assert_eq!(config.request_timeout_secs, 300);
        assert_eq!(config.min_words, 800);
    }

    #[test]
    fn test_backend_config() {
        let mut config = AppConfig::default();
        config.ollama_base_url = "http://127.0.0.1:11434/".to_string();
        config.request_timeout_secs = 42;

        let backend = config.backend_config();
        assert_eq!(backend.base_url, "http://127.0.0.1:11434");
        assert_eq!(backend.model, "mistral:7b");
        assert_eq!(backend.timeout, Duration::from_secs(42));
    }

    #[test]
    fn test_validate() {
        let mut invalid_config = AppConfig::default();
        invalid_config.ollama_base_url = "localhost:11434".to_string();
        assert!(invalid_config.validate().is_err());

        let mut invalid_config = AppConfig::default();
        invalid_config.min_words = 3000;
        assert!(invalid_config.validate().is_err());

        let mut invalid_config = AppConfig::default();
        invalid_config.llm_model = "  ".to_string();
        assert!(invalid_config.validate().is_err());
    }
}
