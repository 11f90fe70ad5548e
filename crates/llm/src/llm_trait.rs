use crate::types::GenerateRequest;
use async_trait::async_trait;
use lightnovel_common::Result;

/// Common trait for LLM clients
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate text from a prompt, returning the full response
    async fn generate(&self, request: GenerateRequest) -> Result<String>;

    /// Test connection/availability
    async fn test_connection(&self) -> Result<bool>;
}
