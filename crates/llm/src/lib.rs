//! Light novel LLM integration
//!
//! Ollama API client and prompt templates

mod client;
mod llm_trait;
mod prompts;
mod types;

pub use client::OllamaClient;
pub use llm_trait::LlmClient;
pub use prompts::{
    chapter_prompt, character_prompt, join_themes, outline_prompt, ChapterContext,
    NOVELIST_PREAMBLE,
};
pub use types::{GenerateOptions, GenerateRequest, GenerateResponse};
