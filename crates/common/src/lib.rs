pub mod config;
pub mod error;
pub mod logger;

// Re-export commonly used types
pub use config::{AppConfig, BackendConfig};
pub use error::NovelError;
pub type Result<T> = std::result::Result<T, NovelError>;
