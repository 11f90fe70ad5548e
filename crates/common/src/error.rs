/// Light novel generator error types
#[derive(Debug, thiserror::Error)]
pub enum NovelError {
    /// Malformed or missing user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Inference daemon could not be reached
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    /// Inference daemon did not answer in time
    #[error("Backend timeout: {0}")]
    BackendTimeout(String),

    /// Inference daemon returned an error or unusable response
    #[error("Generation error: {0}")]
    Generation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system error
    #[error("File system error: {0}")]
    FileSystem(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NovelError {
    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create backend unavailable error
    pub fn backend_unavailable<S: Into<String>>(msg: S) -> Self {
        Self::BackendUnavailable(msg.into())
    }

    /// Create backend timeout error
    pub fn backend_timeout<S: Into<String>>(msg: S) -> Self {
        Self::BackendTimeout(msg.into())
    }

    /// Create generation error
    pub fn generation<S: Into<String>>(msg: S) -> Self {
        Self::Generation(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create file system error
    pub fn file_system<S: Into<String>>(msg: S) -> Self {
        Self::FileSystem(msg.into())
    }
}

// Process exit code conversion
impl NovelError {
    /// Get process exit code
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput(_) => 2,
            Self::BackendUnavailable(_) => 3,
            Self::BackendTimeout(_) => 3,
            Self::Generation(_) => 4,
            Self::FileSystem(_) => 5,
            Self::Io(_) => 5,
            Self::Config(_) => 1,
            Self::Other(_) => 1,
        }
    }
}
