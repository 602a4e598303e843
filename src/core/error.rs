pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Could not parse board at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
