#[derive(Debug, thiserror::Error)]
pub enum CookieError {
    #[error("Cookie storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
