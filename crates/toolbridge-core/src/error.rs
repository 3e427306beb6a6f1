//! Error types for the bridge

use thiserror::Error;

/// Bridge error types
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("missing required environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("tool server error: {0}")]
    ToolServer(String),

    #[error("session not found: {0}")]
    SessionNotFound(String),

    #[error("agent error: {0}")]
    Agent(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;
