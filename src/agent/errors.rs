use thiserror::Error;

/// Errors that can occur in the agent runtime
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("coordinator request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("coordinator returned status {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("task execution failed: {0}")]
    ExecutionFailed(String),
}

pub type AgentResult<T> = Result<T, AgentError>;
