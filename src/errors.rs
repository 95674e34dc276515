// src/errors.rs

use thiserror::Error;

/// Errors produced by the chat client.
///
/// The two request kinds never escape the client: they are turned into the
/// fallback suggestion list or the apology message and logged.
#[derive(Debug, Error)]
pub enum CvChatError {
    #[error("failed to load suggestions: {0}")]
    SuggestionLoad(String),

    #[error("chat request failed: {0}")]
    ChatRequest(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("logger setup failed: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),
}

impl CvChatError {
    pub fn suggestion_load(msg: impl Into<String>) -> Self {
        Self::SuggestionLoad(msg.into())
    }

    pub fn chat_request(msg: impl Into<String>) -> Self {
        Self::ChatRequest(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

pub type CvChatResult<T> = Result<T, CvChatError>;
