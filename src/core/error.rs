// src/core/error.rs
//! Failure taxonomy of the jobs API client

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Host unreachable, timeout, or a body that is not the expected JSON
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx answer from the API
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// Rejected locally before any request was sent
    #[error("invalid job data: {0}")]
    Invalid(String),
}

impl StoreError {
    /// Build an API error from the server message, or a status-based one.
    pub fn api(status: StatusCode, message: Option<String>) -> Self {
        let message =
            message.unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
        StoreError::Api { status, message }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            StoreError::Api { status, .. } => Some(*status),
            StoreError::Transport(e) => e.status(),
            StoreError::Invalid(_) => None,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
