//! Error handling for the roster module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    /// The body was not a JSON array of student records.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Network error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The roster API answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

impl RosterError {
    pub async fn from_response(response: reqwest::Response) -> RosterError {
        let status = response.status();
        let reason = status.canonical_reason().unwrap_or("Unknown status");
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());
        let message = if body.trim().is_empty() {
            reason.to_string()
        } else {
            format!("{} ({})", reason, body.trim())
        };

        RosterError::Http {
            status: status.as_u16(),
            message,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            RosterError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
