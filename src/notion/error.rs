use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotionError {
    /// The request never produced a response (DNS, TLS, connection reset, ...).
    #[error("Request to Notion failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Notion answered with a non-success status and its error object.
    #[error("Notion API error {status} ({code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    #[error("Failed to decode Notion response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl NotionError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, NotionError::Api { status: 404, .. })
    }
}

// {"object": "error", "status": 404, "code": "object_not_found", "message": "..."}
#[derive(Deserialize, Default)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}
