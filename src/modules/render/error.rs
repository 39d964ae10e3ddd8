use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use super::captions::CaptionError;
use crate::common::response::ApiError;

/// Failures while talking to the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database query failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("store responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("store returned an undecodable record: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Every way a render initiation can fail. All variants reach the caller as
/// the same 500 failure envelope; only the message differs.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid request body: {0}")]
    InvalidRequest(String),

    #[error("Video record not found")]
    VideoNotFound,

    /// Reported exactly like a missing record; the cause is only logged.
    #[error("Video record not found")]
    StoreUnavailable(#[source] StoreError),

    #[error("Malformed caption track: {0}")]
    MalformedCaptions(#[from] CaptionError),

    #[error("Render could not be started: {0}")]
    Compositor(#[from] anyhow::Error),
}

impl IntoResponse for RenderError {
    fn into_response(self) -> Response {
        match &self {
            RenderError::StoreUnavailable(cause) => {
                error!(error = %cause, "video store lookup failed");
            }
            RenderError::Compositor(cause) => {
                error!(error = %cause, "compositor rejected render job");
            }
            other => warn!(error = %other, "render initiation rejected"),
        }

        ApiError(self.to_string(), StatusCode::INTERNAL_SERVER_ERROR).into_response()
    }
}
