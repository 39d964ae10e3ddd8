use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::RenderError;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RenderRequest {
    pub video_id: String,
    pub template_id: i64,
}

impl RenderRequest {
    pub fn from_body(body: &[u8]) -> Result<Self, RenderError> {
        serde_json::from_slice(body).map_err(|e| RenderError::InvalidRequest(e.to_string()))
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RenderDetails {
    pub audio_source: Option<String>,
    pub captions_count: usize,
    pub template: i64,
    pub estimated_duration: String,
}

/// Descriptor of an initiated render job. `video_url` is where the artifact
/// will be published; nothing guarantees it exists yet.
#[derive(Debug, Serialize, ToSchema)]
pub struct RenderJobDescriptor {
    pub success: bool,
    pub video_url: String,
    pub message: String,
    pub render_details: RenderDetails,
}
