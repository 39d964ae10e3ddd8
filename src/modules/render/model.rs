use serde::Deserialize;
use serde_json::Value;

/// A row of the `videos` table. Only the columns the render pipeline reads are
/// kept; anything else the store returns, the key included, is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoRecord {
    #[serde(default)]
    pub audio_url: Option<String>,
    /// Raw caption track as stored. Shape is checked by `CaptionTrack`.
    #[serde(default)]
    pub captions_data: Option<Value>,
}
