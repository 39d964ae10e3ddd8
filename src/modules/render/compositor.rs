use async_trait::async_trait;
use tracing::debug;

use super::captions::CaptionTrack;

pub const INITIATED_MESSAGE: &str =
    "Video rendering initiated. The video will be available at video_url once compositing completes.";

/// Inputs for composing one video: a template background, the voice-over and
/// the timed captions laid over it.
#[derive(Debug)]
pub struct CompositionJob<'a> {
    pub video_id: &'a str,
    pub audio_source: Option<&'a str>,
    pub captions: &'a CaptionTrack,
    pub template_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedArtifact {
    pub video_url: String,
    pub message: String,
}

#[async_trait]
pub trait Compositor: Send + Sync {
    async fn render(&self, job: &CompositionJob<'_>) -> anyhow::Result<RenderedArtifact>;
}

/// Stands in for the compositing worker: it names the object the worker would
/// publish in public storage without creating or checking it.
#[derive(Debug, Clone)]
pub struct PlaceholderCompositor {
    public_base: String,
}

impl PlaceholderCompositor {
    pub fn new(project_base: &str, bucket: &str) -> Self {
        Self {
            public_base: format!(
                "{}/storage/v1/object/public/{}",
                project_base.trim_end_matches('/'),
                bucket.trim_matches('/')
            ),
        }
    }

    pub fn artifact_url(&self, video_id: &str, template_id: i64) -> String {
        format!("{}/video_{}_template_{}.mp4", self.public_base, video_id, template_id)
    }
}

#[async_trait]
impl Compositor for PlaceholderCompositor {
    async fn render(&self, job: &CompositionJob<'_>) -> anyhow::Result<RenderedArtifact> {
        debug!(
            video_id = job.video_id,
            audio_source = ?job.audio_source,
            captions = job.captions.len(),
            spoken_seconds = job.captions.spoken_seconds(),
            template_id = job.template_id,
            "naming placeholder artifact"
        );

        Ok(RenderedArtifact {
            video_url: self.artifact_url(job.video_id, job.template_id),
            message: INITIATED_MESSAGE.to_string(),
        })
    }
}
