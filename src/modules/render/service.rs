use tracing::{debug, info};

use super::captions::CaptionTrack;
use super::compositor::CompositionJob;
use super::dto::{RenderDetails, RenderJobDescriptor, RenderRequest};
use super::error::RenderError;
use super::model::VideoRecord;
use super::repository::VideoStore;
use crate::state::AppState;

pub struct RenderService;

impl RenderService {
    pub async fn initiate(state: &AppState, req: RenderRequest) -> Result<RenderJobDescriptor, RenderError> {
        info!(video_id = %req.video_id, template_id = req.template_id, "render requested");

        let video = Self::fetch_video(state.store.as_ref(), &req.video_id).await?;
        let captions = CaptionTrack::from_value(video.captions_data.as_ref())?;
        if captions.is_empty() {
            debug!(video_id = %req.video_id, "no captions stored, duration falls back");
        }

        let job = CompositionJob {
            video_id: &req.video_id,
            audio_source: video.audio_url.as_deref(),
            captions: &captions,
            template_id: req.template_id,
        };
        let artifact = state.compositor.render(&job).await?;

        info!(
            video_id = %req.video_id,
            captions = captions.len(),
            video_url = %artifact.video_url,
            "render initiated"
        );

        Ok(RenderJobDescriptor {
            success: true,
            video_url: artifact.video_url,
            message: artifact.message,
            render_details: RenderDetails {
                audio_source: video.audio_url,
                captions_count: captions.len(),
                template: req.template_id,
                estimated_duration: captions.estimated_duration(),
            },
        })
    }

    /// Absence and lookup failure surface alike to the caller.
    async fn fetch_video(store: &dyn VideoStore, video_id: &str) -> Result<VideoRecord, RenderError> {
        match store.find_by_id(video_id).await {
            Ok(Some(video)) => Ok(video),
            Ok(None) => Err(RenderError::VideoNotFound),
            Err(e) => Err(RenderError::StoreUnavailable(e)),
        }
    }
}
