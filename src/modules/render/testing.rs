use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::compositor::{CompositionJob, Compositor, PlaceholderCompositor, RenderedArtifact};
use super::error::StoreError;
use super::model::VideoRecord;
use super::repository::VideoStore;
use crate::config::settings::AppConfig;
use crate::state::AppState;

pub const PROJECT_URL: &str = "https://project.supabase.co";

#[derive(Default)]
pub struct InMemoryVideoStore {
    records: HashMap<String, VideoRecord>,
}

impl InMemoryVideoStore {
    pub fn with(mut self, id: &str, audio_url: Option<&str>, captions_data: Option<Value>) -> Self {
        self.records.insert(
            id.to_string(),
            VideoRecord {
                audio_url: audio_url.map(str::to_string),
                captions_data,
            },
        );
        self
    }
}

#[async_trait]
impl VideoStore for InMemoryVideoStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<VideoRecord>, StoreError> {
        Ok(self.records.get(id).cloned())
    }
}

/// Behaves like a store that cannot be reached.
pub struct UnreachableVideoStore;

#[async_trait]
impl VideoStore for UnreachableVideoStore {
    async fn find_by_id(&self, _id: &str) -> Result<Option<VideoRecord>, StoreError> {
        Err(StoreError::Status {
            status: 503,
            body: "upstream connect error".to_string(),
        })
    }
}

pub struct FailingCompositor;

#[async_trait]
impl Compositor for FailingCompositor {
    async fn render(&self, _job: &CompositionJob<'_>) -> anyhow::Result<RenderedArtifact> {
        anyhow::bail!("render worker offline")
    }
}

pub fn state_with(store: impl VideoStore + 'static) -> AppState {
    let config = AppConfig::with_credentials(PROJECT_URL, "service-key").unwrap();
    let compositor = PlaceholderCompositor::new(config.project_base(), &config.output_bucket);
    AppState::new(config, Arc::new(store), Arc::new(compositor))
}
