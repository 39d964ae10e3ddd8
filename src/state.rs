use std::sync::Arc;

use crate::config::settings::AppConfig;
use crate::modules::render::compositor::Compositor;
use crate::modules::render::repository::VideoStore;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<dyn VideoStore>,
    pub compositor: Arc<dyn Compositor>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        store: Arc<dyn VideoStore>,
        compositor: Arc<dyn Compositor>,
    ) -> Self {
        Self {
            config,
            store,
            compositor,
        }
    }
}
