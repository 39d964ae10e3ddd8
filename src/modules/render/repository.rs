use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use sqlx::FromRow;
use sqlx::types::Json;

use super::error::StoreError;
use super::model::VideoRecord;
use crate::infrastructure::db::pool::DbPool;
use crate::infrastructure::supabase::client::SupabaseClient;

const VIDEOS_TABLE: &str = "videos";

/// Read access to stored video records. Lookups are by unique id, so at most
/// one record comes back.
#[async_trait]
pub trait VideoStore: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<VideoRecord>, StoreError>;
}

/// Reads records through the project's REST endpoint.
pub struct SupabaseVideoStore {
    client: SupabaseClient,
}

impl SupabaseVideoStore {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl VideoStore for SupabaseVideoStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<VideoRecord>, StoreError> {
        let response = self
            .client
            .select_single(VIDEOS_TABLE, "id", id)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_ACCEPTABLE {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let record = serde_json::from_slice(&bytes)?;
        Ok(Some(record))
    }
}

#[derive(Debug, FromRow)]
struct VideoRow {
    audio_url: Option<String>,
    captions_data: Option<Json<Value>>,
}

impl From<VideoRow> for VideoRecord {
    fn from(row: VideoRow) -> Self {
        Self {
            audio_url: row.audio_url,
            captions_data: row.captions_data.map(|Json(value)| value),
        }
    }
}

/// Reads records straight from Postgres.
pub struct PgVideoStore {
    pool: DbPool,
}

impl PgVideoStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoStore for PgVideoStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<VideoRecord>, StoreError> {
        let row = sqlx::query_as::<_, VideoRow>(
            r#"
            SELECT audio_url, captions_data
            FROM videos
            WHERE id::text = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(VideoRecord::from))
    }
}
