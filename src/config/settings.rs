use crate::config::env::{self, EnvKey};
use thiserror::Error;
use url::Url;

const DEFAULT_OUTPUT_BUCKET: &str = "videos";
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("{key} is not a valid URL: {source}")]
    InvalidUrl {
        key: &'static str,
        #[source]
        source: url::ParseError,
    },
}

/// Process-wide settings, built once before the listener is bound and shared
/// through `AppState`.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub supabase_url: Url,
    pub service_role_key: String,
    /// When set, video records are read straight from Postgres instead of
    /// through the REST endpoint.
    pub database_url: Option<String>,
    pub output_bucket: String,
    pub max_body_bytes: usize,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let supabase_url = required(EnvKey::SupabaseUrl)?;
        let service_role_key = required(EnvKey::ServiceRoleKey)?;

        let mut config = Self::with_credentials(&supabase_url, &service_role_key)?;
        config.server_host = env::get_or(EnvKey::ServerHost, "0.0.0.0");
        config.server_port = env::get_parsed(EnvKey::ServerPort, 3000);
        config.database_url = env::get_optional(EnvKey::DatabaseUrl);
        config.output_bucket = env::get_or(EnvKey::OutputBucket, DEFAULT_OUTPUT_BUCKET);
        config.max_body_bytes = env::get_parsed(EnvKey::MaxBodyBytes, DEFAULT_MAX_BODY_BYTES);
        Ok(config)
    }

    /// Builds a configuration from the two store credentials, leaving every
    /// optional setting at its default.
    pub fn with_credentials(supabase_url: &str, service_role_key: &str) -> Result<Self, ConfigError> {
        if service_role_key.trim().is_empty() {
            return Err(ConfigError::Missing(EnvKey::ServiceRoleKey.as_str()));
        }

        let supabase_url = Url::parse(supabase_url.trim()).map_err(|source| ConfigError::InvalidUrl {
            key: EnvKey::SupabaseUrl.as_str(),
            source,
        })?;

        Ok(Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            supabase_url,
            service_role_key: service_role_key.trim().to_string(),
            database_url: None,
            output_bucket: DEFAULT_OUTPUT_BUCKET.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Base of the project URL with any trailing slash removed.
    pub fn project_base(&self) -> &str {
        self.supabase_url.as_str().trim_end_matches('/')
    }
}

fn required(key: EnvKey) -> Result<String, ConfigError> {
    env::get_optional(key).ok_or(ConfigError::Missing(key.as_str()))
}
