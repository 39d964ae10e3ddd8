use std::env;
use std::str::FromStr;
use tracing::warn;

#[derive(Clone, Copy, Debug)]
pub enum EnvKey {
    ServerHost,
    ServerPort,
    SupabaseUrl,
    ServiceRoleKey,
    DatabaseUrl,
    OutputBucket,
    MaxBodyBytes,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerHost => "APP_HOST",
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::SupabaseUrl => "SUPABASE_URL",
            EnvKey::ServiceRoleKey => "SUPABASE_SERVICE_ROLE_KEY",
            EnvKey::DatabaseUrl => "DATABASE_URL",
            EnvKey::OutputBucket => "RENDER_OUTPUT_BUCKET",
            EnvKey::MaxBodyBytes => "MAX_BODY_BYTES",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

/// Unset and blank values are both treated as absent.
pub fn get_optional(key: EnvKey) -> Option<String> {
    env::var(key.as_str())
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    get_optional(key).unwrap_or_else(|| default.to_string())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    parse_or(key, get(key).ok().as_deref(), default)
}

/// Unparseable values fall back to `default` with a warning so a bad
/// deployment setting shows up in the logs.
fn parse_or<T: FromStr>(key: EnvKey, raw: Option<&str>, default: T) -> T {
    let Some(raw) = raw else {
        return default;
    };

    match raw.trim().parse::<T>() {
        Ok(val) => val,
        Err(_) => {
            warn!("{} has unparseable value {:?}; using the default", key.as_str(), raw);
            default
        }
    }
}
