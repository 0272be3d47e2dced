use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Application configuration loaded from environment variables.
/// Scoring constants live in `ScoringConfig`, not here.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Absent disables `/api/v1/analyze`; `/api/v1/score` still works.
    pub anthropic_api_key: Option<String>,
    /// 0 disables extraction caching.
    pub extraction_cache_capacity: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            anthropic_api_key: lookup("ANTHROPIC_API_KEY").filter(|key| !key.trim().is_empty()),
            extraction_cache_capacity: parse_or(
                &lookup,
                "EXTRACTION_CACHE_CAPACITY",
                DEFAULT_CACHE_CAPACITY,
            )?,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
