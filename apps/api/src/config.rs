use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_API_URL;

const DEFAULT_MODEL_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
/// Startup fails if any of the three credentials is missing.
#[derive(Clone)]
pub struct Config {
    pub huggingface_api_key: String,
    pub database_url: String,
    pub database_password: String,
    pub model_api_url: String,
    pub model_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` is the production entry point.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let model_timeout_secs = match optional("MODEL_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("MODEL_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_MODEL_TIMEOUT_SECS,
        };

        Ok(Config {
            huggingface_api_key: require(&lookup, "HUGGINGFACE_API_KEY")?,
            database_url: require(&lookup, "DATABASE_URL")?,
            database_password: require(&lookup, "DATABASE_PASSWORD")?,
            model_api_url: optional("MODEL_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            model_timeout: Duration::from_secs(model_timeout_secs),
            port: optional("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Replaces any `user:password@` part of a connection URL with `***@`.
fn redact_userinfo(raw: &str) -> String {
    match reqwest::Url::parse(raw) {
        Ok(mut url) if !url.username().is_empty() || url.password().is_some() => {
            if url.set_username("***").is_err() || url.set_password(None).is_err() {
                return "***".to_string();
            }
            url.to_string()
        }
        Ok(_) => raw.to_string(),
        Err(_) => "***".to_string(),
    }
}

// Credentials stay out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("huggingface_api_key", &"***")
            .field("database_url", &redact_userinfo(&self.database_url))
            .field("database_password", &"***")
            .field("model_api_url", &self.model_api_url)
            .field("model_timeout", &self.model_timeout)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}
