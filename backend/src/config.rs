use std::env;
use thiserror::Error;
use url::Url;

const DEFAULT_PORT: u16 = 8081;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_UPSTREAM: &str = "http://127.0.0.1:8000";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid PORT value `{0}`")]
    InvalidPort(String),
    #[error("Invalid UPSTREAM_API_URL `{url}`: {reason}")]
    InvalidUpstream { url: String, reason: String },
}

/// Runtime settings of the dashboard host, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub bind_address: String,
    /// Base of the tracking API, without trailing slash.
    pub upstream_url: String,
    pub frontend_dir: String,
    /// Single origin allowed by CORS; any origin when unset.
    pub allowed_origin: Option<String>,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };
        let host = lookup("BIND_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let upstream_raw = lookup("UPSTREAM_API_URL").unwrap_or_else(|| DEFAULT_UPSTREAM.to_string());
        let upstream_url = parse_upstream(&upstream_raw)?;

        let frontend_dir = lookup("FRONTEND_DIR").unwrap_or_else(|| match lookup("CARGO_MANIFEST_DIR") {
            Some(manifest_dir) => format!("{}/../frontend/dist", manifest_dir),
            None => "/usr/src/app/frontend/dist".to_string(),
        });

        let allowed_origin = lookup("CORS_ALLOWED_ORIGIN").filter(|origin| !origin.trim().is_empty());

        Ok(Self {
            bind_address: format!("{}:{}", host, port),
            upstream_url,
            frontend_dir,
            allowed_origin,
        })
    }
}

fn parse_upstream(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason: String| ConfigError::InvalidUpstream { url: raw.to_string(), reason };

    let parsed = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https".to_string()));
    }
    Ok(trimmed.to_string())
}
