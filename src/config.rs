use std::time::Duration;

use axum::http::{HeaderName, HeaderValue};
use clap::{Parser, ValueEnum};
use secrecy::{ExposeSecret, Secret};

// CLI argument structure, every flag can also come from the environment (or .env)
#[derive(Parser, Debug, Clone)]
#[command(name = "prompt-relay")]
#[command(about = "Relays prompts from the chat frontend to the AI text service")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    // Upstream generate endpoint
    #[arg(long, env = "UPSTREAM_URL", default_value = "http://llm.codex.so/generate")]
    pub upstream_url: String,

    // Header the API key is sent in
    #[arg(long, env = "API_KEY_HEADER", default_value = "x-api-key")]
    pub api_key_header: String,

    // Service credential forwarded to upstream
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    // Allowed CORS origins (comma-separated)
    // Example: "http://localhost:5173,http://127.0.0.1:5173"
    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        default_value = "http://localhost:5173,http://127.0.0.1:5173"
    )]
    pub allowed_origins: String,

    // Preflight cache lifetime in seconds
    #[arg(long, env = "CORS_MAX_AGE", default_value_t = 300)]
    pub cors_max_age: u64,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API_KEY is not set")]
    MissingApiKey,

    #[error("invalid API key header name '{0}'")]
    InvalidHeaderName(String),

    #[error("API key is not a valid header value")]
    InvalidApiKey,

    #[error("invalid CORS origin '{0}'")]
    InvalidOrigin(String),

    #[error("at least one allowed origin is required")]
    NoOrigins,
}

/// Where and how prompts are forwarded. Built once at startup and shared
/// read-only by every request.
#[derive(Clone, Debug)]
pub struct UpstreamSettings {
    pub url: String,
    pub api_key_header: HeaderName,
    pub api_key: Secret<String>,
}

#[derive(Clone, Debug)]
pub struct CorsSettings {
    pub allowed_origins: Vec<HeaderValue>,
    pub max_age: Duration,
}

/// Validated runtime configuration.
#[derive(Clone, Debug)]
pub struct RelayConfig {
    pub port: u16,
    pub upstream: UpstreamSettings,
    pub cors: CorsSettings,
    pub log_format: LogFormat,
}

impl RelayConfig {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let api_key = args
            .api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        // reject keys reqwest would refuse to put on the wire
        HeaderValue::from_str(&api_key).map_err(|_| ConfigError::InvalidApiKey)?;

        let api_key_header = HeaderName::from_bytes(args.api_key_header.trim().as_bytes())
            .map_err(|_| ConfigError::InvalidHeaderName(args.api_key_header.clone()))?;

        Ok(Self {
            port: args.port,
            upstream: UpstreamSettings {
                url: args.upstream_url,
                api_key_header,
                api_key: Secret::new(api_key),
            },
            cors: CorsSettings {
                allowed_origins: parse_origins(&args.allowed_origins)?,
                max_age: Duration::from_secs(args.cors_max_age),
            },
            log_format: args.log_format,
        })
    }
}

impl UpstreamSettings {
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

fn parse_origins(origins: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    let parsed = origins
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if parsed.is_empty() {
        return Err(ConfigError::NoOrigins);
    }
    Ok(parsed)
}
