use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::videos::DEFAULT_BASE_URL;

/// Upper bound for `retry.delay_secs`.
pub const MAX_RETRY_DELAY_SECS: f64 = 3600.0;

/// Environment variable consulted when no API key is configured or passed.
pub const API_KEY_ENV: &str = "YTLIVE_API_KEY";

/// Caller-side retry parameters (optional section in config.toml).
///
/// The classifier never retries; these only drive the CLI's re-invocation loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Fixed delay in seconds between attempts (e.g. 0.5 = 500ms).
    pub delay_secs: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay_secs: 1.0,
        }
    }
}

impl RetryConfig {
    /// Rejects delays that are negative, NaN, infinite or above one hour.
    pub fn validate(&self) -> Result<()> {
        let d = self.delay_secs;
        if !(0.0..=MAX_RETRY_DELAY_SECS).contains(&d) {
            anyhow::bail!(
                "retry.delay_secs must be between 0 and {}, got {}",
                MAX_RETRY_DELAY_SECS,
                d
            );
        }
        Ok(())
    }

    /// Delay between attempts, clamped to `[0, MAX_RETRY_DELAY_SECS]`.
    pub fn delay(&self) -> Duration {
        let secs = self.delay_secs.clamp(0.0, MAX_RETRY_DELAY_SECS);
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO)
    }
}

/// Client configuration loaded from `~/.config/ytlive/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// YouTube Data API key. Overridden by `--api-key` or `YTLIVE_API_KEY`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// API root; `/videos` is appended.
    pub base_url: String,
    pub connect_timeout_secs: u64,
    /// Overall per-request deadline.
    pub request_timeout_secs: u64,
    /// Optional retry section; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: 15,
            request_timeout_secs: 30,
            retry: None,
        }
    }
}

impl ClientConfig {
    /// First of: explicit value, `YTLIVE_API_KEY`, config file.
    /// Blank values are skipped at each step.
    pub fn resolve_api_key(&self, explicit: Option<&str>) -> Option<String> {
        first_api_key(
            explicit.map(str::to_string),
            std::env::var(API_KEY_ENV).ok(),
            self.api_key.clone(),
        )
    }

    pub fn retry_or_default(&self) -> RetryConfig {
        self.retry.clone().unwrap_or_default()
    }
}

fn first_api_key(
    explicit: Option<String>,
    env: Option<String>,
    file: Option<String>,
) -> Option<String> {
    let usable = |k: &String| !k.trim().is_empty();
    explicit
        .filter(usable)
        .or_else(|| env.filter(usable))
        .or_else(|| file.filter(usable))
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ytlive")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ClientConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<ClientConfig> {
    if !path.exists() {
        let default_cfg = ClientConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ClientConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    if let Some(retry) = &cfg.retry {
        retry
            .validate()
            .with_context(|| format!("invalid [retry] in {}", path.display()))?;
    }
    Ok(cfg)
}
