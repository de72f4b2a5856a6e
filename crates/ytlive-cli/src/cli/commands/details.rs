//! `ytlive details <video-id>` – fetch and print live-streaming details.

use anyhow::{Context, Result};
use ytlive_core::config::{ClientConfig, API_KEY_ENV};
use ytlive_core::transport::CurlTransport;
use ytlive_core::videos::{JsonBodyParser, VideosEndpoint};
use ytlive_core::{fetch_live_streaming_details, CallRequest, CancelToken};

use crate::cli::attempts::run_until_settled;

pub async fn run_details(
    cfg: &ClientConfig,
    video_id: &str,
    api_key: Option<&str>,
    attempts: Option<u32>,
) -> Result<()> {
    let Some(key) = cfg.resolve_api_key(api_key) else {
        anyhow::bail!("no API key: pass --api-key, set {}, or add api_key to the config", API_KEY_ENV);
    };
    let endpoint = VideosEndpoint::new(&cfg.base_url, key)
        .with_context(|| format!("invalid base_url {:?}", cfg.base_url))?;
    let transport = CurlTransport::from_config(cfg);
    let retry = cfg.retry_or_default();
    let max_attempts = attempts.unwrap_or(retry.max_attempts);

    let cancel = CancelToken::new();
    let on_ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupt received, cancelling");
            on_ctrl_c.cancel();
        }
    });

    let outcome = run_until_settled(max_attempts, retry.delay(), &cancel, |n| {
        tracing::debug!("videos attempt {} for {}", n, video_id);
        fetch_live_streaming_details(
            CallRequest::new(video_id, cancel.clone()),
            endpoint.clone(),
            transport,
            JsonBodyParser,
        )
    })
    .await;

    let details = outcome
        .into_result()
        .with_context(|| format!("live streaming details for {}", video_id))?;
    println!("{}", serde_json::to_string_pretty(&details)?);
    Ok(())
}
