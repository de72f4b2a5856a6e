//! Blocking GET over libcurl.

use std::time::Duration;
use url::Url;

use super::{RawResponse, Transport, TransportError};
use crate::config::ClientConfig;
use crate::control::CancelToken;

/// libcurl-backed transport. One Easy handle per call; nothing is pooled.
/// Redirects are returned as-is rather than followed.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
#[derive(Debug, Clone, Copy)]
pub struct CurlTransport {
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(30),
        }
    }
}

impl CurlTransport {
    pub fn from_config(cfg: &ClientConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.request_timeout_secs),
        }
    }

    fn perform(&self, url: &Url, cancel: &CancelToken) -> Result<RawResponse, curl::Error> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str())?;
        easy.get(true)?;
        // 3xx must reach the status policy with its code, so never follow.
        easy.follow_location(false)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        easy.useragent(concat!("ytlive/", env!("CARGO_PKG_VERSION")))?;
        // Needed for the progress callback to fire.
        easy.progress(true)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            // Returning false aborts with CURLE_ABORTED_BY_CALLBACK.
            let cancel = cancel.clone();
            transfer.progress_function(move |_, _, _, _| !cancel.is_cancelled())?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        Ok(RawResponse { status, body })
    }
}

impl Transport for CurlTransport {
    fn send(&self, url: &Url, cancel: &CancelToken) -> Result<RawResponse, TransportError> {
        self.perform(url, cancel).map_err(|e| map_curl_error(&e))
    }
}

/// Map a curl error onto the transport error kinds used for classification.
pub fn map_curl_error(e: &curl::Error) -> TransportError {
    let detail = e.to_string();
    if e.is_aborted_by_callback() {
        return TransportError::Cancelled;
    }
    if e.is_operation_timedout() {
        return TransportError::Timeout(detail);
    }
    if e.is_couldnt_resolve_host() || e.is_couldnt_resolve_proxy() {
        return TransportError::Resolve(detail);
    }
    if e.is_couldnt_connect()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return TransportError::Connect(detail);
    }
    TransportError::Other(detail)
}
