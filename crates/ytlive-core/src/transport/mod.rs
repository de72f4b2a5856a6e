//! HTTP transport seam.
//!
//! The classifier only needs "send this GET, give me status and body". The
//! default implementation uses libcurl via the `curl` crate; tests plug in
//! in-memory fakes.

mod easy;
mod error;

pub use easy::{map_curl_error, CurlTransport};
pub use error::TransportError;

use crate::control::CancelToken;
use url::Url;

/// A received HTTP response: numeric status and the full body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u32, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends one GET request. Implementations must honor `cancel` while the
/// request is in flight and report it as [`TransportError::Cancelled`].
pub trait Transport {
    fn send(&self, url: &Url, cancel: &CancelToken) -> Result<RawResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, url: &Url, cancel: &CancelToken) -> Result<RawResponse, TransportError> {
        (**self).send(url, cancel)
    }
}
