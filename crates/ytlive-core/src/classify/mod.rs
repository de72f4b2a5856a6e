//! Call classification: one attempt in, one [`Outcome`] out.
//!
//! Stages run in a fixed order (precheck, transport, status, body) and the
//! first non-success stage decides the outcome. Nothing here retries or
//! sleeps; re-invoking [`classify`] on a retryable outcome is the caller's job.

mod body;
mod rules;
mod status;

pub use body::classify_body;
pub use rules::{classify_transport_error, TransportRule, Verdict, TRANSPORT_RULES};
pub use status::{classify_http_status, StatusClass};

use crate::control::CancelToken;
use crate::outcome::Outcome;
use crate::transport::Transport;
use crate::videos::{BodyParser, LiveStreamingDetails, VideosEndpoint};

/// Identifying parameters of one logical call.
#[derive(Debug, Clone)]
pub struct CallRequest {
    pub video_id: String,
    pub cancel: CancelToken,
}

impl CallRequest {
    pub fn new(video_id: impl Into<String>, cancel: CancelToken) -> Self {
        Self {
            video_id: video_id.into(),
            cancel,
        }
    }
}

/// Fetch the live-streaming details of `request.video_id` and classify the result.
pub fn classify<T, P>(
    request: &CallRequest,
    endpoint: &VideosEndpoint,
    transport: &T,
    parser: &P,
) -> Outcome<LiveStreamingDetails>
where
    T: Transport + ?Sized,
    P: BodyParser + ?Sized,
{
    if request.video_id.is_empty() {
        return Outcome::fail_with_trace("failed because video id is missing");
    }
    if request.cancel.is_cancelled() {
        return Outcome::retry_with_trace("retryable because cancellation was already requested");
    }

    let url = match endpoint.url_for(&request.video_id) {
        Ok(url) => url,
        Err(e) => return Outcome::fail_with_trace(format!("failed to build request URL: {}", e)),
    };

    tracing::debug!(video_id = %request.video_id, "sending videos request");
    let response = match transport.send(&url, &request.cancel) {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!(video_id = %request.video_id, error = %e, "transport error");
            return classify_transport_error(&e);
        }
    };

    let code = response.status;
    tracing::debug!(video_id = %request.video_id, status = code, "videos response");
    match classify_http_status(code) {
        StatusClass::Proceed => classify_body(&response.body, parser),
        StatusClass::Retryable => Outcome::retry_with_trace(format!(
            "retryable because the API returned status code {}",
            code
        )),
        StatusClass::Failure => Outcome::fail_with_trace(format!(
            "failed because the API returned status code {}",
            code
        )),
    }
}

/// Async entry point: runs [`classify`] on tokio's blocking pool.
pub async fn fetch_live_streaming_details<T, P>(
    request: CallRequest,
    endpoint: VideosEndpoint,
    transport: T,
    parser: P,
) -> Outcome<LiveStreamingDetails>
where
    T: Transport + Send + 'static,
    P: BodyParser + Send + 'static,
{
    let joined = tokio::task::spawn_blocking(move || {
        classify(&request, &endpoint, &transport, &parser)
    })
    .await;
    match joined {
        Ok(outcome) => outcome,
        Err(e) => Outcome::fail_with_trace(format!("failed because the call task died: {}", e)),
    }
}
