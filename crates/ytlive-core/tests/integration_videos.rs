//! Integration test: real curl transport against a local stub server.
//!
//! Each test starts a stub that returns one canned response and checks the
//! classifier's verdict end to end.

mod common;

use common::stub_server::{self, StubResponse};
use std::thread;
use std::time::Duration;
use ytlive_core::transport::CurlTransport;
use ytlive_core::videos::{JsonBodyParser, VideosEndpoint};
use ytlive_core::{classify, fetch_live_streaming_details, CallRequest, CancelToken, Outcome};

const SCHEDULED: &str =
    r#"{"items":[{"liveStreamingDetails":{"scheduledStartTime":"2024-01-01T00:00:00Z"}}]}"#;

fn transport() -> CurlTransport {
    CurlTransport {
        connect_timeout: Duration::from_secs(2),
        timeout: Duration::from_secs(5),
    }
}

fn call(base_url: &str, id: &str) -> Outcome<ytlive_core::videos::LiveStreamingDetails> {
    let endpoint = VideosEndpoint::new(base_url, "test-key").unwrap();
    let request = CallRequest::new(id, CancelToken::new());
    classify(&request, &endpoint, &transport(), &JsonBodyParser)
}

#[test]
fn ok_response_yields_first_item_details() {
    let server = stub_server::start(StubResponse::new(200, "OK", SCHEDULED));
    let details = call(&server.base_url, "abc").success().expect("success");
    assert_eq!(
        details.scheduled_start_time.as_deref(),
        Some("2024-01-01T00:00:00Z")
    );

    let requests = server.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].starts_with("GET /videos?part=liveStreamingDetails&id=abc&key=test-key"));
}

#[test]
fn forbidden_fails_with_code() {
    let server = stub_server::start(StubResponse::new(403, "Forbidden", r#"{"error":{}}"#));
    let o = call(&server.base_url, "abc");
    assert!(o.is_failure(), "{}", o);
    assert!(o.trace().unwrap().contains("403"));
}

#[test]
fn unavailable_is_retryable_with_code() {
    let server = stub_server::start(StubResponse::new(503, "Service Unavailable", ""));
    let o = call(&server.base_url, "abc");
    assert!(o.is_retryable(), "{}", o);
    assert!(o.trace().unwrap().contains("503"));
}

#[test]
fn redirect_fails_with_code_and_is_not_followed() {
    let mut redirect = StubResponse::new(302, "Found", "");
    redirect.headers.push("Location: /videos?x=1".to_string());
    let server = stub_server::start(redirect);

    let o = call(&server.base_url, "abc");
    assert!(o.is_failure(), "{}", o);
    assert!(o.trace().unwrap().contains("302"), "{}", o);
    assert_eq!(server.requests.lock().unwrap().len(), 1);
}

#[test]
fn empty_body_fails() {
    let server = stub_server::start(StubResponse::new(200, "OK", ""));
    assert!(call(&server.base_url, "abc").is_failure());
}

#[test]
fn empty_id_never_reaches_server() {
    let server = stub_server::start(StubResponse::new(200, "OK", SCHEDULED));
    assert!(call(&server.base_url, "").is_failure());
    assert!(server.requests.lock().unwrap().is_empty());
}

#[test]
fn refused_connection_is_retryable() {
    let o = call(&stub_server::closed_port_url(), "abc");
    assert!(o.is_retryable(), "{}", o);
}

#[test]
fn cancel_during_transfer_is_retryable() {
    let mut slow = StubResponse::new(200, "OK", SCHEDULED);
    slow.delay = Some(Duration::from_secs(3));
    let server = stub_server::start(slow);

    let cancel = CancelToken::new();
    let trigger = cancel.clone();
    let canceller = thread::spawn(move || {
        thread::sleep(Duration::from_millis(300));
        trigger.cancel();
    });

    let endpoint = VideosEndpoint::new(&server.base_url, "test-key").unwrap();
    let request = CallRequest::new("abc", cancel);
    let o = classify(&request, &endpoint, &transport(), &JsonBodyParser);
    canceller.join().unwrap();
    assert!(o.is_retryable(), "{}", o);
}

#[tokio::test]
async fn async_fetch_runs_on_blocking_pool() {
    let server = stub_server::start(StubResponse::new(200, "OK", SCHEDULED));
    let endpoint = VideosEndpoint::new(&server.base_url, "test-key").unwrap();
    let request = CallRequest::new("abc", CancelToken::new());
    let o = fetch_live_streaming_details(request, endpoint, transport(), JsonBodyParser).await;
    assert!(o.is_success(), "{}", o);
}
