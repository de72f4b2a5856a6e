//! Body stage: runs only on 2xx responses.

use crate::outcome::Outcome;
use crate::videos::{BodyParser, LiveStreamingDetails};

/// Empty body, parse error, or zero items all fail; otherwise the first
/// item's details win and later items are ignored.
pub fn classify_body<P>(body: &[u8], parser: &P) -> Outcome<LiveStreamingDetails>
where
    P: BodyParser + ?Sized,
{
    if body.is_empty() {
        return Outcome::fail_with_trace("failed because response body was empty");
    }

    let response = match parser.parse(body) {
        Ok(response) => response,
        Err(e) => {
            return Outcome::fail_with_trace(format!(
                "failed to deserialize response because -> {}",
                e
            ))
        }
    };

    let Some(first) = response.items.into_iter().next() else {
        return Outcome::fail_with_trace("failed because response had no matching items");
    };

    match first.live_streaming_details {
        Some(details) => Outcome::succeed(details),
        None => Outcome::fail_with_trace(format!(
            "failed because video {} has no live streaming details",
            first.id.as_deref().unwrap_or("<unknown>")
        )),
    }
}
