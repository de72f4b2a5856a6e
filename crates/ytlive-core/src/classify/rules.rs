//! Ordered rules turning a transport error into an outcome.

use crate::outcome::Outcome;
use crate::transport::TransportError;

/// Which non-success variant a matched rule produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Retry,
    Fail,
}

/// One (predicate, verdict, formatter) rule.
pub struct TransportRule {
    pub matches: fn(&TransportError) -> bool,
    pub verdict: Verdict,
    pub describe: fn(&TransportError) -> String,
}

/// Evaluated top to bottom; the first match wins. The catch-all stays last.
pub const TRANSPORT_RULES: &[TransportRule] = &[
    TransportRule {
        matches: TransportError::is_connectivity,
        verdict: Verdict::Retry,
        describe: |e| format!("retryable because -> {}", e),
    },
    TransportRule {
        matches: TransportError::is_interrupted,
        verdict: Verdict::Retry,
        describe: |e| format!("retryable because -> {}", e),
    },
    TransportRule {
        matches: |_| true,
        verdict: Verdict::Fail,
        describe: |e| format!("failed because -> {}", e),
    },
];

/// Classify a transport error against [`TRANSPORT_RULES`].
pub fn classify_transport_error<T>(e: &TransportError) -> Outcome<T> {
    let rule = TRANSPORT_RULES
        .iter()
        .find(|rule| (rule.matches)(e))
        .unwrap_or_else(|| unreachable!("transport rules end with a catch-all"));
    let reason = (rule.describe)(e);
    match rule.verdict {
        Verdict::Retry => Outcome::retry_with_trace(reason),
        Verdict::Fail => Outcome::fail_with_trace(reason),
    }
}
