//! Re-invoke a call while it stays retryable.

use std::future::Future;
use std::time::Duration;
use ytlive_core::{CancelToken, Outcome};

/// Runs `attempt` until it settles (success or failure), the attempt budget
/// is spent, or `cancel` is set. Waits a fixed `delay` between attempts.
/// The last outcome is returned as-is, so an exhausted budget stays retryable.
pub async fn run_until_settled<T, F, Fut>(
    max_attempts: u32,
    delay: Duration,
    cancel: &CancelToken,
    mut attempt: F,
) -> Outcome<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Outcome<T>>,
{
    let max_attempts = max_attempts.max(1);
    let mut n = 1u32;
    loop {
        let outcome = attempt(n).await;
        match &outcome {
            Outcome::Success(_) | Outcome::Failure(_) => return outcome,
            Outcome::Retryable(reason) => {
                if n >= max_attempts || cancel.is_cancelled() {
                    return outcome;
                }
                tracing::warn!("attempt {}/{} retryable: {}", n, max_attempts, reason);
                tokio::time::sleep(delay).await;
                n += 1;
            }
        }
    }
}
