//! Tri-state result of one remote call attempt.
//!
//! Every call resolves to exactly one of [`Outcome::Success`],
//! [`Outcome::Retryable`] or [`Outcome::Failure`]. Reason strings are
//! diagnostic traces for logs; callers branch on the variant, never on text.

use std::fmt;

/// Result of a single call attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The call produced a value.
    Success(T),
    /// Transient failure; re-invoking the same call may succeed.
    Retryable(String),
    /// Permanent failure for this input.
    Failure(String),
}

/// Error form of a non-success outcome, for callers that propagate with `?`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutcomeError {
    #[error("retryable: {0}")]
    Retryable(String),
    #[error("failed: {0}")]
    Failure(String),
}

impl OutcomeError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, OutcomeError::Retryable(_))
    }
}

impl<T> Outcome<T> {
    pub fn succeed(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Builds a retryable outcome. `reason` must not be empty.
    pub fn retry_with_trace(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        debug_assert!(!reason.is_empty(), "retryable outcome needs a trace");
        Outcome::Retryable(reason)
    }

    /// Builds a failed outcome. `reason` must not be empty.
    pub fn fail_with_trace(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        debug_assert!(!reason.is_empty(), "failed outcome needs a trace");
        Outcome::Failure(reason)
    }

    /// Converts a binary result: `Ok` succeeds, `Err` fails with the error text.
    pub fn from_result<E: fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(e) => Outcome::fail_with_trace(e.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, Outcome::Retryable(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// The success value, if any.
    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Retryable(_) | Outcome::Failure(_) => None,
        }
    }

    /// The diagnostic trace of a retryable or failed outcome.
    pub fn trace(&self) -> Option<&str> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Retryable(reason) | Outcome::Failure(reason) => Some(reason),
        }
    }

    /// Exhaustive dispatch over the three variants.
    pub fn fold<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_retryable: impl FnOnce(String) -> R,
        on_failure: impl FnOnce(String) -> R,
    ) -> R {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Retryable(reason) => on_retryable(reason),
            Outcome::Failure(reason) => on_failure(reason),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Retryable(reason) => Outcome::Retryable(reason),
            Outcome::Failure(reason) => Outcome::Failure(reason),
        }
    }

    /// Chains a follow-up step that runs only on success.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Retryable(reason) => Outcome::Retryable(reason),
            Outcome::Failure(reason) => Outcome::Failure(reason),
        }
    }

    /// Rewrites the trace of a non-success outcome, keeping its variant.
    pub fn map_trace(self, f: impl FnOnce(String) -> String) -> Self {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Retryable(reason) => Outcome::Retryable(f(reason)),
            Outcome::Failure(reason) => Outcome::Failure(f(reason)),
        }
    }

    pub fn into_result(self) -> Result<T, OutcomeError> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Retryable(reason) => Err(OutcomeError::Retryable(reason)),
            Outcome::Failure(reason) => Err(OutcomeError::Failure(reason)),
        }
    }
}

impl<T> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(_) => write!(f, "success"),
            Outcome::Retryable(reason) => write!(f, "retryable: {}", reason),
            Outcome::Failure(reason) => write!(f, "failed: {}", reason),
        }
    }
}
