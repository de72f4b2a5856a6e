//! Transport error type for outcome classification.

use thiserror::Error;

/// Error raised while sending a request or reading its response.
///
/// Transports map their native errors onto these kinds so the classifier
/// does not depend on a particular HTTP stack.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Peer refused or reset the connection, or it dropped mid-transfer.
    #[error("connection failed: {0}")]
    Connect(String),
    /// Host (or proxy) name could not be resolved.
    #[error("name resolution failed: {0}")]
    Resolve(String),
    /// Connect or overall deadline elapsed.
    #[error("timed out: {0}")]
    Timeout(String),
    /// The cancel token was set while the request was in flight.
    #[error("cancelled during transfer")]
    Cancelled,
    /// Anything else (bad option, TLS setup, unexpected runtime fault).
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    pub fn is_connectivity(&self) -> bool {
        matches!(self, TransportError::Connect(_) | TransportError::Resolve(_))
    }

    pub fn is_interrupted(&self) -> bool {
        matches!(self, TransportError::Timeout(_) | TransportError::Cancelled)
    }
}
