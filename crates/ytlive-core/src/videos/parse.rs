//! Body deserialization seam.

use thiserror::Error;

use super::dto::VideosResponse;

#[derive(Debug, Error)]
#[error("invalid videos JSON: {0}")]
pub struct ParseError(#[from] pub serde_json::Error);

/// Turns a response body into a [`VideosResponse`].
pub trait BodyParser {
    fn parse(&self, body: &[u8]) -> Result<VideosResponse, ParseError>;
}

/// serde_json-backed parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBodyParser;

impl BodyParser for JsonBodyParser {
    fn parse(&self, body: &[u8]) -> Result<VideosResponse, ParseError> {
        Ok(serde_json::from_slice(body)?)
    }
}
