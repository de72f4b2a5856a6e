//! YouTube Data API `videos` endpoint: wire structures, URL, body parser.

mod dto;
mod parse;
mod query;

pub use dto::{LiveStreamingDetails, VideoItem, VideosResponse};
pub use parse::{BodyParser, JsonBodyParser, ParseError};
pub use query::{VideosEndpoint, DEFAULT_BASE_URL};
