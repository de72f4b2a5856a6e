pub mod config;
pub mod logging;

pub mod classify;
pub mod control;
pub mod outcome;
pub mod transport;
pub mod videos;

pub use classify::{classify, fetch_live_streaming_details, CallRequest};
pub use control::CancelToken;
pub use outcome::{Outcome, OutcomeError};
