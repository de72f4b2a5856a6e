//! `videos` endpoint response structures (only what `part=liveStreamingDetails` returns).

use serde::{Deserialize, Serialize};

/// Root of a `videos.list` response.
#[derive(Debug, Clone, Deserialize)]
pub struct VideosResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    #[serde(default)]
    pub id: Option<String>,
    /// Absent for videos that never were live broadcasts.
    #[serde(default)]
    pub live_streaming_details: Option<LiveStreamingDetails>,
}

/// Broadcast timing and live-chat metadata of one video.
///
/// Timestamps are RFC 3339 strings and are passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStreamingDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_end_time: Option<String>,
    /// Sent as a decimal string by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concurrent_viewers: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_live_chat_id: Option<String>,
}
