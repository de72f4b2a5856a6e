//! Build the `videos` GET URL.

use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

const ENDPOINT: &str = "videos";
const PART: &str = "liveStreamingDetails";

/// Where and with which key to call the `videos` endpoint.
#[derive(Debug, Clone)]
pub struct VideosEndpoint {
    base_url: Url,
    api_key: String,
}

impl VideosEndpoint {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, url::ParseError> {
        // Url::join drops the last path segment unless the base ends with '/'.
        let mut base = base_url.trim_end_matches('/').to_string();
        base.push('/');
        Ok(Self {
            base_url: Url::parse(&base)?,
            api_key: api_key.into(),
        })
    }

    /// `<base>/videos?part=liveStreamingDetails&id=<id>&key=<key>`
    pub fn url_for(&self, video_id: &str) -> Result<Url, url::ParseError> {
        let mut url = self.base_url.join(ENDPOINT)?;
        url.query_pairs_mut()
            .append_pair("part", PART)
            .append_pair("id", video_id)
            .append_pair("key", &self.api_key);
        Ok(url)
    }
}
