use crate::config::UpstreamSettings;

// app's shared state, read-only after startup
pub struct AppState {
    pub client: reqwest::Client,
    pub upstream: UpstreamSettings,
}

impl AppState {
    pub fn new(upstream: UpstreamSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            upstream,
        }
    }
}
