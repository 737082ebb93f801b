use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.verifly.email";

/// Connection settings for [`RemoteClient`](crate::remote::RemoteClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteOptions {
    pub base_url: String,
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for RemoteOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            timeout_ms: 30_000,
            user_agent: format!("verifly-cli/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl RemoteOptions {
    /// Request deadline. A zero timeout leaves the request unbounded.
    pub fn timeout(&self) -> Option<Duration> {
        if self.timeout_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.timeout_ms))
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}
