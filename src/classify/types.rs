use std::fmt;

use serde::{Deserialize, Serialize};

/// Verdict attached to one address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Valid,
    Invalid,
    Risky,
    /// Neither classifier produced a determinate verdict (transport failure, bad payload).
    Error,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
            Self::Risky => "risky",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Offline,
    Remote,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Offline => "offline",
            Self::Remote => "remote",
        }
    }
}

/// Outcome for a single address, whatever produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub email: String,
    pub status: Status,
    pub disposable: bool,
    pub role: bool,
    pub source: Source,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Classification {
    pub fn new(email: impl Into<String>, status: Status, source: Source) -> Self {
        Self {
            email: email.into(),
            status,
            disposable: false,
            role: false,
            source,
            detail: None,
        }
    }

    /// `error` verdict from the remote side, carrying the failure message.
    pub fn remote_error(email: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(email, Status::Error, Source::Remote).with_detail(detail)
    }

    pub fn with_flags(mut self, disposable: bool, role: bool) -> Self {
        self.disposable = disposable;
        self.role = role;
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn is_valid(&self) -> bool {
        self.status == Status::Valid
    }
}
