//! On-disk configuration (`~/.verifly`) and the API credential.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const CONFIG_FILE_NAME: &str = ".verifly";
pub const CONFIG_PATH_ENV: &str = "VERIFLY_CONFIG";
pub const API_KEY_ENV: &str = "VERIFLY_API_KEY";

/// Bearer token for the verification API. Never printed in clear.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// `None` for empty or blank tokens.
    pub fn parse(token: &str) -> Option<Self> {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// `****` suivi des 4 derniers caractères.
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
        format!("****{tail}")
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&self.masked()).finish()
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "apiKey", default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Config {
    /// Load `path`; a missing file yields the default configuration.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(Error::config(path, err)),
        };
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(&text).map_err(|err| Error::config_parse(path, err))
    }

    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|err| Error::config(path, std::io::Error::other(err)))?;
        crate::report::write_all_atomically(path, json.as_bytes())
            .map_err(|err| Error::config(path, err))
    }

    pub fn credential(&self) -> Option<Credential> {
        self.api_key.as_deref().and_then(Credential::parse)
    }

    pub fn set_api_key(&mut self, key: &str) -> Option<Credential> {
        let credential = Credential::parse(key);
        self.api_key = credential.as_ref().map(|c| c.expose().to_string());
        credential
    }
}

/// `$VERIFLY_CONFIG`, sinon `~/.verifly`.
pub fn default_config_path() -> Result<PathBuf, Error> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    dirs::home_dir()
        .map(|home| home.join(CONFIG_FILE_NAME))
        .ok_or(Error::NoHomeDir)
}

/// Credential precedence: explicit override, then `$VERIFLY_API_KEY`, then the stored key.
pub fn resolve_credential(override_key: Option<&str>, config: &Config) -> Option<Credential> {
    override_key
        .and_then(Credential::parse)
        .or_else(|| {
            std::env::var(API_KEY_ENV)
                .ok()
                .as_deref()
                .and_then(Credential::parse)
        })
        .or_else(|| config.credential())
}
