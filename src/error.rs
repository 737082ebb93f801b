use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::remote::RemoteError;

/// Environment-level failures. Per-address problems never end up here: they
/// are recorded in the [`Classification`](crate::Classification) instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("file not found: {} (check the path and try again)", .path.display())]
    InputNotFound { path: PathBuf },
    #[error("cannot read {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("API key not set (set it with: verifly config --key YOUR_API_KEY)")]
    MissingCredential,
    #[error("cannot locate the home directory (set VERIFLY_CONFIG to a config file path)")]
    NoHomeDir,
    #[error("config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config file {} is not valid JSON: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot write {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV output failed: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl Error {
    pub(crate) fn input_read(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::InputNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::InputRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub(crate) fn config(path: &Path, source: std::io::Error) -> Self {
        Self::Config {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn config_parse(path: &Path, source: serde_json::Error) -> Self {
        Self::ConfigParse {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn output(path: &Path, source: std::io::Error) -> Self {
        Self::Output {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn csv(source: csv::Error) -> Self {
        Self::Csv { source }
    }
}
