//! Client for the remote verification API.
//!
//! [`RemoteClient::verify`] performs one authenticated lookup per address and
//! never fails: transport or payload problems come back as an `error`
//! [`Classification`](crate::Classification). [`RemoteClient::fetch_stats`]
//! propagates its errors since the caller has no offline fallback.

mod client;
mod error;
mod options;
mod types;

pub use client::{HttpTransport, RemoteClient, Transport};
pub use error::RemoteError;
pub use options::{DEFAULT_API_BASE, RemoteOptions};
pub use types::AccountStats;
