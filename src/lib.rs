#![forbid(unsafe_code)]
//! verifly : vérification d'adresses e-mail, hors-ligne ou via l'API distante.

pub mod batch;
pub mod classify;
pub mod config;
pub mod error;
pub mod remote;
pub mod report;
pub mod selector;

pub use batch::{BatchOutcome, Tally, collect_addresses, read_address_file, run_batch};
pub use classify::{Classification, Source, Status, classify_offline};
pub use config::{Config, Credential, default_config_path, resolve_credential};
pub use error::Error;
pub use remote::{AccountStats, RemoteClient, RemoteError, RemoteOptions, Transport};
pub use report::{
    Summary, default_output_path, summarize, write_results, write_results_to_path,
};
pub use selector::{Selector, VerifyConfig, VerifyMode, select_and_classify};
