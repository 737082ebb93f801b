//! Address classification model and the offline heuristic.
//!
//! [`classify_offline`] is pure: it checks the `local@domain.tld` shape and
//! flags disposable domains and role mailboxes from fixed lists.

mod lists;
mod offline;
mod types;

pub use offline::classify_offline;
pub use types::{Classification, Source, Status};
