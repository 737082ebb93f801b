//! Sequential batch verification.
//!
//! [`run_batch`] classifies every address in order through a [`Selector`],
//! recording one [`Classification`] per input and updating a [`Tally`]. A
//! failing lookup is recorded as `error` and never stops the run.

mod input;
mod tally;

pub use input::{collect_addresses, read_address_file};
pub use tally::{BatchOutcome, Tally};

use crate::classify::Classification;
use crate::remote::Transport;
use crate::selector::Selector;

/// Classify `addresses` in order. `progress` receives `(done, total)` after
/// each address.
pub fn run_batch<T, S, P>(
    addresses: &[S],
    selector: &Selector<T>,
    mut progress: P,
) -> (BatchOutcome, Tally)
where
    T: Transport,
    S: AsRef<str>,
    P: FnMut(usize, usize),
{
    let total = addresses.len();
    let mut outcome = BatchOutcome::with_capacity(total);
    let mut tally = Tally::default();

    tracing::info!(total, offline = selector.mode().is_offline(), "batch started");

    for (idx, address) in addresses.iter().enumerate() {
        let address = address.as_ref().trim();
        let classification: Classification = selector.classify(address);
        tracing::debug!(email = address, status = %classification.status, "classified");

        tally.record(classification.status);
        outcome.push(classification);
        progress(idx + 1, total);
    }

    tracing::info!(
        valid = tally.valid,
        invalid = tally.invalid,
        risky = tally.risky,
        "batch finished"
    );
    (outcome, tally)
}

#[cfg(test)]
mod tests;
