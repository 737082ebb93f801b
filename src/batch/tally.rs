use serde::Serialize;

use crate::classify::{Classification, Status};

/// Running counts. Anything that is not exactly `valid` or `invalid` is risky.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub valid: usize,
    pub invalid: usize,
    pub risky: usize,
}

impl Tally {
    pub fn record(&mut self, status: Status) {
        match status {
            Status::Valid => self.valid += 1,
            Status::Invalid => self.invalid += 1,
            Status::Risky | Status::Error => self.risky += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.valid + self.invalid + self.risky
    }
}

/// Classifications in input order, duplicates included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BatchOutcome {
    pub entries: Vec<Classification>,
}

impl BatchOutcome {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, classification: Classification) {
        self.entries.push(classification);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Classification> {
        self.entries.iter()
    }

    /// Recompute the tally from the recorded statuses.
    pub fn tally(&self) -> Tally {
        let mut tally = Tally::default();
        for entry in &self.entries {
            tally.record(entry.status);
        }
        tally
    }
}

impl<'a> IntoIterator for &'a BatchOutcome {
    type Item = &'a Classification;
    type IntoIter = std::slice::Iter<'a, Classification>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_folds_into_risky() {
        let mut tally = Tally::default();
        for status in [Status::Valid, Status::Invalid, Status::Risky, Status::Error, Status::Valid] {
            tally.record(status);
        }
        assert_eq!(
            tally,
            Tally {
                valid: 2,
                invalid: 1,
                risky: 2
            }
        );
        assert_eq!(tally.total(), 5);
    }
}
