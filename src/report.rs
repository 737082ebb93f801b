//! CSV record and human summary for a finished batch.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::batch::{BatchOutcome, Tally};
use crate::error::Error;

pub const CSV_HEADER: [&str; 3] = ["email", "status", "disposable"];

/// Write `email,status,disposable` rows in outcome order. The header is
/// always written, even for an empty outcome.
pub fn write_results<W: Write>(outcome: &BatchOutcome, writer: W) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER).map_err(Error::csv)?;
    for entry in outcome {
        wtr.write_record([
            entry.email.as_str(),
            entry.status.as_str(),
            if entry.disposable { "true" } else { "false" },
        ])
        .map_err(Error::csv)?;
    }
    wtr.flush().map_err(|err| Error::csv(err.into()))?;
    Ok(())
}

pub fn write_results_to_path(outcome: &BatchOutcome, path: &Path) -> Result<(), Error> {
    let mut buf = Vec::new();
    write_results(outcome, &mut buf)?;
    write_all_atomically(path, &buf).map_err(|err| Error::output(path, err))
}

/// `emails.csv` -> `emails-verified.csv`; any other name gets the suffix appended.
pub fn default_output_path(input: &Path) -> PathBuf {
    let is_csv = input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    let name = if is_csv {
        input.file_stem()
    } else {
        input.file_name()
    }
    .map(|s| s.to_string_lossy().into_owned())
    .unwrap_or_else(|| "results".to_string());

    input.with_file_name(format!("{name}-verified.csv"))
}

/// Counts shown to the operator once a batch is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub valid: usize,
    pub invalid: usize,
    pub risky: usize,
}

pub fn summarize(tally: &Tally) -> Summary {
    Summary {
        valid: tally.valid,
        invalid: tally.invalid,
        risky: tally.risky,
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Results:")?;
        writeln!(f, "  Valid:   {}", self.valid)?;
        writeln!(f, "  Invalid: {}", self.invalid)?;
        write!(f, "  Risky:   {}", self.risky)
    }
}

pub(crate) fn write_all_atomically(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    let written = std::fs::File::create(&tmp)
        .and_then(|mut f| {
            f.write_all(bytes)?;
            f.sync_all()
        })
        .and_then(|()| std::fs::rename(&tmp, path));
    if written.is_err() {
        let _ = std::fs::remove_file(&tmp);
    }
    written
}
