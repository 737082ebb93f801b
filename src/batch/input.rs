use std::path::Path;

use crate::error::Error;

/// Candidate addresses from bulk text: one per line, trimmed; blank lines and
/// lines without `@` are dropped. Order and duplicates are kept.
pub fn collect_addresses(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.contains('@'))
        .map(str::to_string)
        .collect()
}

/// Read and filter a bulk input file. A missing file is fatal; bytes that are
/// not UTF-8 are replaced with U+FFFD instead of failing the run.
pub fn read_address_file(path: &Path) -> Result<Vec<String>, Error> {
    let bytes = std::fs::read(path).map_err(|err| Error::input_read(path, err))?;
    let addresses = collect_addresses(&String::from_utf8_lossy(&bytes));
    tracing::debug!(path = %path.display(), count = addresses.len(), "addresses loaded");
    Ok(addresses)
}
