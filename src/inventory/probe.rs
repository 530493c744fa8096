//! Directory emptiness gate.

use std::path::Path;

/// True when `path` cannot be opened as a directory or contains no
/// entries.
///
/// Errors other than "does not exist" also count as empty: the prober
/// only gates whether a version script is worth running.
pub fn is_empty_or_missing(path: &Path) -> bool {
    match std::fs::read_dir(path) {
        Ok(mut entries) => entries.next().is_none(),
        Err(_) => true,
    }
}
