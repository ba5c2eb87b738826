//! Common-MPIN denylist
//!
//! Holds the built-in set of widely used MPINs and an optional extension
//! loaded from an external file.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{LazyLock, RwLock};
use thiserror::Error;

/// Curated MPINs seen over and over in real banking PIN dumps, both lengths.
/// Always active, no initialization required.
static BUILTIN_COMMON_MPINS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "1234", "1111", "0000", "9999", "1122", "1212", "7777", "1004", "2000", "2222",
        "123456", "000000", "111111", "999999", "654321", "234567", "555555", "888888",
    ])
});

static EXTRA_COMMON_MPINS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
}

/// Returns the denylist file path.
///
/// Priority:
/// 1. Environment variable `MPIN_DENYLIST_PATH`
/// 2. Default path `./assets/denylist.txt`
pub fn get_denylist_path() -> PathBuf {
    std::env::var("MPIN_DENYLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/denylist.txt"))
}

/// Loads additional common MPINs from an external file.
///
/// The file extends the built-in set, it never replaces it. One MPIN per
/// line; blank and non-digit lines are skipped.
///
/// # Environment Variable
///
/// Set `MPIN_DENYLIST_PATH` to specify a custom denylist file location.
/// If not set, defaults to `./assets/denylist.txt`.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File contains no usable entries
pub fn init_denylist() -> Result<usize, DenylistError> {
    let path = get_denylist_path();
    init_denylist_from_path(&path)
}

/// Loads additional common MPINs from a specific file path.
///
/// Use this when the host application resolves the path itself instead of
/// relying on environment variables. Idempotent: once loaded, subsequent
/// calls return the current entry count without re-reading the file.
pub fn init_denylist_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<usize, DenylistError> {
    {
        let guard = EXTRA_COMMON_MPINS.read().unwrap();
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Denylist initialization FAILED: FileNotFound {}", path.display());
        return Err(DenylistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let set: HashSet<String> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && l.chars().all(|c| c.is_ascii_digit()))
        .map(String::from)
        .collect();

    if set.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Denylist initialization FAILED: Empty file {}", path.display());
        return Err(DenylistError::EmptyFile);
    }

    let count = set.len();
    {
        let mut guard = EXTRA_COMMON_MPINS.write().unwrap();
        *guard = Some(set);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Denylist initialized: {} extra MPINs from {:?}", count, path);

    Ok(count)
}

/// Returns a clone of the loaded extension set.
///
/// Returns `None` if `init_denylist()` has not been called. The built-in
/// set is not included.
pub fn get_denylist() -> Option<HashSet<String>> {
    let guard = EXTRA_COMMON_MPINS.read().unwrap();
    guard.clone()
}

/// Checks if an MPIN is in the common-value set.
///
/// The built-in set is always consulted; the file-loaded extension only
/// when initialized.
pub fn is_common_mpin(mpin: &str) -> bool {
    if BUILTIN_COMMON_MPINS.contains(mpin) {
        return true;
    }
    let guard = EXTRA_COMMON_MPINS.read().unwrap();
    guard
        .as_ref()
        .map(|set| set.contains(mpin))
        .unwrap_or(false)
}

/// Resets the loaded extension for testing purposes.
#[cfg(test)]
pub fn reset_denylist_for_testing() {
    let mut guard = EXTRA_COMMON_MPINS.write().unwrap();
    *guard = None;
}
