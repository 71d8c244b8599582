//! Errors produced when loading a training corpus.

use thiserror::Error;

/// Errors produced by the data loading module.
///
/// # Variants
///
/// - **Io**: Failed to read the file (e.g. file not found, permission denied, invalid UTF-8).
///   *When*: Opening or reading the path in [`PathLoader`](super::PathLoader) or [`load_corpus`](super::load_corpus).
///   *Recovery*: Ensure the path exists, is readable, and contains valid UTF-8; check the source for details.
#[derive(Debug, Error)]
pub enum DataError {
    /// I/O error while reading the input file.
    #[error("data io: {0}")]
    Io(#[from] std::io::Error),
}
