//! Error types for swatchlab

use thiserror::Error;

/// Result type for swatchlab operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in swatchlab operations
///
/// Every numeric stage of the pipeline is total, so the only failure is a
/// malformed input color, detected before any conversion runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Input is not `#rrggbb` / `rrggbb` (six hex digits, optional `#`)
    #[error("Invalid hex color: {0:?}")]
    InvalidHex(String),
}
