//! Engine errors

use thiserror::Error;

/// The single failure the engine can report.
///
/// Everything else (malformed braces, odd numbering) is handled by
/// normalization rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A variable index not currently backed by a slot
    #[error("variable index {index} is out of range ({len} variables)")]
    IndexOutOfRange { index: usize, len: usize },
}
