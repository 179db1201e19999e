//! Validation Engine
//!
//! Form rules (required fields, lengths, buttons) kept apart from
//! placeholder normalization.

pub mod engine;

pub use engine::{Diagnostic, Severity, validate_composer};

// Re-export common types
pub use engine::ValidationResult;
