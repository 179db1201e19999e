//! Placeholder Synchronization Engine
//!
//! Pure operations over a caller-owned [`Document`]. The engine keeps no
//! state between calls.

pub mod document;
pub mod error;
pub mod mutation;
pub mod reconcile;
pub mod render;

pub use document::{Document, VariableSlot};
pub use error::EngineError;
pub use mutation::{append_variable, remove_variable};
pub use reconcile::{Reconciled, is_normalized, normalize, reconcile};
pub use render::render;
