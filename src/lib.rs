//! Template Composer
//!
//! Keeps `{{n}}` placeholders in message templates consistent while they
//! are being edited.
//!
//! This library provides:
//! - Placeholder scanning and first-appearance renumbering
//! - Append/remove variable mutations and preview rendering
//! - Header/body/footer/button composition with validation
//! - Draft files, configuration and the `tplc` command line

pub mod cli;
pub mod composer;
pub mod config;
pub mod engine;
pub mod parser;
pub mod template;
pub mod validation;

pub use composer::{Composer, Field, TemplateType};
pub use config::Config;
pub use engine::{Document, EngineError, VariableSlot, reconcile, render};
pub use parser::scan;
pub use template::TemplateDraft;
pub use validation::{Diagnostic, validate_composer};
