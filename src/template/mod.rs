//! Template Drafts
//!
//! Draft files are input only: the composer never writes them back.

pub mod loader;
pub mod schema;

pub use loader::{embedded_example, load_draft, load_draft_async, parse_draft};
pub use schema::TemplateDraft;
