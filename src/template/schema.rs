//! Template Draft Schema
//!
//! Serde shape of a composer state, as read from TOML draft files.

use serde::{Deserialize, Serialize};

use crate::composer::{Button, TemplateType};
use crate::engine::VariableSlot;

/// A template draft (matches TOML)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateDraft {
    /// Falls back to the configured default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_type: Option<TemplateType>,
    pub header: String,
    pub body: String,
    pub footer: String,
    pub header_variables: Vec<VariableSlot>,
    pub body_variables: Vec<VariableSlot>,
    pub buttons: Vec<Button>,
}
