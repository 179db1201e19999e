//! Template Composer
//!
//! The form-state side of the system: owns the header and body documents,
//! the plain footer and the button list, and routes every edit through the
//! engine so both documents stay normalized.

pub mod buttons;
pub mod error;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::Document;
use crate::template::TemplateDraft;

pub use buttons::{Button, ButtonKind, ButtonList, DEFAULT_MAX_BUTTONS};
pub use error::ComposerError;

/// Template category; decides which button kinds are offered
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TemplateType {
    #[default]
    Marketing,
    Utility,
}

impl TemplateType {
    /// Whether buttons of this kind may be added
    pub fn allows(self, kind: ButtonKind) -> bool {
        match self {
            TemplateType::Marketing => true,
            TemplateType::Utility => matches!(kind, ButtonKind::Url | ButtonKind::Call),
        }
    }
}

impl fmt::Display for TemplateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateType::Marketing => f.write_str("marketing"),
            TemplateType::Utility => f.write_str("utility"),
        }
    }
}

/// A placeholder-bearing field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Header,
    Body,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Header => f.write_str("header"),
            Field::Body => f.write_str("body"),
        }
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "header" => Ok(Field::Header),
            "body" => Ok(Field::Body),
            other => Err(format!("unknown field '{other}' (expected header or body)")),
        }
    }
}

/// A rendered button in the preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonPreview {
    pub kind: ButtonKind,
    pub label: String,
}

/// Rendered view of the whole template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub header: String,
    pub body: String,
    pub footer: String,
    pub buttons: Vec<ButtonPreview>,
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        writeln!(f)?;
        writeln!(f, "{}", self.body)?;
        if !self.footer.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.footer)?;
        }
        for button in &self.buttons {
            writeln!(f, "[ {} ]", button.label)?;
        }
        Ok(())
    }
}

/// State of one template being composed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composer {
    template_type: TemplateType,
    header: Document,
    body: Document,
    footer: String,
    buttons: ButtonList,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new(TemplateType::default(), DEFAULT_MAX_BUTTONS)
    }
}

impl Composer {
    pub fn new(template_type: TemplateType, max_buttons: usize) -> Self {
        Self {
            template_type,
            header: Document::new(),
            body: Document::new(),
            footer: String::new(),
            buttons: ButtonList::new(max_buttons),
        }
    }

    /// Seed a composer from a draft, normalizing header and body
    pub fn from_draft(draft: TemplateDraft, max_buttons: usize) -> Self {
        let header = Document::from_parts(draft.header, draft.header_variables);
        let body = Document::from_parts(draft.body, draft.body_variables);

        Self {
            template_type: draft.template_type.unwrap_or_default(),
            header,
            body,
            footer: draft.footer,
            buttons: ButtonList::from_vec(draft.buttons, max_buttons),
        }
    }

    pub fn to_draft(&self) -> TemplateDraft {
        TemplateDraft {
            template_type: Some(self.template_type),
            header: self.header.text.clone(),
            body: self.body.text.clone(),
            footer: self.footer.clone(),
            header_variables: self.header.slots.clone(),
            body_variables: self.body.slots.clone(),
            buttons: self.buttons.as_slice().to_vec(),
        }
    }

    /// Replace the state with the bundled sample template
    pub fn load_example(&mut self) {
        let max_buttons = self.buttons.max();
        *self = Self::from_draft(crate::template::embedded_example(), max_buttons);
        log::info!("loaded example template");
    }

    pub fn template_type(&self) -> TemplateType {
        self.template_type
    }

    pub fn document(&self, field: Field) -> &Document {
        match field {
            Field::Header => &self.header,
            Field::Body => &self.body,
        }
    }

    fn document_mut(&mut self, field: Field) -> &mut Document {
        match field {
            Field::Header => &mut self.header,
            Field::Body => &mut self.body,
        }
    }

    pub fn footer(&self) -> &str {
        &self.footer
    }

    pub fn buttons(&self) -> &ButtonList {
        &self.buttons
    }

    /// Text edit on header or body; returns whether normalization rewrote it
    pub fn set_text(&mut self, field: Field, text: impl Into<String>) -> bool {
        let changed = self.document_mut(field).set_text(text);
        if changed {
            log::debug!("{field} normalized after edit");
        }
        changed
    }

    pub fn set_footer(&mut self, text: impl Into<String>) {
        self.footer = text.into();
    }

    /// Add a variable; returns the new placeholder number
    pub fn add_variable(&mut self, field: Field) -> usize {
        let doc = self.document_mut(field);
        doc.append_variable();
        doc.len()
    }

    pub fn remove_variable(&mut self, field: Field, index: usize) -> Result<(), ComposerError> {
        self.document_mut(field).remove_variable(index)?;
        Ok(())
    }

    pub fn set_variable_value(
        &mut self,
        field: Field,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), ComposerError> {
        self.document_mut(field).set_value(index, value)?;
        Ok(())
    }

    pub fn add_button(&mut self, button: Button) -> Result<(), ComposerError> {
        self.buttons.add(button, self.template_type)
    }

    pub fn remove_button(&mut self, index: usize) -> Result<Button, ComposerError> {
        self.buttons.remove(index)
    }

    pub fn change_button_kind(&mut self, index: usize, kind: ButtonKind) -> Result<(), ComposerError> {
        self.buttons.change_kind(index, kind, self.template_type)
    }

    /// Render header and body with their variables substituted
    pub fn preview(&self) -> Preview {
        Preview {
            header: self.header.render(),
            body: self.body.render(),
            footer: self.footer.clone(),
            buttons: self
                .buttons
                .as_slice()
                .iter()
                .map(|button| ButtonPreview {
                    kind: button.kind,
                    label: button.label(),
                })
                .collect(),
        }
    }
}
