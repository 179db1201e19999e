//! Document State
//!
//! One text field and the ordered variable slots that back its placeholders.

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::mutation;
use super::reconcile::{self, Reconciled};
use super::render;

/// The value bound to one placeholder number.
///
/// Slots have no identity of their own: the slot at index `i` backs
/// placeholder `{{i+1}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableSlot {
    pub value: String,
}

impl VariableSlot {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// A slot with no value bound yet
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_bound(&self) -> bool {
        !self.value.is_empty()
    }
}

impl From<&str> for VariableSlot {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for VariableSlot {
    fn from(value: String) -> Self {
        Self { value }
    }
}

/// Text plus variable slots for one field (header or body)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub text: String,
    pub slots: Vec<VariableSlot>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from raw parts and normalize it
    pub fn from_parts(text: impl Into<String>, slots: Vec<VariableSlot>) -> Self {
        let mut doc = Self {
            text: text.into(),
            slots,
        };
        doc.reconcile();
        doc
    }

    /// Number of variable slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Replace the text (a keystroke or paste) and re-derive the slots.
    ///
    /// Returns `true` when normalization rewrote the text or the slots.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        self.text = text.into();
        self.reconcile()
    }

    /// Bind a value to the slot at `index`
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) -> Result<(), EngineError> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(EngineError::IndexOutOfRange { index, len })?;
        slot.value = value.into();
        Ok(())
    }

    /// Normalize text and slots in place.
    ///
    /// Returns `false` (and touches nothing) when already normalized.
    pub fn reconcile(&mut self) -> bool {
        match reconcile::reconcile(&self.text, &self.slots) {
            Reconciled::Unchanged => false,
            Reconciled::Changed { text, slots } => {
                log::debug!(
                    "reconciled document: {} -> {} slots",
                    self.slots.len(),
                    slots.len()
                );
                self.text = text;
                self.slots = slots;
                true
            }
        }
    }

    /// Append a new empty variable and its `{{K+1}}` token
    pub fn append_variable(&mut self) {
        mutation::append_variable(self);
    }

    /// Remove the variable at `index`, renumbering later placeholders
    pub fn remove_variable(&mut self, index: usize) -> Result<(), EngineError> {
        mutation::remove_variable(self, index)
    }

    /// Text with every bound placeholder substituted
    pub fn render(&self) -> String {
        render::render(&self.text, &self.slots)
    }

    /// Indices of slots that have no value yet
    pub fn unbound_slots(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| !slot.is_bound())
            .map(|(index, _)| index)
            .collect()
    }
}
