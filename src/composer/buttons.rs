//! Interactive Buttons
//!
//! A plain capped list; no placeholder handling happens here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::TemplateType;
use super::error::ComposerError;

/// Default cap on buttons per template
pub const DEFAULT_MAX_BUTTONS: usize = 6;

/// What a button does when tapped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonKind {
    Url,
    Call,
    OfferCode,
}

impl fmt::Display for ButtonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ButtonKind::Url => "URL",
            ButtonKind::Call => "Call",
            ButtonKind::OfferCode => "Offer Code",
        };
        f.write_str(name)
    }
}

impl FromStr for ButtonKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "url" => Ok(ButtonKind::Url),
            "call" | "phone" => Ok(ButtonKind::Call),
            "offer" | "offer_code" | "offer-code" => Ok(ButtonKind::OfferCode),
            other => Err(format!(
                "unknown button kind '{other}' (expected url, call or offer_code)"
            )),
        }
    }
}

/// One interactive button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub kind: ButtonKind,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Button {
    pub fn new(kind: ButtonKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            url: None,
            phone: None,
        }
    }

    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::new(ButtonKind::Url, text)
        }
    }

    pub fn call(text: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            phone: Some(phone.into()),
            ..Self::new(ButtonKind::Call, text)
        }
    }

    pub fn offer_code(code: impl Into<String>) -> Self {
        Self::new(ButtonKind::OfferCode, code)
    }

    /// Label shown in the preview
    pub fn label(&self) -> String {
        let (target, fallback) = match self.kind {
            ButtonKind::Url => (self.url.as_deref(), "Visit Website"),
            ButtonKind::Call => (self.phone.as_deref(), "Call Now"),
            ButtonKind::OfferCode => (Some(self.text.as_str()), "Use Code"),
        };
        target
            .filter(|value| !value.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }

    /// Switch kind, dropping targets that no longer apply
    fn set_kind(&mut self, kind: ButtonKind) {
        self.kind = kind;
        if kind != ButtonKind::Url {
            self.url = None;
        }
        if kind != ButtonKind::Call {
            self.phone = None;
        }
    }
}

/// Buttons of a template, capped at `max` entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonList {
    buttons: Vec<Button>,
    max: usize,
}

impl Default for ButtonList {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BUTTONS)
    }
}

impl ButtonList {
    pub fn new(max: usize) -> Self {
        Self {
            buttons: Vec::new(),
            max,
        }
    }

    /// Take buttons as-is, even past the cap; validation reports the excess
    pub fn from_vec(buttons: Vec<Button>, max: usize) -> Self {
        Self { buttons, max }
    }

    pub fn as_slice(&self) -> &[Button] {
        &self.buttons
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn add(&mut self, button: Button, template_type: TemplateType) -> Result<(), ComposerError> {
        if self.buttons.len() >= self.max {
            return Err(ComposerError::ButtonLimitReached { max: self.max });
        }
        ensure_allowed(button.kind, template_type)?;
        self.buttons.push(button);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Button, ComposerError> {
        self.check_index(index)?;
        Ok(self.buttons.remove(index))
    }

    pub fn change_kind(
        &mut self,
        index: usize,
        kind: ButtonKind,
        template_type: TemplateType,
    ) -> Result<(), ComposerError> {
        self.check_index(index)?;
        ensure_allowed(kind, template_type)?;
        self.buttons[index].set_kind(kind);
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), ComposerError> {
        let len = self.buttons.len();
        if index < len {
            Ok(())
        } else {
            Err(ComposerError::ButtonIndexOutOfRange { index, len })
        }
    }
}

fn ensure_allowed(kind: ButtonKind, template_type: TemplateType) -> Result<(), ComposerError> {
    if template_type.allows(kind) {
        Ok(())
    } else {
        Err(ComposerError::ButtonKindNotAllowed {
            kind,
            template_type,
        })
    }
}
