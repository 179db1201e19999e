//! Composer errors

use thiserror::Error;

use super::buttons::ButtonKind;
use super::TemplateType;
use crate::engine::EngineError;

/// Failures of composer actions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposerError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("maximum buttons reached ({max})")]
    ButtonLimitReached { max: usize },

    #[error("button index {index} is out of range ({len} buttons)")]
    ButtonIndexOutOfRange { index: usize, len: usize },

    #[error("{kind} buttons are not available for {template_type} templates")]
    ButtonKindNotAllowed {
        kind: ButtonKind,
        template_type: TemplateType,
    },
}
