//! Validation Engine
//!
//! Form-level checks on a composed template, separate from the
//! placeholder engine and from the CLI.

use serde::Serialize;

use crate::composer::{Button, ButtonKind, Composer, Field};
use crate::config::Limits;
use crate::parser::scan_unnumbered;

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A diagnostic message for a validation issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Field path, e.g. `body` or `body_variables[2]`
    pub field: String,
    pub message: String,
    pub severity: Severity,
}

/// Result of validating a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: String) {
        self.diagnostics.push(Diagnostic {
            field: field.into(),
            message,
            severity: Severity::Error,
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: String) {
        self.diagnostics.push(Diagnostic {
            field: field.into(),
            message,
            severity: Severity::Warning,
        });
    }

    pub fn is_valid(&self) -> bool {
        !self
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }
}

/// Validate everything the composer holds
pub fn validate_composer(composer: &Composer, limits: &Limits) -> ValidationResult {
    let mut result = ValidationResult::new();

    for field in [Field::Header, Field::Body] {
        let max = match field {
            Field::Header => limits.header_max,
            Field::Body => limits.body_max,
        };
        validate_field(composer, field, max, &mut result);
    }

    validate_text("footer", composer.footer(), limits.footer_max, &mut result);
    validate_buttons(composer, limits, &mut result);

    result
}

/// Text plus its variable values
fn validate_field(composer: &Composer, field: Field, max: usize, result: &mut ValidationResult) {
    let doc = composer.document(field);
    let name = field.to_string();

    validate_text(&name, &doc.text, max, result);

    for (token, _) in scan_unnumbered(&doc.text) {
        result.add_warning(
            name.clone(),
            format!("'{token}' is not a numbered placeholder and will be sent as written"),
        );
    }

    for (index, slot) in doc.slots.iter().enumerate() {
        let path = format!("{field}_variables[{}]", index + 1);
        if !slot.is_bound() {
            result.add_error(
                path,
                format!("Variable {{{{{}}}}} needs a value", index + 1),
            );
        } else if char_len(&slot.value) > max {
            result.add_error(
                path,
                format!(
                    "Variable {{{{{}}}}} must be {max} characters or less",
                    index + 1
                ),
            );
        }
    }
}

/// Required text with a maximum length
fn validate_text(field: &str, text: &str, max: usize, result: &mut ValidationResult) {
    if text.trim().is_empty() {
        result.add_error(field, "This field is required".to_string());
    } else if char_len(text) > max {
        result.add_error(
            field,
            format!("{} must be {max} characters or less", capitalize(field)),
        );
    }
}

fn validate_buttons(composer: &Composer, limits: &Limits, result: &mut ValidationResult) {
    let buttons = composer.buttons().as_slice();

    if buttons.len() > limits.max_buttons {
        result.add_error(
            "buttons",
            format!(
                "Maximum buttons reached: {} of {} allowed",
                buttons.len(),
                limits.max_buttons
            ),
        );
    }

    for (index, button) in buttons.iter().enumerate() {
        validate_button(composer, index, button, result);
    }
}

fn validate_button(composer: &Composer, index: usize, button: &Button, result: &mut ValidationResult) {
    let path = format!("buttons[{}]", index + 1);
    let template_type = composer.template_type();

    if !template_type.allows(button.kind) {
        result.add_error(
            path.clone(),
            format!(
                "{} buttons are not available for {template_type} templates",
                button.kind
            ),
        );
    }

    if button.text.trim().is_empty() {
        result.add_error(path.clone(), "Button text is required".to_string());
    }

    let missing_target = match button.kind {
        ButtonKind::Url => is_blank(button.url.as_deref()).then_some("Website URL"),
        ButtonKind::Call => is_blank(button.phone.as_deref()).then_some("Phone number"),
        ButtonKind::OfferCode => None,
    };
    if let Some(what) = missing_target {
        result.add_error(path, format!("{what} is required"));
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::{DEFAULT_MAX_BUTTONS, TemplateType};
    use crate::engine::VariableSlot;
    use crate::template::TemplateDraft;

    fn valid_draft() -> TemplateDraft {
        TemplateDraft {
            header: "Hi {{1}}".to_string(),
            body: "Your code is {{1}}".to_string(),
            footer: "Thanks".to_string(),
            header_variables: vec![VariableSlot::new("Sam")],
            body_variables: vec![VariableSlot::new("1234")],
            ..TemplateDraft::default()
        }
    }

    fn validate(draft: TemplateDraft) -> ValidationResult {
        let composer = Composer::from_draft(draft, DEFAULT_MAX_BUTTONS);
        validate_composer(&composer, &Limits::default())
    }

    fn fields(result: &ValidationResult) -> Vec<&str> {
        result.diagnostics.iter().map(|d| d.field.as_str()).collect()
    }

    #[test]
    fn test_valid_template() {
        let result = validate(valid_draft());
        assert!(result.is_valid(), "{:?}", result.diagnostics);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_required_fields() {
        let result = validate(TemplateDraft::default());

        assert!(!result.is_valid());
        assert_eq!(fields(&result), vec!["header", "body", "footer"]);
        assert!(result.diagnostics[0].message.contains("required"));
    }

    #[test]
    fn test_length_limits_count_chars() {
        let mut draft = valid_draft();
        draft.header = format!("{} {{{{1}}}}", "é".repeat(50));
        assert!(validate(draft.clone()).is_valid());

        draft.header = format!("{} {{{{1}}}}", "é".repeat(60));
        let result = validate(draft);
        assert_eq!(fields(&result), vec!["header"]);
        assert_eq!(
            result.diagnostics[0].message,
            "Header must be 60 characters or less"
        );
    }

    #[test]
    fn test_unbound_variable_is_error() {
        let mut draft = valid_draft();
        draft.body = "Your code is {{1}}, valid until {{2}}".to_string();

        let result = validate(draft);
        assert_eq!(fields(&result), vec!["body_variables[2]"]);
        assert!(result.diagnostics[0].message.contains("{{2}}"));
    }

    #[test]
    fn test_variable_value_limited_by_field_max() {
        let mut draft = valid_draft();
        draft.header_variables = vec![VariableSlot::new("x".repeat(61))];

        let result = validate(draft);
        assert_eq!(fields(&result), vec!["header_variables[1]"]);
    }

    #[test]
    fn test_unnumbered_braces_warn() {
        let mut draft = valid_draft();
        draft.body = "Hi {{name}}, your code is {{1}}".to_string();

        let result = validate(draft);
        assert!(result.is_valid());
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].severity, Severity::Warning);
    }

    #[test]
    fn test_button_rules() {
        let mut draft = valid_draft();
        draft.template_type = Some(TemplateType::Utility);
        draft.buttons = vec![
            Button::new(ButtonKind::Url, "Open"),
            Button::call("", "515020716"),
            Button::offer_code("SAVE10"),
        ];

        let result = validate(draft);
        let messages: Vec<&str> = result.errors().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Website URL is required",
                "Button text is required",
                "Offer Code buttons are not available for utility templates",
            ]
        );
    }

    #[test]
    fn test_too_many_buttons() {
        let mut draft = valid_draft();
        draft.buttons = (0..7).map(|i| Button::offer_code(format!("C{i}"))).collect();

        let result = validate(draft);
        assert_eq!(fields(&result), vec!["buttons"]);
    }
}
