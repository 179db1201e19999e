//! Draft Loading
//!
//! Reads template drafts from disk and provides the bundled example.

use std::path::Path;

use anyhow::{Context, Result};

use super::schema::TemplateDraft;
use crate::composer::Button;
use crate::engine::VariableSlot;

/// Parse draft content from a TOML string
pub fn parse_draft(content: &str, source_path: Option<&Path>) -> Result<TemplateDraft> {
    toml::from_str(content).with_context(|| match source_path {
        Some(path) => format!("Failed to parse template draft: {}", path.display()),
        None => "Failed to parse built-in template draft".to_string(),
    })
}

/// Load a draft file
pub fn load_draft(path: &Path) -> Result<TemplateDraft> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read template draft: {}", path.display()))?;
    let draft = parse_draft(&content, Some(path))?;
    log::info!("Loaded template draft {}", path.display());
    Ok(draft)
}

/// Load a draft file without blocking the runtime
pub async fn load_draft_async(path: &Path) -> Result<TemplateDraft> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read template draft: {}", path.display()))?;
    parse_draft(&content, Some(path))
}

/// The bundled order-update example
pub fn embedded_example() -> TemplateDraft {
    let embedded_toml = include_str!("../../resources/templates/order_update.toml");

    match parse_draft(embedded_toml, None) {
        Ok(draft) => draft,
        Err(e) => {
            log::warn!("{e:#}. Using minimal fallback example.");
            minimal_example()
        }
    }
}

/// Fallback in case the embedded TOML fails to parse
fn minimal_example() -> TemplateDraft {
    TemplateDraft {
        header: "Good news {{1}}!".to_string(),
        body: "Your order #{{1}} is on its way.".to_string(),
        footer: "Track your order".to_string(),
        header_variables: vec![VariableSlot::new("John")],
        body_variables: vec![VariableSlot::new("ORD-12345")],
        buttons: vec![Button::url("Track Order", "https://tracking.example.com")],
        ..TemplateDraft::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_example_parses() {
        let embedded_toml = include_str!("../../resources/templates/order_update.toml");
        let draft = parse_draft(embedded_toml, None).expect("embedded example is valid");

        assert_eq!(draft.header, "Good news {{1}}!");
        assert_eq!(draft.body_variables.len(), 4);
        assert_eq!(draft.buttons.len(), 1);
    }

    #[test]
    fn test_load_draft_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "header = \"Hi {{{{1}}}}\"").expect("write");

        let draft = load_draft(file.path()).expect("load");
        assert_eq!(draft.header, "Hi {{1}}");
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse_draft("header = ", Some(Path::new("broken.toml"))).unwrap_err();
        assert!(format!("{err}").contains("broken.toml"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_draft(Path::new("/nonexistent/draft.toml")).unwrap_err();
        assert!(format!("{err}").contains("Failed to read template draft"));
    }
}
