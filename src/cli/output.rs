//! Output formatting for previews and diagnostics

use std::io::Write;

use anyhow::Result;

use crate::composer::Preview;
use crate::config::OutputFormat;
use crate::validation::{Severity, ValidationResult};

pub fn write_preview<W: Write>(out: &mut W, preview: &Preview, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => write!(out, "{preview}")?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(preview)?)?,
    }
    Ok(())
}

pub fn write_diagnostics<W: Write>(
    out: &mut W,
    result: &ValidationResult,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(result)?)?,
        OutputFormat::Text => {
            if result.diagnostics.is_empty() {
                writeln!(out, "ok: no problems found")?;
            }
            for diagnostic in &result.diagnostics {
                let level = match diagnostic.severity {
                    Severity::Error => "error",
                    Severity::Warning => "warning",
                };
                writeln!(out, "{level}: {}: {}", diagnostic.field, diagnostic.message)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_diagnostics() {
        let mut result = ValidationResult::new();
        result.add_error("body", "This field is required".to_string());

        let mut out = Vec::new();
        write_diagnostics(&mut out, &result, OutputFormat::Text).expect("write");

        assert_eq!(
            String::from_utf8(out).expect("utf-8"),
            "error: body: This field is required\n"
        );
    }

    #[test]
    fn test_json_preview() {
        let preview = Preview {
            header: "Hi Sam".to_string(),
            body: "Body".to_string(),
            footer: String::new(),
            buttons: Vec::new(),
        };

        let mut out = Vec::new();
        write_preview(&mut out, &preview, OutputFormat::Json).expect("write");

        let value: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
        assert_eq!(value["header"], "Hi Sam");
    }
}
