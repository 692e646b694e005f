//! VS Code theme loading and color extraction
//!
//! Theme files are relaxed JSON: comments and trailing commas are common, so
//! they are parsed with `json5` into a generic `serde_json` mapping. Only two
//! sections are read:
//!
//! - `colors`: workbench colors, a mapping of name to color string
//! - `tokenColors`: syntax rules, each optionally carrying `settings.foreground`
//!
//! Both sections are optional. Anything missing contributes no colors.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{PaletteError, Result};

/// A parsed theme file: the top-level JSON object
pub type ThemeDocument = Map<String, Value>;

/// Load and parse a theme file from disk
pub fn load_theme_file(path: &Path) -> Result<ThemeDocument> {
    let content = std::fs::read_to_string(path).map_err(|source| PaletteError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Read {} bytes from {}", content.len(), path.display());

    parse_theme(&content).map_err(|message| PaletteError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

/// Parse theme source text
///
/// Accepts anything JSON5 accepts. The top level must be an object.
pub fn parse_theme(source: &str) -> Result<ThemeDocument, String> {
    // Editors on Windows sometimes save themes with a BOM
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    match json5::from_str::<Value>(source).map_err(|e| e.to_string())? {
        Value::Object(map) => Ok(map),
        other => Err(format!(
            "expected an object at the top level, found {}",
            value_kind(&other)
        )),
    }
}

/// Collect raw color strings from `colors` and `tokenColors`
///
/// Workbench colors come first, then token foregrounds in rule order. Missing
/// sections, rules without `settings`, and settings without `foreground` are
/// skipped. A color value that is present but not a string is an error.
pub fn extract_colors(theme: &ThemeDocument) -> Result<Vec<String>> {
    let mut colors = Vec::new();

    match theme.get("colors") {
        Some(Value::Object(workbench)) => {
            for (name, value) in workbench {
                tracing::trace!("colors.{} = {}", name, value);
                colors.push(color_string(value)?);
            }
        }
        Some(other) => {
            tracing::debug!("Ignoring `colors`: expected object, found {}", value_kind(other))
        }
        None => tracing::trace!("Theme has no `colors` section"),
    }
    let workbench_count = colors.len();

    match theme.get("tokenColors") {
        Some(Value::Array(rules)) => {
            for (index, rule) in rules.iter().enumerate() {
                match rule.get("settings") {
                    Some(Value::Object(settings)) => match settings.get("foreground") {
                        Some(foreground) => colors.push(color_string(foreground)?),
                        None => tracing::trace!("tokenColors[{}] has no foreground", index),
                    },
                    Some(other) => tracing::debug!(
                        "Ignoring tokenColors[{}].settings: expected object, found {}",
                        index,
                        value_kind(other)
                    ),
                    None => tracing::trace!("tokenColors[{}] has no settings", index),
                }
            }
        }
        Some(other) => tracing::debug!(
            "Ignoring `tokenColors`: expected array, found {}",
            value_kind(other)
        ),
        None => tracing::trace!("Theme has no `tokenColors` section"),
    }

    tracing::debug!(
        "Extracted {} colors ({} workbench, {} token)",
        colors.len(),
        workbench_count,
        colors.len() - workbench_count
    );
    Ok(colors)
}

fn color_string(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(PaletteError::invalid_color(other.to_string())),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(source: &str) -> Result<Vec<String>> {
        extract_colors(&parse_theme(source).unwrap())
    }

    #[test]
    fn test_parse_allows_comments_and_trailing_commas() {
        let source = r##"{
            // line comment
            "colors": {
                /* block comment */
                "editor.background": "#1e1e1e",
            },
        }"##;
        let theme = parse_theme(source).unwrap();
        assert!(theme.contains_key("colors"));
    }

    #[test]
    fn test_parse_strips_bom() {
        assert!(parse_theme("\u{feff}{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_non_object_root() {
        let err = parse_theme(r##"["#fff"]"##).unwrap_err();
        assert!(err.contains("array"), "unexpected message: {}", err);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_theme(r#"{"colors": {"#).is_err());
    }

    #[test]
    fn test_empty_theme_has_no_colors() {
        assert!(extract("{}").unwrap().is_empty());
    }

    #[test]
    fn test_extracts_workbench_then_token_colors() {
        let colors = extract(
            r##"{
                "colors": {"editor.background": "#000000"},
                "tokenColors": [{"scope": "comment", "settings": {"foreground": "#ffffff"}}]
            }"##,
        )
        .unwrap();
        assert_eq!(colors, vec!["#000000", "#ffffff"]);
    }

    #[test]
    fn test_workbench_colors_keep_document_order() {
        let colors = extract(
            r##"{"colors": {"z": "#000000", "a": "#ffffff", "m": "#123456"}}"##,
        )
        .unwrap();
        assert_eq!(colors, vec!["#000000", "#ffffff", "#123456"]);
    }

    #[test]
    fn test_first_malformed_color_in_document_order_is_reported() {
        let err = extract(r##"{"colors": {"z": "#12", "a": "#3"}}"##).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidColor { ref value } if value == "#12"));
    }

    #[test]
    fn test_rules_without_foreground_are_skipped() {
        let colors = extract(
            r##"{"tokenColors": [
                {"settings": {}},
                {"scope": "keyword"},
                {"settings": {"fontStyle": "italic"}},
                {"settings": {"foreground": "#00ff00"}}
            ]}"##,
        )
        .unwrap();
        assert_eq!(colors, vec!["#00ff00"]);
    }

    #[test]
    fn test_wrong_section_types_are_ignored() {
        let colors = extract(r#"{"colors": [], "tokenColors": {"settings": {}}}"#).unwrap();
        assert!(colors.is_empty());
    }

    #[test]
    fn test_non_string_color_is_invalid() {
        let err = extract(r#"{"colors": {"editor.background": true}}"#).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidColor { ref value } if value == "true"));
    }
}
