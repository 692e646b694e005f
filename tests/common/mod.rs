//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

/// A trimmed-down dark theme in the shape VS Code writes them
pub const SAMPLE_THEME: &str = r##"{
    // Generated by the theme editor
    "name": "Sample Dark",
    "type": "dark",
    "colors": {
        "editor.background": "#1e1e1e",
        "editor.foreground": "#d4d4d4",
        "editor.selectionBackground": "#264f7880", // translucent
        "editorCursor.foreground": "#fff",
        "sideBar.background": "#1e1e1e",
    },
    "tokenColors": [
        {
            "name": "Comment",
            "scope": ["comment", "punctuation.definition.comment"],
            "settings": { "fontStyle": "italic", "foreground": "#6a9955" },
        },
        {
            "scope": "markup.bold",
            "settings": { "fontStyle": "bold" },
        },
        {
            "scope": "keyword",
            "settings": { "foreground": "#569CD6" },
        },
        { "settings": { "foreground": "#d4d4d4" } },
    ],
}
"##;

/// Write `contents` to a temporary `.json` file
pub fn theme_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
