//! Palette construction: alpha stripping, deduplication, rows and ordering

use std::collections::BTreeSet;

use crate::color::{format_rgb, Color};
use crate::error::Result;
use crate::theme::{extract_colors, ThemeDocument};

/// One table row: a unique color with its hex and `rgb(...)` labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchRow {
    /// Parsed color, used to style the swatch
    pub color: Color,
    /// Hex string as it appeared after normalization
    pub hex: String,
    /// `rgb(R,G,B)` label, also the sort key
    pub rgb: String,
}

impl SwatchRow {
    /// Build a row from a hex color string
    pub fn from_hex(hex: &str) -> Result<Self> {
        let color = Color::from_hex(hex)?;
        Ok(Self {
            color,
            hex: hex.to_string(),
            rgb: format_rgb(color.to_rgb()),
        })
    }
}

/// Strip the alpha digits from a color string
///
/// `#RRGGBBAA` becomes `#RRGGBB` and `#RGBA` becomes `#RGB`. Every other
/// length passes through untouched; validation happens on conversion.
pub fn normalize(color: &str) -> String {
    match color.chars().count() {
        9 => color.chars().take(7).collect(),
        5 => color.chars().take(4).collect(),
        _ => color.to_string(),
    }
}

/// Strip alpha from every color, preserving order
pub fn drop_alpha<S: AsRef<str>>(colors: &[S]) -> Vec<String> {
    colors.iter().map(|c| normalize(c.as_ref())).collect()
}

/// Collapse duplicate color strings
pub fn dedupe(colors: Vec<String>) -> BTreeSet<String> {
    colors.into_iter().collect()
}

/// Build one row per unique color
///
/// Fails on the first color that is not valid hex, so callers never see a
/// partial set of rows.
pub fn build_rows<'a>(colors: impl IntoIterator<Item = &'a String>) -> Result<Vec<SwatchRow>> {
    colors
        .into_iter()
        .map(|hex| SwatchRow::from_hex(hex))
        .collect()
}

/// Order rows by their `rgb(...)` label
///
/// This is a plain string comparison, so `rgb(100,0,0)` sorts before
/// `rgb(99,0,0)`. The sort is stable.
pub fn sort_rows(rows: &mut [SwatchRow]) {
    rows.sort_by(|a, b| a.rgb.cmp(&b.rgb));
}

/// Run the whole pipeline over a parsed theme: extract, normalize, dedupe,
/// convert and sort
pub fn palette_rows(theme: &ThemeDocument) -> Result<Vec<SwatchRow>> {
    let raw = extract_colors(theme)?;
    let unique = dedupe(drop_alpha(&raw));
    tracing::debug!("{} raw colors, {} unique", raw.len(), unique.len());

    let mut rows = build_rows(&unique)?;
    sort_rows(&mut rows);
    Ok(rows)
}
