//! theme-colors - print the color palette of a VS Code theme
//!
//! The pipeline is linear: load the relaxed-JSON theme, extract colors from
//! `colors` and `tokenColors`, strip alpha, dedupe, convert to RGB, sort by
//! the `rgb(...)` label and render a swatch table.

pub mod cli;
pub mod color;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod palette;
pub mod render;
pub mod theme;
pub mod tracing;

// Re-export commonly used types
pub use color::{format_rgb, hex_to_rgb, Color, Rgb};
pub use config::{ColorChoice, PaletteConfig};
pub use error::PaletteError;
pub use palette::{palette_rows, SwatchRow};
pub use render::TableRenderer;
pub use theme::{extract_colors, load_theme_file, parse_theme, ThemeDocument};
