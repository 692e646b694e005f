//! User preferences for palette output
//!
//! Read from `~/.config/theme-colors/config.yaml`. The file is optional and
//! every field has a default.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

pub const DEFAULT_SWATCH_WIDTH: usize = 10;
pub const DEFAULT_SWATCH_GLYPH: char = '█';

/// When to emit 24-bit color escapes for swatches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolve against whether the output stream is a terminal
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Palette output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Number of glyphs in each swatch
    pub swatch_width: usize,
    /// Glyph repeated to draw a swatch, one terminal column wide
    pub swatch_glyph: char,
    pub color: ColorChoice,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            swatch_width: DEFAULT_SWATCH_WIDTH,
            swatch_glyph: DEFAULT_SWATCH_GLYPH,
            color: ColorChoice::default(),
        }
    }
}

impl PaletteConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse config from YAML, clamping out-of-range values
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        // An empty file deserializes as null rather than an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Ok(config.clamped())
    }

    fn clamped(mut self) -> Self {
        if self.swatch_width == 0 {
            tracing::warn!("swatch_width must be at least 1, using 1");
            self.swatch_width = 1;
        }
        if self.swatch_glyph.width() != Some(1) {
            tracing::warn!(
                "swatch_glyph {:?} is not one column wide, using {:?}",
                self.swatch_glyph,
                DEFAULT_SWATCH_GLYPH
            );
            self.swatch_glyph = DEFAULT_SWATCH_GLYPH;
        }
        self
    }

    /// The swatch text drawn for every row
    pub fn swatch(&self) -> String {
        self.swatch_glyph.to_string().repeat(self.swatch_width)
    }
}
