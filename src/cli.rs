//! Command-line argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Print the color palette of a VS Code theme file
#[derive(Parser, Debug)]
#[command(
    name = "theme-colors",
    version,
    about = "Print the color palette of a VS Code theme file"
)]
pub struct CliArgs {
    /// Path to VS Code theme file
    #[arg(value_name = "THEME_FILE")]
    pub theme_file: PathBuf,
}
