use std::io::{self, BufWriter, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::Parser;

use theme_colors::cli::CliArgs;
use theme_colors::{load_theme_file, palette_rows, PaletteConfig, TableRenderer};

fn main() -> Result<()> {
    let args = CliArgs::parse();

    theme_colors::tracing::init();

    let config = PaletteConfig::load();
    tracing::debug!("Using config: {:?}", config);

    let theme = load_theme_file(&args.theme_file)?;
    let rows = palette_rows(&theme)
        .with_context(|| format!("Failed to read colors from {}", args.theme_file.display()))?;
    tracing::info!(
        "Printing {} colors from {}",
        rows.len(),
        args.theme_file.display()
    );

    let stdout = io::stdout();
    let colored = config.color.enabled(stdout.is_terminal());
    let renderer = TableRenderer::new(&config, colored);

    let mut out = BufWriter::new(stdout.lock());
    renderer.write_table(&mut out, &rows)?;
    out.flush()?;

    Ok(())
}
