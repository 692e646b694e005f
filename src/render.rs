//! Swatch table rendering
//!
//! Draws a bordered, headerless three-column table (swatch, hex, rgb) with
//! square box-drawing characters:
//!
//! ```text
//! ┌────────────┬─────────┬──────────────────┐
//! │ ██████████ │ #000000 │ rgb(0,0,0)       │
//! │ ██████████ │ #ffffff │ rgb(255,255,255) │
//! └────────────┴─────────┴──────────────────┘
//! ```

use std::io::{self, Write};

use crossterm::style::{self, Stylize};
use unicode_width::UnicodeWidthStr;

use crate::color::Color;
use crate::config::PaletteConfig;
use crate::palette::SwatchRow;

const TOP_LEFT: char = '┌';
const TOP_RIGHT: char = '┐';
const BOTTOM_LEFT: char = '└';
const BOTTOM_RIGHT: char = '┘';
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';
const TOP_TEE: char = '┬';
const BOTTOM_TEE: char = '┴';

impl From<Color> for style::Color {
    fn from(color: Color) -> Self {
        style::Color::Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}

/// Writes palette rows as a table
pub struct TableRenderer {
    /// Swatch text repeated on every row
    swatch: String,
    /// Whether to style swatches with their color
    colored: bool,
}

impl TableRenderer {
    pub fn new(config: &PaletteConfig, colored: bool) -> Self {
        Self {
            swatch: config.swatch(),
            colored,
        }
    }

    /// Write the full table, borders included
    pub fn write_table<W: Write>(&self, out: &mut W, rows: &[SwatchRow]) -> io::Result<()> {
        let widths = self.column_widths(rows);

        write_border(out, &widths, TOP_LEFT, TOP_TEE, TOP_RIGHT)?;
        for row in rows {
            self.write_row(out, row, &widths)?;
        }
        write_border(out, &widths, BOTTOM_LEFT, BOTTOM_TEE, BOTTOM_RIGHT)?;

        Ok(())
    }

    /// Render the table to a string
    pub fn render(&self, rows: &[SwatchRow]) -> String {
        let mut buf = Vec::new();
        self.write_table(&mut buf, rows)
            .expect("writing into a Vec cannot fail");
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn column_widths(&self, rows: &[SwatchRow]) -> [usize; 3] {
        // The swatch column is always exactly one swatch wide
        let mut widths = [self.swatch.width(), 0, 0];
        for row in rows {
            widths[1] = widths[1].max(row.hex.width());
            widths[2] = widths[2].max(row.rgb.width());
        }
        widths.map(|w| w.max(1))
    }

    fn write_row<W: Write>(
        &self,
        out: &mut W,
        row: &SwatchRow,
        widths: &[usize; 3],
    ) -> io::Result<()> {
        write!(out, "{} ", VERTICAL)?;
        if self.colored {
            write!(out, "{}", self.swatch.as_str().with(row.color.into()))?;
        } else {
            write!(out, "{}", self.swatch)?;
        }
        write!(out, " {} ", VERTICAL)?;

        write_cell(out, &row.hex, widths[1])?;
        write!(out, " {} ", VERTICAL)?;
        write_cell(out, &row.rgb, widths[2])?;
        writeln!(out, " {}", VERTICAL)
    }
}

fn write_cell<W: Write>(out: &mut W, text: &str, width: usize) -> io::Result<()> {
    let pad = width.saturating_sub(text.width());
    write!(out, "{}{}", text, " ".repeat(pad))
}

fn write_border<W: Write>(
    out: &mut W,
    widths: &[usize],
    left: char,
    mid: char,
    right: char,
) -> io::Result<()> {
    let mut line = String::new();
    line.push(left);
    for (i, &w) in widths.iter().enumerate() {
        // +2 for the padding on each side
        line.extend(std::iter::repeat_n(HORIZONTAL, w + 2));
        if i < widths.len() - 1 {
            line.push(mid);
        }
    }
    line.push(right);
    writeln!(out, "{}", line)
}
