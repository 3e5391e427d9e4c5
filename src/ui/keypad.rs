//! Calculator keypad and display rendering.
//!
//! Renders the result display as a right-aligned line above a grid of
//! keys, one cell per option, `columns_per_row` cells per row.

use crate::calculator::{Catalog, Engine};

/// Width of a single key cell, borders excluded.
const CELL_WIDTH: usize = 5;

/// How the display line is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayStyle {
    /// Total line width; the value is right-aligned within it.
    pub width: usize,
    /// Prefix with `= ` like a result line.
    pub result_prefix: bool,
}

impl DisplayStyle {
    /// Style matching the keypad width for a catalog.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        let columns = catalog.columns_per_row().unwrap_or(1);
        Self {
            width: columns * (CELL_WIDTH + 1) + 1,
            result_prefix: false,
        }
    }
}

/// Render the formatted display text.
pub fn render_display(engine: &Engine, style: DisplayStyle) -> String {
    let text = if style.result_prefix {
        format!("= {}", engine.formatted_display_text())
    } else {
        engine.formatted_display_text().to_string()
    };
    let len = text.chars().count();
    let padding = style.width.saturating_sub(len);
    format!("{}{}", " ".repeat(padding), text)
}

/// Render the keypad as a text grid.
///
/// ```text
/// +-----+-----+-----+-----+
/// |  C  |  ±  |  %  |  ÷  |
/// +-----+-----+-----+-----+
/// ```
pub fn render_keypad(catalog: &Catalog) -> String {
    let columns = catalog.columns_per_row().unwrap_or(0);
    let separator = format!("+{}\n", format!("{}+", "-".repeat(CELL_WIDTH)).repeat(columns));

    let mut out = separator.clone();
    for row in catalog.rows() {
        out.push('|');
        for option in row {
            out.push_str(&center(&option.title, CELL_WIDTH));
            out.push('|');
        }
        out.push('\n');
        out.push_str(&separator);
    }
    out
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let total = width.saturating_sub(len);
    let left = total / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(total - left))
}
