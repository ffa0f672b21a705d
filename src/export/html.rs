//! HTML table export.

use std::fmt::Write as _;
use std::path::Path;

use reelscout_common::{Error, ResultRow, Result};

use super::{cells, COLUMNS};

/// Write `rows` as a single HTML `<table>` to `path`, overwriting it.
pub fn write_html(rows: &[ResultRow], path: &Path) -> Result<()> {
    std::fs::write(path, render_html(rows))
        .map_err(|e| Error::export(format!("{}: {}", path.display(), e)))
}

/// Render `rows` as an HTML table.
pub fn render_html(rows: &[ResultRow]) -> String {
    let mut out = String::new();
    out.push_str("<table border=\"1\" class=\"dataframe\">\n  <thead>\n    <tr style=\"text-align: right;\">\n");
    for header in COLUMNS {
        let _ = writeln!(out, "      <th>{}</th>", escape(header));
    }
    out.push_str("    </tr>\n  </thead>\n  <tbody>\n");

    for row in rows {
        out.push_str("    <tr>\n");
        for cell in cells(row) {
            let _ = writeln!(out, "      <td>{}</td>", escape(&cell));
        }
        out.push_str("    </tr>\n");
    }

    out.push_str("  </tbody>\n</table>\n");
    out
}

/// Minimal HTML text escaping.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
