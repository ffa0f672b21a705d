//! Plain-text table for terminal display.

use reelscout_common::ResultRow;

use super::{cells, COLUMNS};

/// Cells longer than this are shortened with an ellipsis.
const MAX_CELL_WIDTH: usize = 48;

/// Render `rows` as an aligned text table with a header and separator line.
pub fn render_table(rows: &[ResultRow]) -> String {
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| cells(row).iter().map(|c| truncate(c)).collect())
        .collect();

    let mut widths: Vec<usize> = COLUMNS.iter().map(|h| h.chars().count()).collect();
    for row in &body {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, COLUMNS.iter().map(|h| h.to_string()), &widths);
    push_line(&mut out, widths.iter().map(|w| "-".repeat(*w)), &widths);
    for row in body {
        push_line(&mut out, row.into_iter(), &widths);
    }
    out
}

fn push_line(out: &mut String, cells: impl Iterator<Item = String>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, w)| format!("{cell:<w$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

fn truncate(cell: &str) -> String {
    if cell.chars().count() <= MAX_CELL_WIDTH {
        return cell.to_string();
    }
    let mut short: String = cell.chars().take(MAX_CELL_WIDTH - 1).collect();
    short.push('…');
    short
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::fixtures;

    #[test]
    fn header_separator_and_rows() {
        let table = render_table(&[fixtures::inception(), fixtures::unknown()]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Movie Name"));
        assert!(lines[1].starts_with("---"));
        assert!(lines[2].contains("tt1375666"));
        assert!(lines[3].starts_with("Unknown Obscure Film XYZ"));
    }

    #[test]
    fn columns_are_aligned() {
        let table = render_table(&[fixtures::inception(), fixtures::unknown()]);
        let lines: Vec<&str> = table.lines().collect();
        let year_col = lines[0].find("Release Year").unwrap();
        assert_eq!(&lines[2][year_col..year_col + 4], "2010");
        assert_eq!(&lines[3][year_col..year_col + 4], "1899");
    }

    #[test]
    fn long_cells_are_truncated() {
        let long = "x".repeat(100);
        let short = truncate(&long);
        assert_eq!(short.chars().count(), MAX_CELL_WIDTH);
        assert!(short.ends_with('…'));
    }
}
