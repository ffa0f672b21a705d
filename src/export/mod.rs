//! Export of assembled rows.
//!
//! All renderings share one fixed column order ([`COLUMNS`]) and one cell
//! mapping ([`cells`]), so the HTML file, the spreadsheet and the terminal
//! table always agree. Absent values render as empty cells.

pub mod html;
pub mod table;
pub mod xlsx;

use std::path::{Path, PathBuf};

use reelscout_common::{ResultRow, Result, TitleSource};
use tracing::info;

/// Header row, in output order.
pub const COLUMNS: [&str; 8] = [
    "Movie Name",
    "Release Year",
    "IMDb ID",
    "TMDb ID",
    "Embed URL",
    "Embed Title",
    "Comparison URL",
    "Comparison Title",
];

/// Index of the one numeric column.
pub(crate) const YEAR_COLUMN: usize = 1;

/// Cell text for each column of `row`.
pub fn cells(row: &ResultRow) -> [String; 8] {
    let opt = |v: Option<&str>| v.unwrap_or_default().to_string();
    [
        row.query.title.clone(),
        row.query.year.to_string(),
        opt(row.film_db.external_id.as_deref()),
        opt(row.metadata.external_id.as_deref()),
        opt(row.embed.url.as_deref()),
        opt(row.title_for(TitleSource::Embed)),
        opt(row.query.comparison_url.as_deref()),
        opt(row.title_for(TitleSource::Comparison)),
    ]
}

/// Paths written by [`write_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub html: PathBuf,
    pub xlsx: PathBuf,
}

impl ExportPaths {
    /// `<dir>/<stem>.html` and `<dir>/<stem>.xlsx`.
    pub fn new(dir: &Path, stem: &str) -> Self {
        Self {
            html: dir.join(format!("{stem}.html")),
            xlsx: dir.join(format!("{stem}.xlsx")),
        }
    }
}

/// Write both export files, replacing any previous output.
pub fn write_all(rows: &[ResultRow], dir: &Path, stem: &str) -> Result<ExportPaths> {
    std::fs::create_dir_all(dir)?;
    let paths = ExportPaths::new(dir, stem);

    html::write_html(rows, &paths.html)?;
    xlsx::write_xlsx(rows, &paths.xlsx)?;

    info!(
        rows = rows.len(),
        html = %paths.html.display(),
        xlsx = %paths.xlsx.display(),
        "Exported results"
    );
    Ok(paths)
}
