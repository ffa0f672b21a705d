//! Spreadsheet export via `rust_xlsxwriter`.

use std::path::Path;

use reelscout_common::{Error, ResultRow, Result};
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Format, Workbook, XlsxError};

use super::{cells, COLUMNS, YEAR_COLUMN};

/// Write `rows` to a single-sheet workbook at `path`, overwriting it.
pub fn write_xlsx(rows: &[ResultRow], path: &Path) -> Result<()> {
    build_workbook(rows)
        .and_then(|mut workbook| workbook.save(path))
        .map_err(|e| Error::export(format!("{}: {}", path.display(), e)))
}

fn build_workbook(rows: &[ResultRow]) -> std::result::Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();

    // Pin the creation time so identical rows give identical files.
    let created = ExcelDateTime::from_ymd(2000, 1, 1)?;
    workbook.set_properties(&DocProperties::new().set_creation_datetime(&created));

    let bold = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Results")?;

    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &bold)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, value) in cells(row).iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            if col == YEAR_COLUMN {
                worksheet.write_number(r, col as u16, f64::from(row.query.year))?;
            } else {
                worksheet.write_string(r, col as u16, value)?;
            }
        }
    }

    Ok(workbook)
}
