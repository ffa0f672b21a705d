//! CSV input reader.
//!
//! Each data row becomes one [`SearchQuery`]. The title and year columns are
//! required and located by header name; the comparison-URL column is
//! optional. Any structural problem aborts the whole read so that no lookup
//! runs against a half-parsed file.

use std::io::Read;
use std::path::Path;

use reelscout_common::{Error, Result, SearchQuery};
use tracing::debug;

use crate::config::InputConfig;

/// Read queries from a CSV file on disk.
pub fn read_queries_from_path(path: &Path, columns: &InputConfig) -> Result<Vec<SearchQuery>> {
    let file = std::fs::File::open(path)?;
    read_queries(file, columns).map_err(|e| match e {
        Error::InvalidInput(msg) => Error::invalid_input(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

/// Read queries from any CSV source with a header row.
pub fn read_queries<R: Read>(reader: R, columns: &InputConfig) -> Result<Vec<SearchQuery>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| Error::invalid_input(format!("unreadable header row: {e}")))?
        .clone();

    let column = |name: &str| headers.iter().position(|h| h == name);
    let title_idx = column(&columns.title_column).ok_or_else(|| {
        Error::invalid_input(format!("missing required column '{}'", columns.title_column))
    })?;
    let year_idx = column(&columns.year_column).ok_or_else(|| {
        Error::invalid_input(format!("missing required column '{}'", columns.year_column))
    })?;
    let comparison_idx = column(&columns.comparison_column);

    let mut queries = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        // header is line 1
        let line = i + 2;
        let record =
            record.map_err(|e| Error::invalid_input(format!("line {line}: unreadable row: {e}")))?;

        let title = record.get(title_idx).unwrap_or_default().to_string();
        let raw_year = record.get(year_idx).unwrap_or_default();
        let year = parse_year(raw_year).ok_or_else(|| {
            Error::invalid_input(format!(
                "line {line}: '{}' is not an integer year",
                raw_year
            ))
        })?;

        let mut query = SearchQuery::new(title, year);
        if let Some(url) = comparison_idx
            .and_then(|idx| record.get(idx))
            .filter(|url| !url.is_empty())
        {
            query = query.with_comparison_url(url);
        }
        queries.push(query);
    }

    debug!(rows = queries.len(), "Read input rows");
    Ok(queries)
}

/// Accept `2010` and the spreadsheet-exported `2010.0`.
fn parse_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if let Ok(year) = raw.parse::<i32>() {
        return Some(year);
    }
    let (whole, frac) = raw.split_once('.')?;
    if frac.bytes().all(|b| b == b'0') {
        whole.parse::<i32>().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn read(csv: &str) -> Result<Vec<SearchQuery>> {
        read_queries(csv.as_bytes(), &InputConfig::default())
    }

    #[test]
    fn reads_rows_in_order() {
        let rows = read("Movie Name,Release Year\nInception,2010\nHeat,1995\nInception,2010\n").unwrap();
        assert_eq!(
            rows,
            vec![
                SearchQuery::new("Inception", 2010),
                SearchQuery::new("Heat", 1995),
                SearchQuery::new("Inception", 2010),
            ]
        );
    }

    #[test]
    fn extra_columns_and_order_do_not_matter() {
        let rows = read("Notes,Release Year,Movie Name\nfav,2010,Inception\n").unwrap();
        assert_eq!(rows, vec![SearchQuery::new("Inception", 2010)]);
    }

    #[test]
    fn quoted_titles_with_commas() {
        let rows = read("Movie Name,Release Year\n\"Crouching Tiger, Hidden Dragon\",2000\n").unwrap();
        assert_eq!(rows[0].title, "Crouching Tiger, Hidden Dragon");
    }

    #[test]
    fn comparison_column_is_optional() {
        let rows = read(
            "Movie Name,Release Year,Comparison URL\nInception,2010,https://example.com/a\nHeat,1995,\n",
        )
        .unwrap();
        assert_eq!(rows[0].comparison_url.as_deref(), Some("https://example.com/a"));
        assert!(rows[1].comparison_url.is_none());
    }

    #[test]
    fn float_years_are_accepted() {
        let rows = read("Movie Name,Release Year\nInception,2010.0\n").unwrap();
        assert_eq!(rows[0].year, 2010);
    }

    #[test]
    fn missing_year_column_is_rejected() {
        let err = read("Movie Name,Year\nInception,2010\n").unwrap_err();
        assert_matches!(err, Error::InvalidInput(msg) if msg.contains("Release Year"));
    }

    #[test]
    fn bad_year_is_rejected_with_line() {
        let err = read("Movie Name,Release Year\nInception,2010\nHeat,soon\n").unwrap_err();
        assert_matches!(err, Error::InvalidInput(msg) if msg.contains("line 3"));
    }

    #[test]
    fn header_only_file_yields_no_rows() {
        assert!(read("Movie Name,Release Year\n").unwrap().is_empty());
    }

    #[test]
    fn custom_column_names() {
        let columns = InputConfig {
            title_column: "title".into(),
            year_column: "year".into(),
            comparison_column: "compare".into(),
        };
        let rows = read_queries("title,year\nHeat,1995\n".as_bytes(), &columns).unwrap();
        assert_eq!(rows, vec![SearchQuery::new("Heat", 1995)]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_queries_from_path(Path::new("/nonexistent/movies.csv"), &InputConfig::default())
            .unwrap_err();
        assert_matches!(err, Error::Io(_));
    }
}
