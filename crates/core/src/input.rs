//! Reading `{URL, URL_ID}` record tables.
//!
//! Records come from a spreadsheet (first worksheet) or a CSV file, in
//! source row order. The header row must carry `URL` and `URL_ID` columns.

use std::path::Path;

use crate::{LexometerError, Result};

/// Column holding the page address.
pub const URL_COLUMN: &str = "URL";
/// Column holding the identifier used as the output file stem.
pub const URL_ID_COLUMN: &str = "URL_ID";

/// One page to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub url: String,
    pub url_id: String,
}

/// Reads records from `path`, choosing the reader by file extension.
pub fn read_records(path: &Path) -> Result<Vec<UrlRecord>> {
    if !path.exists() {
        return Err(LexometerError::FileNotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => read_csv_records(path),
        #[cfg(feature = "xlsx")]
        "xlsx" | "xlsm" | "xls" | "ods" => read_sheet_records(path),
        other => Err(LexometerError::InputError(format!(
            "unsupported input format `{other}` for {}",
            path.display()
        ))),
    }
}

/// Reads records from CSV data with a header row.
pub fn read_csv_records(path: &Path) -> Result<Vec<UrlRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let (url_idx, id_idx) = locate_columns(&headers)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push((
            record.get(url_idx).unwrap_or_default().to_string(),
            record.get(id_idx).unwrap_or_default().to_string(),
        ));
    }

    Ok(collect_records(rows))
}

/// Reads records from the first worksheet of a workbook.
#[cfg(feature = "xlsx")]
pub fn read_sheet_records(path: &Path) -> Result<Vec<UrlRecord>> {
    use calamine::{Reader, open_workbook_auto};

    let mut workbook = open_workbook_auto(path).map_err(|e| LexometerError::InputError(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LexometerError::InputError(format!("{} has no worksheets", path.display())))?
        .map_err(|e| LexometerError::InputError(e.to_string()))?;

    let mut rows_iter = range.rows();
    let headers: Vec<String> = match rows_iter.next() {
        Some(row) => row.iter().map(cell_to_string).collect(),
        None => return Err(LexometerError::MissingColumn(URL_COLUMN.to_string())),
    };
    let (url_idx, id_idx) = locate_columns(&headers)?;

    let rows = rows_iter
        .map(|row| {
            let cell = |idx: usize| row.get(idx).map(cell_to_string).unwrap_or_default();
            (cell(url_idx), cell(id_idx))
        })
        .collect();

    Ok(collect_records(rows))
}

#[cfg(feature = "xlsx")]
fn cell_to_string(cell: &calamine::Data) -> String {
    use calamine::Data;

    match cell {
        Data::String(s) => s.clone(),
        Data::Float(f) => format_number(*f),
        Data::Int(i) => i.to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Integral floats lose their fractional part, so `37.0` names `37.txt`.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 { format!("{}", value as i64) } else { value.to_string() }
}

fn locate_columns(headers: &[String]) -> Result<(usize, usize)> {
    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| LexometerError::MissingColumn(name.to_string()))
    };
    Ok((find(URL_COLUMN)?, find(URL_ID_COLUMN)?))
}

fn collect_records(rows: Vec<(String, String)>) -> Vec<UrlRecord> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(idx, (url, url_id))| {
            let url = url.trim().to_string();
            if url.is_empty() {
                tracing::warn!(row = idx + 2, "skipping row with empty URL");
                return None;
            }
            Some(UrlRecord { url, url_id: url_id.trim().to_string() })
        })
        .collect()
}
