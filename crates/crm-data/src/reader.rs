//! Spreadsheet loading for the customer dashboard.
//!
//! Opens the workbook with [`calamine`], takes its first worksheet and turns
//! every non-empty row below the header into a [`RawRow`] keyed by header
//! text.
//!
//! "First" means first in workbook order. The tab that was active when the
//! file was saved is not consulted, so customer data must live on the
//! leftmost sheet.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};
use crm_core::error::{CrmError, Result};
use crm_core::models::{CellValue, RawRow};
use tracing::debug;

// ── Public API ────────────────────────────────────────────────────────────────

/// Read every non-empty data row of the first worksheet.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    let sheet = open_first_sheet(path)?;
    let rows: Vec<RawRow> = sheet.data_rows().collect();
    debug!("Read {} data rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Read only the first non-empty data row of the first worksheet.
///
/// Returns `Ok(None)` when the sheet has a header but no data.
pub fn read_first_row(path: &Path) -> Result<Option<RawRow>> {
    let sheet = open_first_sheet(path)?;
    let row = sheet.data_rows().next();
    Ok(row)
}

// ── Sheet ─────────────────────────────────────────────────────────────────────

/// The first worksheet of a workbook with its header row resolved.
struct Sheet {
    /// Header text per column; `None` for blank header cells.
    headers: Vec<Option<String>>,
    range: Range<Data>,
    /// Index of the first data row within `range`.
    first_data_row: usize,
}

impl Sheet {
    fn data_rows(&self) -> impl Iterator<Item = RawRow> + '_ {
        self.range
            .rows()
            .skip(self.first_data_row)
            .filter(|row| row.iter().any(|cell| !matches!(cell, Data::Empty)))
            .map(|row| self.to_raw_row(row))
    }

    fn to_raw_row(&self, row: &[Data]) -> RawRow {
        self.headers
            .iter()
            .zip(row.iter())
            .filter_map(|(header, cell)| {
                header
                    .as_ref()
                    .map(|h| (h.clone(), to_cell_value(cell)))
            })
            .collect()
    }
}

fn open_first_sheet(path: &Path) -> Result<Sheet> {
    if !path.exists() {
        return Err(CrmError::FileNotFound(path.to_path_buf()));
    }

    let mut workbook = open_workbook_auto(path).map_err(|e| CrmError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| CrmError::NoWorksheet(path.to_path_buf()))?
        .map_err(|e| CrmError::Workbook {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    // calamine trims leading empty rows from the range. When the sheet's
    // first row is blank there is no usable header and every row is data.
    let (start_row, _) = range
        .start()
        .ok_or_else(|| CrmError::MissingHeader(path.to_path_buf()))?;

    if start_row > 0 {
        debug!(
            "Header row of {} is empty; columns will not match any alias",
            path.display()
        );
        return Ok(Sheet {
            headers: Vec::new(),
            range,
            first_data_row: 0,
        });
    }

    let headers = range
        .rows()
        .next()
        .ok_or_else(|| CrmError::MissingHeader(path.to_path_buf()))?
        .iter()
        .map(header_text)
        .collect();

    Ok(Sheet {
        headers,
        range,
        first_data_row: 1,
    })
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn header_text(cell: &Data) -> Option<String> {
    match to_cell_value(cell) {
        CellValue::Empty => None,
        value => Some(value.to_text()),
    }
}

fn to_cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(CellValue::DateTime)
            .unwrap_or_else(|| CellValue::Float(dt.as_f64())),
        // ISO dates/durations and cell errors (`#N/A`, ...) keep their text.
        other => CellValue::Text(other.to_string()),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{customer_workbook, write_workbook, Cell};
    use tempfile::TempDir;

    #[test]
    fn test_read_rows_skips_header_and_empty_rows() {
        let dir = TempDir::new().unwrap();
        let path = customer_workbook(&dir);

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0].get("Họ Tên"),
            Some(&CellValue::Text("Trần An".to_string()))
        );
        assert_eq!(
            rows[1].get("Họ Tên"),
            Some(&CellValue::Text("Nguyễn Phước Lộc".to_string()))
        );
    }

    #[test]
    fn test_read_rows_keeps_numeric_cells_typed() {
        let dir = TempDir::new().unwrap();
        let path = customer_workbook(&dir);

        let rows = read_rows(&path).unwrap();
        assert_eq!(
            rows[1].get("Tổng tiền mua"),
            Some(&CellValue::Float(6_000_000.0))
        );
    }

    #[test]
    fn test_read_rows_blank_cells_are_empty() {
        let dir = TempDir::new().unwrap();
        let path = customer_workbook(&dir);

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows[1].get("Email"), Some(&CellValue::Empty));
    }

    #[test]
    fn test_read_first_row() {
        let dir = TempDir::new().unwrap();
        let path = customer_workbook(&dir);

        let first = read_first_row(&path).unwrap().expect("a data row");
        assert_eq!(
            first.get("Mã KH"),
            Some(&CellValue::Text("KH001".to_string()))
        );
    }

    #[test]
    fn test_read_first_row_header_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("header_only.xlsx");
        write_workbook(&path, &[vec![Cell::Text("Mã KH"), Cell::Text("Họ Tên")]]);

        assert!(read_first_row(&path).unwrap().is_none());
        assert!(read_rows(&path).unwrap().is_empty());
    }

    #[test]
    fn test_blank_header_columns_are_dropped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gap.xlsx");
        write_workbook(
            &path,
            &[
                vec![Cell::Text("Mã KH"), Cell::Blank, Cell::Text("Email")],
                vec![Cell::Text("KH9"), Cell::Text("orphan"), Cell::Text("x@y.vn")],
            ],
        );

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 2);
        let headers: Vec<&str> = rows[0].headers().collect();
        assert_eq!(headers, vec!["Mã KH", "Email"]);
    }

    #[test]
    fn test_reads_leftmost_sheet_even_when_another_is_active() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("two_tabs.xlsx");

        let mut workbook = rust_xlsxwriter::Workbook::new();
        let customers = workbook.add_worksheet();
        customers.write_string(0, 0, "Mã KH").unwrap();
        customers.write_string(1, 0, "KH001").unwrap();
        let notes = workbook.add_worksheet();
        notes.write_string(0, 0, "Mã KH").unwrap();
        notes.write_string(1, 0, "NOTE").unwrap();
        notes.set_active(true);
        workbook.save(&path).unwrap();

        let first = read_first_row(&path).unwrap().expect("a data row");
        assert_eq!(first.get("Mã KH"), Some(&CellValue::Text("KH001".to_string())));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.xlsx");

        let err = read_rows(&path).unwrap_err();
        assert!(matches!(err, CrmError::FileNotFound(_)));
    }

    #[test]
    fn test_garbage_file_is_workbook_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, b"this is not a zip archive").unwrap();

        let err = read_rows(&path).unwrap_err();
        assert!(matches!(err, CrmError::Workbook { .. }));
    }

    #[test]
    fn test_to_cell_value_conversions() {
        assert_eq!(to_cell_value(&Data::Empty), CellValue::Empty);
        assert_eq!(to_cell_value(&Data::Int(4)), CellValue::Int(4));
        assert_eq!(to_cell_value(&Data::Bool(true)), CellValue::Bool(true));
        assert_eq!(
            to_cell_value(&Data::String("Huế".to_string())),
            CellValue::Text("Huế".to_string())
        );
    }

    #[test]
    fn test_header_text_numeric_header() {
        assert_eq!(header_text(&Data::Float(2025.0)), Some("2025".to_string()));
        assert_eq!(header_text(&Data::Empty), None);
    }
}
