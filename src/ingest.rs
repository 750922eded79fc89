//! CSV ingest: read a seller export into a rectangular in-memory table.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, TkscoutError};

/// A rectangular table: one header row plus data rows.
///
/// Rows may be ragged (exports often truncate trailing empty cells); access
/// goes through [`SheetData::cell`], which treats missing cells as absent
/// rather than panicking.
#[derive(Debug, Clone)]
pub struct SheetData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetData {
    /// Read a CSV file from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<SheetData> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Read CSV from any reader. Ragged rows are tolerated.
    pub fn from_reader<R: Read>(reader: R) -> Result<SheetData> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(|c| c.to_string()).collect());
        }

        if rows.is_empty() {
            return Err(TkscoutError::EmptySheet);
        }

        Ok(SheetData { headers, rows })
    }

    /// Fetch one cell; `None` when the row is too short or the cell empty.
    pub fn cell(&self, row: &[String], idx: usize) -> Option<String> {
        row.get(idx)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// Fetch a data row by zero-based index.
    pub fn row(&self, idx: usize) -> Result<&Vec<String>> {
        self.rows
            .get(idx)
            .ok_or(TkscoutError::RowOutOfRange(idx, self.rows.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
Product Name,Price,Sold Count
A widget,$10,5
B gadget,¥20,3k
";

    #[test]
    fn test_from_reader() {
        let sheet = SheetData::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(sheet.headers, vec!["Product Name", "Price", "Sold Count"]);
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[1][2], "3k");
    }

    #[test]
    fn test_ragged_rows_tolerated() {
        let csv = "a,b,c\nx,1\ny,2,3,4\n";
        let sheet = SheetData::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.cell(&sheet.rows[0], 2), None);
        assert_eq!(sheet.cell(&sheet.rows[1], 2), Some("3".to_string()));
    }

    #[test]
    fn test_empty_sheet_is_an_error() {
        let csv = "a,b,c\n";
        let err = SheetData::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, TkscoutError::EmptySheet));
    }

    #[test]
    fn test_row_out_of_range() {
        let sheet = SheetData::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        assert!(sheet.row(1).is_ok());
        let err = sheet.row(5).unwrap_err();
        assert!(matches!(err, TkscoutError::RowOutOfRange(5, 2)));
    }

    #[test]
    fn test_empty_cells_are_none() {
        let csv = "a,b\nx,\n";
        let sheet = SheetData::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(sheet.cell(&sheet.rows[0], 1), None);
    }
}
