//! CSV loading into a labeled in-memory table.
//!
//! The pipeline selects features by column name, so the table keeps the full
//! header instead of deserializing into a fixed record type.

use super::error::{DataError, DataResult};
use ndarray::{Array1, Array2};
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Tabular data with named columns.
///
/// Cells are `f64`; a missing cell is stored as NaN. An empty cell or one of
/// `NA`, `NaN`, `.` counts as missing, anything else unparsable is an error.
#[derive(Debug, Clone)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl DataTable {
    /// Create a table from parts. Every row must match the header width.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Self {
        for row in &rows {
            assert_eq!(row.len(), columns.len(), "row width must match header");
        }
        Self { columns, rows }
    }

    /// Load a table from a CSV file with a header row.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> DataResult<Self> {
        let file = File::open(&path).map_err(|source| DataError::Io {
            path: path.as_ref().display().to_string(),
            source,
        })?;

        let mut reader = csv::Reader::from_reader(file);
        let columns: Vec<String> = reader.headers()?.iter().map(str::to_owned).collect();

        let mut rows = Vec::new();
        for (row_idx, record) in reader.records().enumerate() {
            let record = record?;
            let mut row = Vec::with_capacity(columns.len());
            for (col_idx, cell) in record.iter().enumerate() {
                let value = parse_cell(cell).ok_or_else(|| DataError::BadCell {
                    column: columns[col_idx].clone(),
                    row: row_idx,
                    value: cell.to_owned(),
                })?;
                row.push(value);
            }
            rows.push(row);
        }

        Ok(Self::new(columns, rows))
    }

    /// Number of data rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Column names in file order.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Whether any cell is missing.
    pub fn has_missing(&self) -> bool {
        self.rows.iter().any(|row| row.iter().any(|v| v.is_nan()))
    }

    /// Remove every row containing a missing cell.
    ///
    /// The returned table has zero missing cells. An all-missing input
    /// yields an empty table.
    pub fn drop_missing(&self) -> Self {
        if self.has_missing() {
            info!("table contains missing values, dropping incomplete rows");
        }

        let rows: Vec<Vec<f64>> = self
            .rows
            .iter()
            .filter(|row| row.iter().all(|v| !v.is_nan()))
            .cloned()
            .collect();

        let dropped = self.rows.len() - rows.len();
        if dropped > 0 {
            info!("dropped {} of {} rows", dropped, self.rows.len());
        }

        Self {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Index of a named column.
    fn column_index(&self, name: &str) -> DataResult<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| DataError::UnknownColumn(name.to_owned()))
    }

    /// One named column as a vector.
    pub fn column(&self, name: &str) -> DataResult<Array1<f64>> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| row[idx]).collect())
    }

    /// Project a list of named columns into a matrix, in the given order.
    pub fn select(&self, names: &[String]) -> DataResult<Array2<f64>> {
        let indices = names
            .iter()
            .map(|n| self.column_index(n))
            .collect::<DataResult<Vec<usize>>>()?;

        let mut matrix = Array2::zeros((self.rows.len(), indices.len()));
        for (r, row) in self.rows.iter().enumerate() {
            for (c, &idx) in indices.iter().enumerate() {
                matrix[[r, c]] = row[idx];
            }
        }
        Ok(matrix)
    }
}

fn parse_cell(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() || matches!(cell, "NA" | "NaN" | ".") {
        return Some(f64::NAN);
    }
    cell.parse().ok()
}
