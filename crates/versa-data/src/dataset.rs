//! Tabular datasets
//!
//! A dataset is a header plus rows of cells. The last column is the label and
//! every other column is an attribute. On disk it is JSON:
//!
//! ```json
//! {"header": ["Sky", "AirTemp", "EnjoySport"],
//!  "rows": [["Sunny", "Warm", "yes"], ["Rainy", "Cold", "no"]]}
//! ```
//!
//! Cells may be strings, numbers or booleans; all of them are normalised to
//! trimmed strings on load.

use crate::{DataError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawDataset {
    header: Vec<String>,
    rows: Vec<Vec<Value>>,
}

/// A validated table of string cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Build a dataset, checking that every row matches the header width
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        if header.len() < 2 {
            return Err(DataError::MissingLabelColumn);
        }
        if rows.is_empty() {
            return Err(DataError::EmptyDataset);
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != header.len() {
                return Err(DataError::RaggedRow {
                    row,
                    expected: header.len(),
                    actual: cells.len(),
                });
            }
        }
        Ok(Self { header, rows })
    }

    /// Parse a dataset from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawDataset = serde_json::from_str(json)?;
        let mut rows = Vec::with_capacity(raw.rows.len());
        for (row, cells) in raw.rows.into_iter().enumerate() {
            let cells = cells
                .into_iter()
                .enumerate()
                .map(|(column, cell)| {
                    normalize_cell(cell).ok_or_else(|| DataError::InvalidCell {
                        row,
                        column: raw
                            .header
                            .get(column)
                            .cloned()
                            .unwrap_or_else(|| format!("#{}", column)),
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            rows.push(cells);
        }
        Self::new(raw.header, rows)
    }

    /// Load a dataset from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&contents)?;
        tracing::debug!(
            path = %path.display(),
            rows = dataset.len(),
            attributes = dataset.attribute_names().len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Full header, label column last
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Names of the attribute columns
    pub fn attribute_names(&self) -> &[String] {
        &self.header[..self.header.len() - 1]
    }

    /// Name of the label column
    pub fn label_name(&self) -> &str {
        &self.header[self.header.len() - 1]
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false for a constructed dataset
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows, label cell last
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Attribute cells of one row
    pub fn attributes(&self, row: usize) -> &[String] {
        let cells = &self.rows[row];
        &cells[..cells.len() - 1]
    }

    /// Label cell of one row
    pub fn label(&self, row: usize) -> &str {
        let cells = &self.rows[row];
        &cells[cells.len() - 1]
    }
}

fn normalize_cell(cell: Value) -> Option<String> {
    match cell {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
