//! CSV ingestion with per-column type inference.
//!
//! The loader reads the whole file once, keeps the header as column
//! names, and decides each column's type tag from its cells: `Int`
//! if every present cell parses as an integer, `Float` if every present
//! cell parses as a number, `Str` otherwise. Empty cells and the literal
//! `NA` are missing.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{Column, Dataset};
use crate::error::{DormirError, Result};

/// Tokens treated as missing cells, after trimming.
fn is_missing(cell: &str) -> bool {
    cell.is_empty() || cell == "NA"
}

impl Dataset {
    /// Loads a dataset from a CSV file at `path`.
    ///
    /// The first row is the header; rows are kept in file order with no
    /// filtering.
    ///
    /// # Errors
    ///
    /// Returns [`DormirError::NotFound`] if the path does not exist,
    /// [`DormirError::Io`] if the file cannot be read, and
    /// [`DormirError::ParseError`] for malformed CSV content such as rows
    /// with inconsistent field counts.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(DormirError::NotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Loads a dataset from any CSV source.
    ///
    /// # Errors
    ///
    /// Returns [`DormirError::ParseError`] for malformed CSV content.
    ///
    /// # Examples
    ///
    /// ```
    /// use dormir::dataset::{ColumnType, Dataset};
    ///
    /// let csv = "Age,Sleep Duration\n25,7.0\n30,6.5\n";
    /// let data = Dataset::from_reader(csv.as_bytes()).unwrap();
    /// assert_eq!(data.shape(), (2, 2));
    /// assert_eq!(data.dtype("Age").unwrap(), ColumnType::Int);
    /// assert_eq!(data.dtype("Sleep Duration").unwrap(), ColumnType::Float);
    /// ```
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(source);

        let headers: Vec<String> = reader
            .headers()
            .map_err(parse_error)?
            .iter()
            .map(str::to_string)
            .collect();

        let mut cells: Vec<Vec<Option<String>>> = headers.iter().map(|_| Vec::new()).collect();

        for record in reader.records() {
            let record = record.map_err(parse_error)?;
            for (idx, field) in record.iter().enumerate() {
                let field = field.trim();
                cells[idx].push(if is_missing(field) {
                    None
                } else {
                    Some(field.to_string())
                });
            }
        }

        let columns = headers
            .into_iter()
            .zip(cells)
            .map(|(name, raw)| (name, infer_column(raw)))
            .collect();

        Dataset::new(columns)
    }
}

fn parse_error(err: csv::Error) -> DormirError {
    let line = err.position().map_or(0, csv::Position::line);
    DormirError::ParseError {
        line,
        message: err.to_string(),
    }
}

/// Picks the narrowest type every present cell fits, then converts.
fn infer_column(raw: Vec<Option<String>>) -> Column {
    if raw
        .iter()
        .flatten()
        .all(|cell| cell.parse::<i64>().is_ok())
    {
        Column::Int(
            raw.iter()
                .map(|c| c.as_ref().and_then(|s| s.parse().ok()))
                .collect(),
        )
    } else if raw
        .iter()
        .flatten()
        .all(|cell| cell.parse::<f64>().is_ok())
    {
        Column::Float(
            raw.iter()
                .map(|c| c.as_ref().and_then(|s| s.parse().ok()))
                .collect(),
        )
    } else {
        Column::Str(raw)
    }
}
