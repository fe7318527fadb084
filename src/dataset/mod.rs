//! Typed tabular dataset with named columns.
//!
//! A [`Dataset`] holds an ordered set of named [`Column`]s loaded from a
//! CSV file or built in memory. Each column carries a fixed
//! [`ColumnType`] decided once at load time. Missing cells are
//! represented explicitly so validation can count them instead of
//! guessing.

mod loader;

use serde::{Deserialize, Serialize};

use crate::error::{DormirError, Result};

/// Column data type, fixed once when the column is built or loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    /// All cells parse as signed integers.
    Int,
    /// All cells parse as floating-point numbers.
    Float,
    /// Cells are kept as text.
    Str,
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Int => write!(f, "Int"),
            ColumnType::Float => write!(f, "Float"),
            ColumnType::Str => write!(f, "Str"),
        }
    }
}

/// A single typed column. `None` cells are missing values.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Integer-valued column.
    Int(Vec<Option<i64>>),
    /// Float-valued column.
    Float(Vec<Option<f64>>),
    /// Text-valued column.
    Str(Vec<Option<String>>),
}

impl Column {
    /// Builds a fully-present integer column.
    #[must_use]
    pub fn from_ints(values: &[i64]) -> Self {
        Column::Int(values.iter().copied().map(Some).collect())
    }

    /// Builds a fully-present float column.
    #[must_use]
    pub fn from_floats(values: &[f64]) -> Self {
        Column::Float(values.iter().copied().map(Some).collect())
    }

    /// Builds a fully-present text column.
    #[must_use]
    pub fn from_strs(values: &[&str]) -> Self {
        Column::Str(values.iter().map(|s| Some((*s).to_string())).collect())
    }

    /// Returns the column's type tag.
    #[must_use]
    pub fn dtype(&self) -> ColumnType {
        match self {
            Column::Int(_) => ColumnType::Int,
            Column::Float(_) => ColumnType::Float,
            Column::Str(_) => ColumnType::Str,
        }
    }

    /// Returns the number of cells, missing ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Column::Int(v) => v.len(),
            Column::Float(v) => v.len(),
            Column::Str(v) => v.len(),
        }
    }

    /// Returns true if the column has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Counts missing cells.
    #[must_use]
    pub fn missing_count(&self) -> usize {
        match self {
            Column::Int(v) => v.iter().filter(|c| c.is_none()).count(),
            Column::Float(v) => v.iter().filter(|c| c.is_none()).count(),
            Column::Str(v) => v.iter().filter(|c| c.is_none()).count(),
        }
    }

    /// Present values of a numeric column widened to `f64`.
    ///
    /// Returns `None` for text columns; missing cells are skipped.
    #[must_use]
    pub fn numeric_values(&self) -> Option<Vec<f64>> {
        match self {
            Column::Int(v) => Some(v.iter().flatten().map(|&x| x as f64).collect()),
            Column::Float(v) => Some(v.iter().flatten().copied().collect()),
            Column::Str(_) => None,
        }
    }
}

/// An ordered collection of named, typed columns.
///
/// Construction validates the shape once; the value is immutable
/// afterwards.
///
/// # Examples
///
/// ```
/// use dormir::dataset::{Column, Dataset};
///
/// let data = Dataset::new(vec![
///     ("Age".to_string(), Column::from_ints(&[25, 30, 35])),
///     ("Sleep Duration".to_string(), Column::from_floats(&[7.0, 6.5, 8.0])),
/// ]).unwrap();
/// assert_eq!(data.shape(), (3, 2));
/// ```
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<(String, Column)>,
    n_rows: usize,
}

impl Dataset {
    /// Creates a new `Dataset` from named columns.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no columns, if column lengths differ,
    /// or if a name is empty or duplicated.
    pub fn new(columns: Vec<(String, Column)>) -> Result<Self> {
        if columns.is_empty() {
            return Err("dataset must have at least one column".into());
        }

        let n_rows = columns[0].1.len();

        for (name, col) in &columns {
            if col.len() != n_rows {
                return Err(DormirError::shape_mismatch(n_rows, col.len()));
            }
            if name.is_empty() {
                return Err("column names cannot be empty".into());
            }
        }

        let mut names: Vec<&str> = columns.iter().map(|(n, _)| n.as_str()).collect();
        names.sort_unstable();
        for i in 1..names.len() {
            if names[i] == names[i - 1] {
                return Err(DormirError::validation(format!(
                    "duplicate column name '{}'",
                    names[i]
                )));
            }
        }

        Ok(Self { columns, n_rows })
    }

    /// Returns the shape as (`n_rows`, `n_cols`).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.columns.len())
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the dataset holds no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// Returns the column names in file/declaration order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Returns true if a column with the given name exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|(n, _)| n == name)
    }

    /// Returns a reference to a column by name.
    ///
    /// # Errors
    ///
    /// Returns [`DormirError::ColumnNotFound`] if the column doesn't exist.
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
            .ok_or_else(|| DormirError::ColumnNotFound {
                name: name.to_string(),
            })
    }

    /// Returns the type tag of a column by name.
    ///
    /// # Errors
    ///
    /// Returns [`DormirError::ColumnNotFound`] if the column doesn't exist.
    pub fn dtype(&self, name: &str) -> Result<ColumnType> {
        self.column(name).map(Column::dtype)
    }

    /// Counts missing cells across all columns.
    #[must_use]
    pub fn missing_total(&self) -> usize {
        self.columns.iter().map(|(_, c)| c.missing_count()).sum()
    }

    /// Returns an iterator over columns as (name, column) pairs.
    pub fn iter_columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.columns.iter().map(|(n, c)| (n.as_str(), c))
    }

    /// Returns descriptive statistics for every numeric column.
    ///
    /// Text columns are skipped; statistics run over present cells only.
    #[must_use]
    pub fn describe(&self) -> Vec<ColumnStats> {
        self.columns
            .iter()
            .filter_map(|(name, col)| {
                let values = col.numeric_values()?;
                Some(ColumnStats::from_values(name, &values))
            })
            .collect()
    }
}

/// Descriptive statistics for a numeric column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnStats {
    /// Column name.
    pub name: String,
    /// Number of present values.
    pub count: usize,
    /// Mean value.
    pub mean: f64,
    /// Sample standard deviation.
    pub std: f64,
    /// Minimum value.
    pub min: f64,
    /// Median value.
    pub median: f64,
    /// Maximum value.
    pub max: f64,
}

impl ColumnStats {
    fn from_values(name: &str, values: &[f64]) -> Self {
        let count = values.len();
        let n = count as f64;
        let mean = if count == 0 {
            0.0
        } else {
            values.iter().sum::<f64>() / n
        };
        let std = if count > 1 {
            let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
            var.sqrt()
        } else {
            0.0
        };

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let min = sorted.first().copied().unwrap_or(0.0);
        let max = sorted.last().copied().unwrap_or(0.0);
        let median = if sorted.is_empty() {
            0.0
        } else if sorted.len() % 2 == 0 {
            (sorted[sorted.len() / 2 - 1] + sorted[sorted.len() / 2]) / 2.0
        } else {
            sorted[sorted.len() / 2]
        };

        Self {
            name: name.to_string(),
            count,
            mean,
            std,
            min,
            median,
            max,
        }
    }
}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod tests;
