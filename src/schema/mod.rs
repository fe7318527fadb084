//! Declarative column expectations for tabular datasets.
//!
//! A [`Schema`] lists the columns a dataset must carry, each with an
//! expected dtype and an optional inclusive value range. [`sleep_health`]
//! returns the expectations for the sleep-health and lifestyle dataset.
//!
//! # Examples
//!
//! ```
//! use dormir::dataset::{Column, ColumnType, Dataset};
//! use dormir::schema::{ColumnSpec, Schema};
//!
//! let data = Dataset::new(vec![
//!     ("Quality of Sleep".to_string(), Column::from_ints(&[7, 6, 8])),
//! ]).unwrap();
//!
//! let schema = Schema::new(vec![
//!     ColumnSpec::new("Quality of Sleep", ColumnType::Int).with_range(1.0, 10.0),
//! ]);
//! assert!(schema.validate(&data).is_ok());
//! ```

use crate::dataset::{ColumnType, Dataset};
use crate::error::{DormirError, Result};

/// Expected shape of a single column.
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    name: String,
    dtype: ColumnType,
    range: Option<(f64, f64)>,
}

impl ColumnSpec {
    /// Creates an expectation for a named column of the given type.
    #[must_use]
    pub fn new(name: &str, dtype: ColumnType) -> Self {
        Self {
            name: name.to_string(),
            dtype,
            range: None,
        }
    }

    /// Requires every present value to lie in `[min, max]` (inclusive).
    ///
    /// Use `f64::INFINITY` as `max` for a lower bound only.
    #[must_use]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some((min, max));
        self
    }

    /// Returns the expected column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the expected column type.
    #[must_use]
    pub fn dtype(&self) -> ColumnType {
        self.dtype
    }

    /// Returns the expected value range, if one is set.
    #[must_use]
    pub fn range(&self) -> Option<(f64, f64)> {
        self.range
    }
}

/// An ordered set of column expectations.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    columns: Vec<ColumnSpec>,
}

impl Schema {
    /// Creates a schema from column expectations.
    #[must_use]
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self { columns }
    }

    /// Returns the column expectations in declaration order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Validates `data` against every column expectation.
    ///
    /// Checks run per column in declaration order: presence, dtype, no
    /// missing cells, value range. The first violation is returned.
    ///
    /// # Errors
    ///
    /// Returns [`DormirError::ColumnNotFound`] for an absent column and
    /// [`DormirError::ValidationError`] for a dtype mismatch, missing
    /// cells, or an out-of-range value.
    pub fn validate(&self, data: &Dataset) -> Result<()> {
        for spec in &self.columns {
            let column = data.column(&spec.name)?;

            if column.dtype() != spec.dtype {
                return Err(DormirError::validation(format!(
                    "column '{}': expected {}, found {}",
                    spec.name,
                    spec.dtype,
                    column.dtype()
                )));
            }

            let missing = column.missing_count();
            if missing > 0 {
                return Err(DormirError::validation(format!(
                    "column '{}': {missing} missing value(s)",
                    spec.name
                )));
            }

            if let Some((min, max)) = spec.range {
                let Some(values) = column.numeric_values() else {
                    return Err(DormirError::validation(format!(
                        "column '{}': range check requires a numeric column",
                        spec.name
                    )));
                };
                if let Some(v) = values.iter().find(|v| **v < min || **v > max) {
                    return Err(DormirError::validation(format!(
                        "column '{}': value {v} outside [{min}, {max}]",
                        spec.name
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Column expectations for the sleep-health and lifestyle dataset.
///
/// Covers the nine columns the dataset ships with: identifiers and
/// demographics, sleep duration in hours per day, quality and stress on a
/// 1-10 scale, activity level as a 0-100 percentage, heart rate, and a
/// non-negative daily step count.
#[must_use]
pub fn sleep_health() -> Schema {
    Schema::new(vec![
        ColumnSpec::new("Person ID", ColumnType::Int),
        ColumnSpec::new("Gender", ColumnType::Str),
        ColumnSpec::new("Age", ColumnType::Int),
        ColumnSpec::new("Sleep Duration", ColumnType::Float).with_range(0.0, 24.0),
        ColumnSpec::new("Quality of Sleep", ColumnType::Int).with_range(1.0, 10.0),
        ColumnSpec::new("Physical Activity Level", ColumnType::Int).with_range(0.0, 100.0),
        ColumnSpec::new("Stress Level", ColumnType::Int).with_range(1.0, 10.0),
        ColumnSpec::new("Heart Rate", ColumnType::Int),
        ColumnSpec::new("Daily Steps", ColumnType::Int).with_range(0.0, f64::INFINITY),
    ])
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
