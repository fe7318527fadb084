//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use dormir::prelude::*;
//! ```

pub use crate::dataset::{Column, ColumnStats, ColumnType, Dataset};
pub use crate::error::{DormirError, Result};
pub use crate::metrics::classification::accuracy;
pub use crate::metrics::{mae, mse, r_squared, rmse};
pub use crate::schema::{sleep_health, ColumnSpec, Schema};
