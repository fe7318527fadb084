//! Dormir: sleep-health dataset validation and model quality metrics.
//!
//! Dormir loads a sleep-health CSV into a typed, immutable [`Dataset`],
//! checks it against a declarative [`schema::Schema`], and scores
//! predictions with standard regression and classification metrics.
//!
//! # Quick Start
//!
//! ```
//! use dormir::prelude::*;
//!
//! // A slice of the sleep-health dataset
//! let data = Dataset::new(vec![
//!     ("Quality of Sleep".to_string(), Column::from_ints(&[7, 6, 8, 7, 5])),
//! ]).unwrap();
//!
//! let truth = data
//!     .column("Quality of Sleep").unwrap()
//!     .numeric_values().unwrap();
//! let predicted = [7.0, 6.0, 7.0, 7.0, 6.0];
//!
//! let error = mse(&predicted, &truth).unwrap();
//! assert!((error - 0.4).abs() < 1e-12);
//!
//! let r2 = r_squared(&predicted, &truth).unwrap();
//! assert!(r2 <= 1.0);
//! ```
//!
//! # Modules
//!
//! - [`dataset`]: typed tabular data loaded from CSV
//! - [`metrics`]: regression and classification quality metrics
//! - [`schema`]: declarative column validation
//! - [`error`]: crate error type

pub mod dataset;
pub mod error;
pub mod metrics;
pub mod prelude;
pub mod schema;

pub use dataset::{Column, ColumnStats, ColumnType, Dataset};
pub use error::{DormirError, Result};
