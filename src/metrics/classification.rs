//! Classification metrics for label sequences.

use super::check_shapes;
use crate::error::Result;

/// Computes classification accuracy.
///
/// accuracy = `correct_predictions` / `total_predictions`
///
/// Works for any `PartialEq` element type, so integer, categorical, and
/// float label sequences are all accepted. Comparison is exact value
/// equality; float labels are never compared with a tolerance.
///
/// # Examples
///
/// ```
/// use dormir::metrics::classification::accuracy;
///
/// let y_true = [7, 6, 8, 7, 5];
/// let y_pred = [7, 6, 7, 7, 6];
/// let acc = accuracy(&y_pred, &y_true).unwrap();
/// assert!((acc - 0.6).abs() < 1e-12);
/// ```
///
/// # Errors
///
/// Returns [`crate::error::DormirError::ShapeMismatch`] if the slices
/// differ in length or are empty.
pub fn accuracy<T: PartialEq>(y_pred: &[T], y_true: &[T]) -> Result<f64> {
    check_shapes(y_pred, y_true)?;

    let correct = y_pred
        .iter()
        .zip(y_true.iter())
        .filter(|(p, t)| p == t)
        .count();

    Ok(correct as f64 / y_true.len() as f64)
}
