//! Evaluation metrics for prediction quality.
//!
//! Regression metrics (MSE, RMSE, MAE, R²) live at the module root;
//! classification metrics (accuracy) in [`classification`]. All metrics
//! take predictions first and ground truth second, and report violated
//! preconditions as errors rather than wrong numbers.

pub mod classification;

use crate::error::{DormirError, Result};

/// Rejects sequences the metrics are undefined for.
fn check_shapes<T>(y_pred: &[T], y_true: &[T]) -> Result<()> {
    if y_pred.len() != y_true.len() {
        return Err(DormirError::shape_mismatch(y_true.len(), y_pred.len()));
    }
    if y_true.is_empty() {
        return Err(DormirError::shape_mismatch(1, 0));
    }
    Ok(())
}

/// Computes the Mean Squared Error (MSE).
///
/// MSE = (1/n) * `Σ(y_true` - `y_pred)²`
///
/// The result is non-negative and zero exactly when the sequences are
/// elementwise identical.
///
/// # Examples
///
/// ```
/// use dormir::metrics::mse;
///
/// let y_true = [7.0, 6.0, 8.0, 7.0, 5.0];
/// let y_pred = [7.0, 6.0, 7.0, 7.0, 6.0];
/// let error = mse(&y_pred, &y_true).unwrap();
/// assert!((error - 0.4).abs() < 1e-12);
/// ```
///
/// # Errors
///
/// Returns [`DormirError::ShapeMismatch`] if the slices differ in length
/// or are empty.
pub fn mse(y_pred: &[f64], y_true: &[f64]) -> Result<f64> {
    check_shapes(y_pred, y_true)?;

    let n = y_true.len() as f64;

    let sum_sq_error: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).powi(2))
        .sum();

    Ok(sum_sq_error / n)
}

/// Computes the Root Mean Squared Error (RMSE).
///
/// RMSE = sqrt(MSE)
///
/// # Errors
///
/// Returns [`DormirError::ShapeMismatch`] if the slices differ in length
/// or are empty.
pub fn rmse(y_pred: &[f64], y_true: &[f64]) -> Result<f64> {
    Ok(mse(y_pred, y_true)?.sqrt())
}

/// Computes the Mean Absolute Error (MAE).
///
/// MAE = (1/n) * `Σ|y_true` - `y_pred`|
///
/// # Errors
///
/// Returns [`DormirError::ShapeMismatch`] if the slices differ in length
/// or are empty.
pub fn mae(y_pred: &[f64], y_true: &[f64]) -> Result<f64> {
    check_shapes(y_pred, y_true)?;

    let n = y_true.len() as f64;

    let sum_abs_error: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).abs())
        .sum();

    Ok(sum_abs_error / n)
}

/// Computes the coefficient of determination (R²).
///
/// R² = 1 - (`SS_res` / `SS_tot`)
///
/// where `SS_res` is the residual sum of squares and `SS_tot` is the
/// total sum of squares about the mean of `y_true`. The result is at most
/// 1.0, with equality only for a perfect fit; it goes negative when the
/// predictions are worse than the mean of the truth.
///
/// # Examples
///
/// ```
/// use dormir::metrics::r_squared;
///
/// let y_true = [3.0, -0.5, 2.0, 7.0];
/// let y_pred = [2.5, 0.0, 2.0, 8.0];
/// let r2 = r_squared(&y_pred, &y_true).unwrap();
/// assert!(r2 > 0.9 && r2 <= 1.0);
/// ```
///
/// # Errors
///
/// Returns [`DormirError::ShapeMismatch`] if the slices differ in length
/// or are empty, and [`DormirError::DegenerateInput`] when every `y_true`
/// value is identical, since `SS_tot` is zero and the ratio is undefined.
pub fn r_squared(y_pred: &[f64], y_true: &[f64]) -> Result<f64> {
    check_shapes(y_pred, y_true)?;

    let n = y_true.len() as f64;
    let y_mean = y_true.iter().sum::<f64>() / n;

    let ss_res: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).powi(2))
        .sum();

    let ss_tot: f64 = y_true.iter().map(|t| (t - y_mean).powi(2)).sum();

    if ss_tot == 0.0 {
        return Err(DormirError::DegenerateInput {
            context: "zero variance in ground truth".to_string(),
        });
    }

    Ok(1.0 - ss_res / ss_tot)
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
