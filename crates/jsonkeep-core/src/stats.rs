//! Small numeric helpers.

use crate::error::{CoreError, Result};

/// Arithmetic mean of `values`.
///
/// An empty sample has no mean and is reported as [`CoreError::EmptySample`].
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(CoreError::EmptySample);
    }
    let sum: f64 = values.iter().sum();
    Ok(sum / values.len() as f64)
}
