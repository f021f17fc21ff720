use log::debug;

use crate::error::{MlError, Result};

/// Maps unnormalized scores (logits) to a probability distribution:
///   S[i] = exp(L[i] - max(L)) / sum(exp(L[j] - max(L)))
///
/// Subtracting the maximum first leaves the result unchanged mathematically
/// but keeps every exponent ≤ 0, so large scores cannot overflow to infinity.
///
/// Returns a freshly allocated vector; `logits` is not modified.
///
/// # Errors
/// [`MlError::Domain`] if `logits` is empty or contains a non-finite value.
pub fn softmax(logits: &[f64]) -> Result<Vec<f64>> {
    if logits.is_empty() {
        return Err(MlError::domain("softmax", "input sequence is empty"));
    }
    if let Some((i, x)) = logits.iter().enumerate().find(|(_, x)| !x.is_finite()) {
        return Err(MlError::domain("softmax", format!("L[{i}] = {x} is not finite")));
    }

    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|x| (x - max).exp()).collect();
    // The maximum element contributes exp(0) = 1, so the sum is at least 1.
    let sum: f64 = exps.iter().sum();

    debug!("softmax over {} logits, max = {max}, sum = {sum}", logits.len());
    Ok(exps.into_iter().map(|e| e / sum).collect())
}
