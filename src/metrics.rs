use crate::error::{MlError, Result};

/// Fraction of positions where `predicted` equals `truth`, in [0, 1].
///
/// # Errors
/// [`MlError::Shape`] on a length mismatch, [`MlError::Domain`] for empty input.
pub fn accuracy_score(truth: &[f64], predicted: &[f64]) -> Result<f64> {
    if truth.len() != predicted.len() {
        return Err(MlError::shape("accuracy_score", truth.len(), predicted.len()));
    }
    if truth.is_empty() {
        return Err(MlError::domain("accuracy_score", "accuracy of zero samples is undefined"));
    }
    let correct = truth.iter().zip(predicted.iter()).filter(|(t, p)| t == p).count();
    Ok(correct as f64 / truth.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_matches() {
        let acc = accuracy_score(&[0.0, 1.0, 1.0, 0.0], &[0.0, 1.0, 0.0, 0.0]).unwrap();
        assert!((acc - 0.75).abs() < 1e-12);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(accuracy_score(&[1.0], &[]), Err(MlError::Shape { .. })));
        assert!(matches!(accuracy_score(&[], &[]), Err(MlError::Domain { .. })));
    }
}
