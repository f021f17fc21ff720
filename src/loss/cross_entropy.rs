use log::debug;

use crate::error::{MlError, Result};

/// Binary cross-entropy between ground-truth labels and predicted probabilities.
pub struct CrossEntropyLoss;

impl CrossEntropyLoss {
    /// Scalar cross-entropy, summed over all elements:
    ///   H = -sum(y·ln(p) + (1-y)·ln(1-p))
    ///
    /// `labels`        — ground truth, conventionally 0 or 1 (soft labels are accepted)
    /// `probabilities` — predictions, each strictly inside (0, 1)
    ///
    /// An empty pair of sequences yields `0.0`.
    ///
    /// # Errors
    /// [`MlError::Shape`] if the lengths differ, [`MlError::Domain`] if any
    /// probability lies outside the open interval (0, 1).
    pub fn loss(labels: &[f64], probabilities: &[f64]) -> Result<f64> {
        validate("cross_entropy", labels, probabilities)?;

        let mut sigma = 0.0;
        for (y, p) in labels.iter().zip(probabilities.iter()) {
            sigma -= y * p.ln() + (1.0 - y) * (1.0 - p).ln();
        }

        debug!("cross_entropy over {} elements = {}", labels.len(), sigma);
        Ok(sigma)
    }

    /// Mean cross-entropy: `loss / n`. Undefined for empty input.
    pub fn mean(labels: &[f64], probabilities: &[f64]) -> Result<f64> {
        let total = Self::loss(labels, probabilities)?;
        if labels.is_empty() {
            return Err(MlError::domain(
                "cross_entropy_mean",
                "mean of an empty sequence is undefined",
            ));
        }
        Ok(total / labels.len() as f64)
    }

    /// Per-element gradient w.r.t. the probabilities: (p - y) / (p · (1 - p))
    pub fn derivative(labels: &[f64], probabilities: &[f64]) -> Result<Vec<f64>> {
        validate("cross_entropy_derivative", labels, probabilities)?;
        Ok(labels.iter().zip(probabilities.iter())
            .map(|(y, p)| (p - y) / (p * (1.0 - p)))
            .collect())
    }
}

/// Convenience wrapper around [`CrossEntropyLoss::loss`].
pub fn cross_entropy(labels: &[f64], probabilities: &[f64]) -> Result<f64> {
    CrossEntropyLoss::loss(labels, probabilities)
}

fn validate(op: &'static str, labels: &[f64], probabilities: &[f64]) -> Result<()> {
    if labels.len() != probabilities.len() {
        return Err(MlError::shape(op, labels.len(), probabilities.len()));
    }
    // Written as a negated range test so that NaN is rejected too.
    if let Some((i, p)) = probabilities.iter().enumerate().find(|(_, p)| !(**p > 0.0 && **p < 1.0)) {
        return Err(MlError::domain(
            op,
            format!("probability P[{i}] = {p} is outside (0, 1); ln would be undefined"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(cross_entropy(&[], &[]).unwrap(), 0.0);
    }

    #[test]
    fn matches_hand_computed_value() {
        // -(ln 0.8 + ln 0.7 + ln 0.9)
        let expected = -(0.8f64.ln() + 0.7f64.ln() + 0.9f64.ln());
        let got = cross_entropy(&[1.0, 0.0, 1.0], &[0.8, 0.3, 0.9]).unwrap();
        assert!((got - expected).abs() < 1e-12);
    }

    #[test]
    fn soft_labels_are_accepted() {
        let got = cross_entropy(&[0.5], &[0.5]).unwrap();
        assert!((got - 2.0f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn length_mismatch_is_shape_error() {
        let err = cross_entropy(&[1.0, 0.0], &[0.5]).unwrap_err();
        assert!(matches!(err, MlError::Shape { op: "cross_entropy", .. }));
    }

    #[test]
    fn shape_is_checked_before_domain() {
        let err = cross_entropy(&[1.0], &[0.0, 1.0]).unwrap_err();
        assert!(matches!(err, MlError::Shape { .. }));
    }

    #[test]
    fn boundary_probabilities_are_domain_errors() {
        for p in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            let err = cross_entropy(&[1.0], &[p]).unwrap_err();
            assert!(matches!(err, MlError::Domain { .. }), "p = {p}");
        }
    }

    #[test]
    fn mean_divides_by_length() {
        let total = cross_entropy(&[1.0, 0.0], &[0.6, 0.2]).unwrap();
        let mean = CrossEntropyLoss::mean(&[1.0, 0.0], &[0.6, 0.2]).unwrap();
        assert!((mean - total / 2.0).abs() < 1e-12);
        assert!(CrossEntropyLoss::mean(&[], &[]).is_err());
    }

    #[test]
    fn derivative_sign_points_towards_label() {
        let grad = CrossEntropyLoss::derivative(&[1.0, 0.0], &[0.4, 0.4]).unwrap();
        // Increasing p lowers the loss when y = 1, raises it when y = 0.
        assert!(grad[0] < 0.0);
        assert!(grad[1] > 0.0);
        assert!((grad[0] - (0.4 - 1.0) / (0.4 * 0.6)).abs() < 1e-12);
    }
}
