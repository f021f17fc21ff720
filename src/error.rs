//! Error type shared by every module in the crate.

/// Errors raised by the loss, activation, matrix, data and tree code.
#[derive(Debug, thiserror::Error)]
pub enum MlError {
    /// A mathematical precondition was violated (e.g. `ln` of a non-positive
    /// number, softmax of an empty sequence).
    #[error("domain error in {op}: {detail}")]
    Domain { op: &'static str, detail: String },

    /// Two inputs have incompatible lengths or shapes.
    #[error("shape mismatch in {op}: expected {expected}, got {actual}")]
    Shape {
        op: &'static str,
        expected: String,
        actual: String,
    },

    /// `predict` was called on a classifier that has not been fitted.
    #[error("model has not been fitted")]
    NotFitted,

    /// A dataset with no rows was supplied where at least one is required.
    #[error("dataset contains no samples")]
    EmptyDataset,

    /// A CSV cell could not be interpreted.
    #[error("row {row}: {detail}")]
    Parse { row: usize, detail: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl MlError {
    pub(crate) fn domain(op: &'static str, detail: impl Into<String>) -> Self {
        MlError::Domain { op, detail: detail.into() }
    }

    pub(crate) fn shape(
        op: &'static str,
        expected: impl ToString,
        actual: impl ToString,
    ) -> Self {
        MlError::Shape {
            op,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MlError>;
