//! CSV loading for tabular classification data.
//!
//! Supported format:
//! - UTF-8, comma-separated, one sample per row
//! - Optional header row (auto-detected: first row is a header if it contains
//!   any non-numeric, non-empty cell)
//! - Every remaining cell must parse as `f64`; one column holds the class label

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, warn};

use crate::error::{MlError, Result};
use crate::math::matrix::Matrix;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Which column of each row holds the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelColumn {
    /// The last column; all preceding columns are features.
    #[default]
    Last,
    /// A 0-based column index; all other columns are features, in order.
    Index(usize),
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parses CSV bytes into `(features, labels)`.
///
/// # Returns
/// A feature matrix with one row per sample and a label vector of equal length.
///
/// # Errors
/// [`MlError::EmptyDataset`] if no data rows remain, [`MlError::Parse`] for a
/// non-numeric cell, a missing label column or a row whose width differs
/// from the first.
pub fn parse_csv(data: &[u8], label: LabelColumn) -> Result<(Matrix, Vec<f64>)> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(data);

    let mut features: Vec<Vec<f64>> = Vec::new();
    let mut labels: Vec<f64> = Vec::new();
    let mut width: Option<usize> = None;

    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let row_num = record.position().map_or(idx + 1, |p| p.line() as usize);

        if idx == 0 && is_header(&record) {
            warn!("skipping header row: {:?}", record.iter().collect::<Vec<_>>());
            continue;
        }
        if record.iter().all(str::is_empty) {
            continue;
        }

        match width {
            None => width = Some(record.len()),
            Some(w) if w != record.len() => {
                return Err(MlError::Parse {
                    row: row_num,
                    detail: format!("expected {} columns like the first row, got {}", w, record.len()),
                });
            }
            Some(_) => {}
        }

        let label_idx = match label {
            LabelColumn::Last => record.len().checked_sub(1),
            LabelColumn::Index(i) if i < record.len() => Some(i),
            LabelColumn::Index(_) => None,
        };
        let label_idx = label_idx.ok_or_else(|| MlError::Parse {
            row: row_num,
            detail: format!("label column {:?} is out of range for {} columns", label, record.len()),
        })?;

        let values = parse_floats(&record, row_num)?;
        labels.push(values[label_idx]);
        features.push(
            values.into_iter()
                .enumerate()
                .filter(|(j, _)| *j != label_idx)
                .map(|(_, v)| v)
                .collect(),
        );
    }

    if features.is_empty() {
        return Err(MlError::EmptyDataset);
    }

    let matrix = Matrix::from_data(features)?;
    debug!("parsed {} samples with {} features", matrix.rows, matrix.cols);
    Ok((matrix, labels))
}

/// Reads and parses a CSV file; see [`parse_csv`].
pub fn load_csv<P: AsRef<Path>>(path: P, label: LabelColumn) -> Result<(Matrix, Vec<f64>)> {
    let bytes = std::fs::read(path.as_ref())?;
    debug!("read {} bytes from {}", bytes.len(), path.as_ref().display());
    parse_csv(&bytes, label)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Returns `true` if the record looks like a header (any cell non-numeric).
fn is_header(record: &StringRecord) -> bool {
    record.iter().any(|c| !c.is_empty() && c.parse::<f64>().is_err())
}

fn parse_floats(record: &StringRecord, row_num: usize) -> Result<Vec<f64>> {
    record.iter()
        .map(|c| {
            c.parse::<f64>().map_err(|_| MlError::Parse {
                row: row_num,
                detail: format!("'{}' is not a valid number", c),
            })
        })
        .collect()
}
