use serde::{Serialize, Deserialize};
use std::ops::Range;

use crate::error::{MlError, Result};

/// Dense row-major matrix of `f64`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

/// Boolean mask with the same shape as the matrix it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<bool>>,
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix::filled(rows, cols, 0.0)
    }

    pub fn ones(rows: usize, cols: usize) -> Matrix {
        Matrix::filled(rows, cols, 1.0)
    }

    pub fn filled(rows: usize, cols: usize, value: f64) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![value; cols]; rows]
        }
    }

    /// Single-row matrix holding `start, start + 1, ..., end - 1`.
    pub fn arange(start: i64, end: i64) -> Matrix {
        let row: Vec<f64> = (start..end).map(|x| x as f64).collect();
        Matrix { rows: 1, cols: row.len(), data: vec![row] }
    }

    /// Builds a matrix from row vectors.
    ///
    /// # Errors
    /// [`MlError::Shape`] if the rows are ragged.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let cols = data.first().map_or(0, Vec::len);
        if let Some(bad) = data.iter().find(|row| row.len() != cols) {
            return Err(MlError::shape("from_data", cols, bad.len()));
        }
        Ok(Matrix {
            rows: data.len(),
            cols,
            data
        })
    }

    /// Row-major reshape; the element count must be preserved.
    pub fn reshape(&self, rows: usize, cols: usize) -> Result<Matrix> {
        let have = self.rows * self.cols;
        if rows.checked_mul(cols) != Some(have) {
            return Err(MlError::shape(
                "reshape",
                format!("{have} elements"),
                format!("{rows}x{cols}"),
            ));
        }
        let flat = self.flatten();
        let data = if cols == 0 {
            vec![Vec::new(); rows]
        } else {
            flat.chunks(cols).map(|c| c.to_vec()).collect()
        };
        Ok(Matrix { rows, cols, data })
    }

    pub fn flatten(&self) -> Vec<f64> {
        self.data.iter().flatten().copied().collect()
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i]
    }

    pub fn column(&self, j: usize) -> Vec<f64> {
        self.data.iter().map(|row| row[j]).collect()
    }

    /// Keeps the columns in `range` (like `x[:, a:b]`).
    pub fn slice_cols(&self, range: Range<usize>) -> Result<Matrix> {
        if range.start > range.end || range.end > self.cols {
            return Err(MlError::shape(
                "slice_cols",
                format!("a column range within 0..{}", self.cols),
                format!("{range:?}"),
            ));
        }
        Ok(Matrix {
            rows: self.rows,
            cols: range.len(),
            data: self.data.iter().map(|row| row[range.clone()].to_vec()).collect(),
        })
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    /// Element-wise product with `row` broadcast down every row of `self`.
    /// `row` must be a `1 x self.cols` matrix.
    pub fn broadcast_mul_row(&self, row: &Matrix) -> Result<Matrix> {
        if row.rows != 1 || row.cols != self.cols {
            return Err(MlError::shape(
                "broadcast_mul_row",
                format!("1x{}", self.cols),
                format!("{}x{}", row.rows, row.cols),
            ));
        }
        let factors = &row.data[0];
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter()
                .map(|r| r.iter().zip(factors).map(|(a, b)| a * b).collect())
                .collect(),
        })
    }

    pub fn mask<P>(&self, predicate: P) -> Mask
    where
        P: Fn(f64) -> bool,
    {
        Mask {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter()
                .map(|row| row.iter().map(|&x| predicate(x)).collect())
                .collect(),
        }
    }

    /// Entries where `mask` is set, in row-major order (like `x[mask]`).
    pub fn select(&self, mask: &Mask) -> Result<Vec<f64>> {
        if mask.rows != self.rows || mask.cols != self.cols {
            return Err(MlError::shape(
                "select",
                format!("{}x{}", self.rows, self.cols),
                format!("{}x{}", mask.rows, mask.cols),
            ));
        }
        Ok(self.data.iter().flatten()
            .zip(mask.data.iter().flatten())
            .filter(|(_, keep)| **keep)
            .map(|(&x, _)| x)
            .collect())
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}
