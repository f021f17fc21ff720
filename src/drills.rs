//! Two array-manipulation drills built on [`Matrix`].

use crate::error::Result;
use crate::math::matrix::Matrix;

/// `n x n` matrix whose column `j` is filled with `j + 1`, built by
/// broadcasting the row `1..=n` over a matrix of ones.
pub fn column_ramp(n: usize) -> Result<Matrix> {
    Matrix::ones(n, n).broadcast_mul_row(&Matrix::arange(1, n as i64 + 1))
}

/// The integers `1..=25` laid out as a 5x5 matrix.
pub fn grid_1_to_25() -> Result<Matrix> {
    Matrix::arange(1, 26).reshape(5, 5)
}

/// Odd entries of `matrix` in row-major order, picked with a boolean mask.
pub fn pick_odd(matrix: &Matrix) -> Result<Vec<f64>> {
    let mask = matrix.mask(|x| x % 2.0 != 0.0);
    matrix.select(&mask)
}

/// Odd numbers from the 5x5 grid of `1..=25`.
pub fn odd_entries() -> Result<Vec<f64>> {
    pick_odd(&grid_1_to_25()?)
}
