pub mod matrix;

pub use matrix::{Mask, Matrix};
