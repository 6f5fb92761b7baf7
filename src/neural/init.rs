//! Random parameter initialization.
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::matrix::Matrix;
use crate::prelude::*;

/// Half-open range every initial weight and bias is drawn from.
pub const INIT_LOW: f64 = -1.0;
pub const INIT_HIGH: f64 = 1.0;

/// Allocates a `rows x cols` matrix of values drawn uniformly from `[-1.0, 1.0)`.
pub fn uniform_matrix<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Matrix> {
    let mut res = Matrix::new(rows, cols)?;
    fill_uniform(&mut res, rng);
    Ok(res)
}

/// Overwrites every element with a fresh draw from `[-1.0, 1.0)`.
pub fn fill_uniform<R: Rng + ?Sized>(matrix: &mut Matrix, rng: &mut R) {
    let die = Uniform::new(INIT_LOW, INIT_HIGH);
    matrix.apply(|_| die.sample(rng));
}
