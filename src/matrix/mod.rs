use crate::prelude::*;
use std::fmt;
use std::ops::{Index, IndexMut};

pub mod ops;

/// Dense, row-major matrix of `f64` that owns its rows.
///
/// Every row has the same length. The only matrix with no rows or no columns is the
/// empty one returned by `Matrix::default()`, which can be grown with `push_row`.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Matrix {
    data: Vec<Vec<f64>>,
}

impl Matrix {
    /// Allocates a zero-filled `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidShape { rows, cols });
        }

        Ok(Self {
            data: vec![vec![0.0; cols]; rows],
        })
    }

    /// Takes ownership of nested row data.
    pub fn from_vec(data: Vec<Vec<f64>>) -> Result<Self> {
        let rows = data.len();
        let cols = data.first().map(|row| row.len()).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidShape { rows, cols });
        }

        if let Some(bad) = data.iter().find(|row| row.len() != cols) {
            return Err(Error::ShapeMismatch {
                op: "build a matrix from rows of",
                lhs: (1, cols),
                rhs: (1, bad.len()),
            });
        }

        Ok(Self { data })
    }

    pub fn from_array<const R: usize, const C: usize>(arr: [[f64; C]; R]) -> Result<Self> {
        Self::from_vec(arr.into_iter().map(Vec::from).collect())
    }

    /// Builds a `1 x n` row matrix.
    pub fn from_row(row: Vec<f64>) -> Result<Self> {
        let mut matrix = Self::default();
        matrix.push_row(row)?;
        Ok(matrix)
    }

    pub fn rows(&self) -> usize {
        self.data.len()
    }

    pub fn cols(&self) -> usize {
        self.data.first().map(|row| row.len()).unwrap_or(0)
    }

    pub fn dim(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.check_index(row, col)?;
        Ok(self.data[row][col])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut f64> {
        self.check_index(row, col)?;
        Ok(&mut self.data[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Appends a new bottom row. The first row pushed onto an empty matrix
    /// fixes the column count.
    pub fn push_row(&mut self, row: Vec<f64>) -> Result<()> {
        if row.is_empty() {
            return Err(Error::EmptyRow);
        }
        if !self.is_empty() && row.len() != self.cols() {
            return Err(Error::ShapeMismatch {
                op: "append a row to",
                lhs: self.dim(),
                rhs: (1, row.len()),
            });
        }

        self.data.push(row);
        Ok(())
    }

    /// Appends a new rightmost column; `col` needs one value per row.
    pub fn push_col(&mut self, col: &[f64]) -> Result<()> {
        if col.len() != self.rows() {
            return Err(Error::ShapeMismatch {
                op: "append a column to",
                lhs: self.dim(),
                rhs: (col.len(), 1),
            });
        }

        for (row, &x) in self.data.iter_mut().zip(col) {
            row.push(x);
        }
        Ok(())
    }

    /// Copies one row out as a `1 x cols` matrix.
    pub fn row(&self, row: usize) -> Result<Matrix> {
        self.check_index(row, 0)?;
        Ok(Self {
            data: vec![self.data[row].clone()],
        })
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.iter().map(Vec::as_slice)
    }

    pub fn into_vec(self) -> Vec<Vec<f64>> {
        self.data
    }

    /// Applies a function to every element of the matrix, row by row.
    pub fn apply<F: FnMut(f64) -> f64>(&mut self, mut f: F) {
        for x in self.data.iter_mut().flatten() {
            *x = f(*x);
        }
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::OutOfRange {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = Error;
    fn try_from(data: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_vec(data)
    }
}

impl TryFrom<&[Vec<f64>]> for Matrix {
    type Error = Error;
    fn try_from(data: &[Vec<f64>]) -> Result<Self> {
        Self::from_vec(data.to_vec())
    }
}

/// Panics when out of bounds, like slice indexing. Use `get` for a checked read.
impl Index<(usize, usize)> for Matrix {
    type Output = f64;
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.data[i][j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        &mut self.data[i][j]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.data {
            for x in row {
                write!(f, "{x}  ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
