use super::Matrix;
use crate::prelude::*;
use std::ops::{Add, Mul, MulAssign, Sub};

/// Matrix product.
pub trait Dot<I> {
    type Output;
    fn dot(self, rhs: I) -> Result<Self::Output>;
}

impl<'a> Dot<&Matrix> for &'a Matrix {
    type Output = Matrix;
    fn dot(self, rhs: &Matrix) -> Result<Self::Output> {
        if self.cols() != rhs.rows() {
            return Err(Error::ShapeMismatch {
                op: "multiply",
                lhs: self.dim(),
                rhs: rhs.dim(),
            });
        }

        let mut res = Matrix::new(self.rows(), rhs.cols())?;
        for row in 0..self.rows() {
            for n in 0..self.cols() {
                let lhs = self[(row, n)];
                for col in 0..rhs.cols() {
                    res[(row, col)] += lhs * rhs[(n, col)];
                }
            }
        }

        Ok(res)
    }
}

impl Matrix {
    /// Adds `rhs` element-wise in place.
    pub fn add_in_place(&mut self, rhs: &Matrix) -> Result<()> {
        self.check_same_dim("add", rhs)?;
        self.zip_apply(rhs, |x, y| x + y);
        Ok(())
    }

    /// Subtracts `rhs` element-wise in place.
    pub fn sub_in_place(&mut self, rhs: &Matrix) -> Result<()> {
        self.check_same_dim("subtract", rhs)?;
        self.zip_apply(rhs, |x, y| x - y);
        Ok(())
    }

    /// Multiplies every element by `scalar` in place.
    pub fn scale(&mut self, scalar: f64) {
        self.apply(|x| x * scalar);
    }

    fn check_same_dim(&self, op: &'static str, rhs: &Matrix) -> Result<()> {
        if self.dim() != rhs.dim() {
            return Err(Error::ShapeMismatch {
                op,
                lhs: self.dim(),
                rhs: rhs.dim(),
            });
        }
        Ok(())
    }

    fn zip_apply<F: Fn(f64, f64) -> f64>(&mut self, rhs: &Matrix, f: F) {
        for (row, rhs_row) in self.data.iter_mut().zip(&rhs.data) {
            for (x, &y) in row.iter_mut().zip(rhs_row) {
                *x = f(*x, y);
            }
        }
    }
}

/// Adds two matrices element-wise.
impl<'a> Add for &'a Matrix {
    type Output = Result<Matrix>;
    fn add(self, rhs: Self) -> Self::Output {
        let mut res = self.clone();
        res.add_in_place(rhs)?;
        Ok(res)
    }
}

/// Subtracts two matrices element-wise.
impl<'a> Sub for &'a Matrix {
    type Output = Result<Matrix>;
    fn sub(self, rhs: Self) -> Self::Output {
        let mut res = self.clone();
        res.sub_in_place(rhs)?;
        Ok(res)
    }
}

impl<'a> Mul<f64> for &'a Matrix {
    type Output = Matrix;
    fn mul(self, scalar: f64) -> Self::Output {
        let mut res = self.clone();
        res.scale(scalar);
        res
    }
}

impl<'a> Mul<&'a Matrix> for f64 {
    type Output = Matrix;
    fn mul(self, m: &'a Matrix) -> Self::Output {
        m * self
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, scalar: f64) {
        self.scale(scalar);
    }
}

#[cfg(test)]
mod tests {
    use crate::matrix::{ops::Dot, Matrix};
    use crate::prelude::*;
    use proptest::prelude::*;

    fn m<const R: usize, const C: usize>(arr: [[f64; C]; R]) -> Matrix {
        Matrix::from_array(arr).unwrap()
    }

    #[test]
    fn square_matrix_multiplication() {
        let m1 = m([[1.0, 2.0], [3.0, 4.0]]);
        let m2 = m([[3.0, 2.0], [1.0, 3.0]]);

        let m3 = m1.dot(&m2).unwrap();

        assert_eq!(m3.dim(), (2, 2));
        assert_eq!(m3.into_vec(), [[5.0, 8.0], [13.0, 18.0]]);
    }

    #[test]
    fn non_square_matrix_multiplication() {
        let m1 = m([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        let m2 = m([[1.0, 2.0], [3.0, 4.0]]);

        let m3 = m1.dot(&m2).unwrap();
        assert_eq!(m3.dim(), (3, 2));
        assert_eq!(m3.into_vec(), [[7.0, 10.0], [15.0, 22.0], [23.0, 34.0]]);
    }

    #[test]
    fn row_times_column() {
        let row = m([[1.0, 2.0, 3.0]]);
        let col = m([[4.0], [5.0], [6.0]]);

        assert_eq!(row.dot(&col).unwrap().into_vec(), [[32.0]]);
        assert_eq!(col.dot(&row).unwrap().dim(), (3, 3));
    }

    #[test]
    fn matrix_multiplication_error() {
        let m1 = m([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let m2 = m([[1.0, 2.0], [3.0, 4.0]]);

        assert!(matches!(
            m1.dot(&m2),
            Err(Error::ShapeMismatch {
                lhs: (2, 3),
                rhs: (2, 2),
                ..
            })
        ));
    }

    #[test]
    fn matrix_addition() {
        let m1 = m([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        let m2 = m([[1.0, 2.0], [3.0, 4.0], [2.0, 1.0]]);

        let m3 = &m1 + &m2;
        assert_eq!(m3.unwrap().into_vec(), [[2.0, 4.0], [6.0, 8.0], [7.0, 7.0]]);
    }

    #[test]
    fn matrix_subtraction() {
        let m1 = m([[1.0, 2.0], [3.0, 4.0]]);
        let m2 = m([[0.5, 2.0], [4.0, 1.0]]);

        let m3 = &m1 - &m2;
        assert_eq!(m3.unwrap().into_vec(), [[0.5, 0.0], [-1.0, 3.0]]);
    }

    #[test]
    fn matrix_addition_err() {
        // unequal rows
        let m1 = m([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        let m2 = m([[1.0, 2.0], [3.0, 4.0]]);
        assert!(matches!(&m1 + &m2, Err(Error::ShapeMismatch { .. })));
        assert!(matches!(&m1 - &m2, Err(Error::ShapeMismatch { .. })));

        // unequal cols
        let m2 = m([[1.0, 2.0, 1.0], [3.0, 4.0, 1.0], [1.0, 2.0, 3.0]]);
        assert!(matches!(&m1 + &m2, Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn failed_in_place_ops_leave_matrix_untouched() {
        let mut m1 = m([[1.0, 2.0]]);
        let m2 = m([[1.0], [2.0]]);

        assert!(matches!(m1.add_in_place(&m2), Err(Error::ShapeMismatch { .. })));
        assert!(matches!(m1.sub_in_place(&m2), Err(Error::ShapeMismatch { .. })));
        assert_eq!(m1.into_vec(), [[1.0, 2.0]]);
    }

    #[test]
    fn in_place_ops() {
        let mut m1 = m([[1.0, 2.0], [3.0, 4.0]]);
        m1.add_in_place(&m([[1.0, 1.0], [1.0, 1.0]])).unwrap();
        m1.sub_in_place(&m([[0.0, 3.0], [0.0, 0.0]])).unwrap();
        m1 *= 2.0;
        assert_eq!(m1.into_vec(), [[4.0, 0.0], [8.0, 10.0]]);
    }

    #[test]
    fn scalar_multiplication_commutes() {
        let m1 = m([[1.0, -2.0], [0.5, 4.0]]);

        let left = 3.0 * &m1;
        let right = &m1 * 3.0;
        assert_eq!(left, right);
        assert_eq!(left.into_vec(), [[3.0, -6.0], [1.5, 12.0]]);
        // source is untouched
        assert_eq!(m1[(0, 1)], -2.0);
    }

    fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
        prop::collection::vec(prop::collection::vec(-100.0f64..100.0, cols), rows)
            .prop_map(|data| Matrix::from_vec(data).unwrap())
    }

    fn same_shape_pair() -> impl Strategy<Value = (Matrix, Matrix)> {
        (1usize..5, 1usize..5).prop_flat_map(|(r, c)| (matrix(r, c), matrix(r, c)))
    }

    fn chain_pair() -> impl Strategy<Value = (Matrix, Matrix)> {
        (1usize..5, 1usize..5, 1usize..5).prop_flat_map(|(r, n, c)| (matrix(r, n), matrix(n, c)))
    }

    proptest! {
        #[test]
        fn product_entries_are_row_column_sums((a, b) in chain_pair()) {
            let p = a.dot(&b).unwrap();
            prop_assert_eq!(p.dim(), (a.rows(), b.cols()));
            for i in 0..a.rows() {
                for j in 0..b.cols() {
                    let expected: f64 = (0..a.cols()).map(|k| a[(i, k)] * b[(k, j)]).sum();
                    prop_assert!((p[(i, j)] - expected).abs() <= 1e-9 * (1.0 + expected.abs()));
                }
            }
        }

        #[test]
        fn add_then_sub_restores((a, b) in same_shape_pair()) {
            let back = (&(&a + &b).unwrap() - &b).unwrap();
            for i in 0..a.rows() {
                for j in 0..a.cols() {
                    prop_assert!((back[(i, j)] - a[(i, j)]).abs() <= 1e-9);
                }
            }
        }

        #[test]
        fn addition_commutes((a, b) in same_shape_pair()) {
            prop_assert_eq!((&a + &b).unwrap(), (&b + &a).unwrap());
        }
    }
}
