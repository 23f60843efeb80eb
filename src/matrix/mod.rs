mod determinant;
mod minor;

pub use determinant::determinant_of_view;
pub use minor::MinorView;

use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use crate::error::MatrixError;

/// Tolerance used by [`Matrix::approx_eq`]. Protects chained transform math
/// against floating-point drift; not a substitute for exact comparison.
pub const EPSILON: f64 = 1e-7;

/// Dense, arbitrary-size matrix of `f64` cells.
///
/// Storage is a single flat buffer in row-major order. Dimensions are fixed
/// at construction and always positive, so every `Matrix` in existence is
/// usable; fallible operations report incompatibilities through
/// [`MatrixError`] instead of handing back a poisoned value.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a zero-filled `rows` x `columns` matrix.
    pub fn new(rows: usize, columns: usize) -> Result<Matrix, MatrixError> {
        if rows == 0 || columns == 0 {
            return Err(MatrixError::InvalidDimensions { rows, columns });
        }

        Ok(Matrix {
            rows,
            columns,
            data: vec![0.0; rows * columns],
        })
    }

    /// Creates a matrix from row slices. Rejects empty input and ragged rows.
    pub fn from_rows(rows: &[&[f64]]) -> Result<Matrix, MatrixError> {
        let row_count = rows.len();
        let column_count = rows.first().map_or(0, |row| row.len());

        let mut result = Matrix::new(row_count, column_count)?;
        for (i, row) in rows.iter().enumerate() {
            if row.len() != column_count {
                return Err(MatrixError::InvalidDimensions {
                    rows: row_count,
                    columns: row.len(),
                });
            }
            result.data[i * column_count..(i + 1) * column_count].copy_from_slice(row);
        }

        Ok(result)
    }

    /// Builds a 4x1 column vector `(x, y, z, 1)` in homogeneous coordinates.
    pub fn column_point(x: f64, y: f64, z: f64) -> Matrix {
        Matrix {
            rows: 4,
            columns: 1,
            data: vec![x, y, z, 1.0],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Tolerance equality: false on shape mismatch, otherwise true iff every
    /// pair of cells differs by less than [`EPSILON`].
    pub fn approx_eq(&self, other: &Matrix) -> bool {
        if self.rows != other.rows || self.columns != other.columns {
            return false;
        }

        self.data
            .iter()
            .zip(&other.data)
            .all(|(a, b)| (a - b).abs() < EPSILON)
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.elementwise(other, |a, b| a + b)
    }

    pub fn sub(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.elementwise(other, |a, b| a - b)
    }

    fn elementwise(
        &self,
        other: &Matrix,
        op: impl Fn(f64, f64) -> f64,
    ) -> Result<Matrix, MatrixError> {
        if self.rows != other.rows || self.columns != other.columns {
            return Err(MatrixError::ShapeMismatch {
                left_rows: self.rows,
                left_columns: self.columns,
                right_rows: other.rows,
                right_columns: other.columns,
            });
        }

        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| op(a, b))
            .collect();

        Ok(Matrix {
            rows: self.rows,
            columns: self.columns,
            data,
        })
    }

    pub fn mul_scalar(&self, factor: f64) -> Matrix {
        Matrix {
            rows: self.rows,
            columns: self.columns,
            data: self.data.iter().map(|&cell| cell * factor).collect(),
        }
    }

    /// Matrix product. Fails with [`MatrixError::IncompatibleProduct`] unless
    /// `self.columns == other.rows`; the result is `self.rows x other.columns`.
    ///
    /// Loop order keeps both operands walking forward through their row-major
    /// storage.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.columns != other.rows {
            return Err(MatrixError::IncompatibleProduct {
                left_columns: self.columns,
                right_rows: other.rows,
            });
        }

        let mut result = Matrix {
            rows: self.rows,
            columns: other.columns,
            data: vec![0.0; self.rows * other.columns],
        };

        for i in 0..self.rows {
            for k in 0..self.columns {
                let left = self.data[i * self.columns + k];
                for j in 0..other.columns {
                    result.data[i * other.columns + j] += left * other.data[k * other.columns + j];
                }
            }
        }

        Ok(result)
    }

    pub fn transpose(&self) -> Matrix {
        let mut result = Matrix {
            rows: self.columns,
            columns: self.rows,
            data: vec![0.0; self.data.len()],
        };

        for i in 0..self.rows {
            for j in 0..self.columns {
                result.data[j * self.rows + i] = self.data[i * self.columns + j];
            }
        }

        result
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, column): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && column < self.columns,
            "cell ({row}, {column}) out of bounds for {}x{} matrix",
            self.rows,
            self.columns,
        );
        &self.data[row * self.columns + column]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut f64 {
        assert!(
            row < self.rows && column < self.columns,
            "cell ({row}, {column}) out of bounds for {}x{} matrix",
            self.rows,
            self.columns,
        );
        &mut self.data[row * self.columns + column]
    }
}

/// Panicking product for the fixed-shape 4x4 composition paths, where a
/// dimension mismatch is a programming error rather than an input condition.
impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, other: &Matrix) -> Matrix {
        match self.matmul(other) {
            Ok(product) => product,
            Err(err) => panic!("matrix product failed: {err}"),
        }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mat {}x{}: [", self.rows, self.columns)?;
        for i in 0..self.rows {
            for j in 0..self.columns {
                write!(f, "{:.5}, ", self.data[i * self.columns + j])?;
            }
            writeln!(f)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_rejects_zero_dimensions() {
        assert_eq!(
            Matrix::new(0, 3),
            Err(MatrixError::InvalidDimensions { rows: 0, columns: 3 })
        );
        assert_eq!(
            Matrix::new(3, 0),
            Err(MatrixError::InvalidDimensions { rows: 3, columns: 0 })
        );
    }

    #[test]
    fn create_zero_initializes() {
        let m = Matrix::new(2, 3).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.columns(), 3);
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        assert!(Matrix::from_rows(&[&[1.0, 2.0], &[3.0]]).is_err());
        assert!(Matrix::from_rows(&[]).is_err());
    }

    #[test]
    fn approx_eq_respects_tolerance() {
        let a = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
        let mut b = a.clone();
        b[(1, 1)] += EPSILON / 2.0;
        assert!(a.approx_eq(&b));

        b[(1, 1)] += EPSILON;
        assert!(!a.approx_eq(&b));
    }

    #[test]
    fn approx_eq_rejects_shape_mismatch() {
        let a = Matrix::new(2, 3).unwrap();
        let b = Matrix::new(3, 2).unwrap();
        assert!(!a.approx_eq(&b));
    }

    #[test]
    fn add_and_sub_are_elementwise() {
        let a = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(&[&[10.0, 20.0], &[30.0, 40.0]]).unwrap();

        let sum = a.add(&b).unwrap();
        assert_eq!(sum, Matrix::from_rows(&[&[11.0, 22.0], &[33.0, 44.0]]).unwrap());

        let diff = b.sub(&a).unwrap();
        assert_eq!(diff, Matrix::from_rows(&[&[9.0, 18.0], &[27.0, 36.0]]).unwrap());
    }

    #[test]
    fn add_rejects_shape_mismatch() {
        let a = Matrix::new(2, 3).unwrap();
        let b = Matrix::new(2, 2).unwrap();

        let err = a.add(&b).unwrap_err();
        assert!(matches!(err, MatrixError::ShapeMismatch { .. }));
        assert!(err.is_calc_error());
        assert!(a.sub(&b).is_err());
    }

    #[test]
    fn scalar_multiply() {
        let a = Matrix::from_rows(&[&[1.0, -2.0], &[0.5, 4.0]]).unwrap();
        let scaled = a.mul_scalar(2.0);
        assert_eq!(scaled, Matrix::from_rows(&[&[2.0, -4.0], &[1.0, 8.0]]).unwrap());
    }

    #[test]
    fn matmul_known_product() {
        let a = Matrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]).unwrap();
        let b = Matrix::from_rows(&[&[7.0, 8.0], &[9.0, 10.0], &[11.0, 12.0]]).unwrap();

        let product = a.matmul(&b).unwrap();
        assert_eq!(product.rows(), 2);
        assert_eq!(product.columns(), 2);
        assert_eq!(
            product,
            Matrix::from_rows(&[&[58.0, 64.0], &[139.0, 154.0]]).unwrap()
        );
    }

    #[test]
    fn matmul_rejects_incompatible_shapes() {
        let a = Matrix::new(2, 3).unwrap();
        let b = Matrix::new(2, 3).unwrap();

        let err = a.matmul(&b).unwrap_err();
        assert_eq!(
            err,
            MatrixError::IncompatibleProduct {
                left_columns: 3,
                right_rows: 2,
            }
        );
        assert!(err.is_calc_error());
    }

    #[test]
    fn transpose_swaps_dimensions() {
        let a = Matrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]).unwrap();
        let t = a.transpose();

        assert_eq!(t.rows(), 3);
        assert_eq!(t.columns(), 2);
        assert_eq!(t[(0, 1)], 4.0);
        assert_eq!(t[(2, 0)], 3.0);
    }

    #[test]
    fn transpose_twice_is_exact_identity() {
        let a = Matrix::from_rows(&[&[1.5, -2.25, 3.0], &[0.0, 5.125, -6.5]]).unwrap();
        assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_out_of_bounds_panics() {
        let a = Matrix::new(2, 2).unwrap();
        let _ = a[(2, 0)];
    }
}
