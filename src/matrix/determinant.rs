use super::{Matrix, MinorView};
use crate::error::MatrixError;

impl Matrix {
    /// Determinant by recursive Laplace expansion over minor views.
    ///
    /// Factorial in the matrix size; a deliberate simplicity tradeoff for the
    /// small (typically 4x4) matrices this library composes, not a
    /// general-purpose determinant algorithm.
    pub fn determinant(&self) -> Result<f64, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                columns: self.columns(),
            });
        }

        determinant_of_view(&MinorView::of_matrix(self, None, None))
    }

    /// Matrix of cofactors: each cell holds the signed determinant of the
    /// minor obtained by removing that cell's row and column.
    pub fn cofactor_matrix(&self) -> Result<Matrix, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                columns: self.columns(),
            });
        }

        // A 1x1 matrix has no proper minors; its single cofactor is 1.
        if self.rows() == 1 {
            let mut result = Matrix::new(1, 1)?;
            result[(0, 0)] = 1.0;
            return Ok(result);
        }

        let mut result = Matrix::new(self.rows(), self.columns())?;
        for i in 0..self.rows() {
            for j in 0..self.columns() {
                let minor = MinorView::of_matrix(self, Some(i), Some(j));
                result[(i, j)] = sign(i, j) * determinant_of_view(&minor)?;
            }
        }

        Ok(result)
    }

    /// Inverse via the adjugate: `transpose(cofactors) / determinant`.
    /// A determinant of exactly zero is [`MatrixError::Singular`].
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        let determinant = self.determinant()?;
        if determinant == 0.0 {
            return Err(MatrixError::Singular);
        }

        let adjugate = self.cofactor_matrix()?.transpose();
        Ok(adjugate.mul_scalar(1.0 / determinant))
    }
}

/// Recursive cofactor expansion along row 0 of the view.
pub fn determinant_of_view(view: &MinorView<'_>) -> Result<f64, MatrixError> {
    if view.rows() == 1 || view.columns() == 1 {
        if view.rows() != 1 || view.columns() != 1 {
            return Err(MatrixError::MalformedMinor {
                rows: view.rows(),
                columns: view.columns(),
            });
        }
        return Ok(view.get(0, 0));
    }

    let mut sum = 0.0;
    for j in 0..view.columns() {
        let section = MinorView::of_minor(view, Some(0), Some(j));
        sum += sign(0, j) * view.get(0, j) * determinant_of_view(&section)?;
    }

    Ok(sum)
}

fn sign(i: usize, j: usize) -> f64 {
    if (i + j) % 2 == 0 { 1.0 } else { -1.0 }
}
