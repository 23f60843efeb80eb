use thiserror::Error;

/// Errors produced by the generic matrix layer.
///
/// Two classes, mirroring the distinction between a structurally unusable
/// operand and well-formed operands that are mathematically incompatible.
/// `is_calc_error` tells them apart.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Requested dimensions cannot form a matrix.
    #[error("matrix dimensions must be positive, got {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },

    /// Elementwise operation on differently shaped matrices.
    #[error("shape mismatch: {left_rows}x{left_columns} vs {right_rows}x{right_columns}")]
    ShapeMismatch {
        left_rows: usize,
        left_columns: usize,
        right_rows: usize,
        right_columns: usize,
    },

    /// Product where the left operand's column count does not match the
    /// right operand's row count.
    #[error("incompatible product: left has {left_columns} columns, right has {right_rows} rows")]
    IncompatibleProduct {
        left_columns: usize,
        right_rows: usize,
    },

    /// Determinant, cofactor matrix or inverse of a non-square matrix.
    #[error("matrix is not square: {rows}x{columns}")]
    NotSquare { rows: usize, columns: usize },

    /// A minor view degenerated to a single row or a single column but not
    /// both, so no determinant exists for it.
    #[error("malformed minor view: {rows}x{columns}")]
    MalformedMinor { rows: usize, columns: usize },

    /// Inverse of a matrix whose determinant is zero.
    #[error("matrix is singular")]
    Singular,
}

impl MatrixError {
    /// True for errors about mathematically incompatible inputs, false for
    /// structural failures.
    pub fn is_calc_error(&self) -> bool {
        !matches!(self, MatrixError::InvalidDimensions { .. })
    }
}
