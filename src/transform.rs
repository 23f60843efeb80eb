//! 4x4 transform builders for the viewer pipeline.
//!
//! All builders return freshly allocated 4x4 matrices and cannot fail: their
//! shapes are fixed, so internal products go through the panicking `Mul`
//! operator rather than `Result` plumbing.

use crate::matrix::Matrix;

/// Spatial axis, used to select the plane of a rotation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

fn unit() -> Matrix {
    let mut m = Matrix::new(4, 4).expect("4x4 dimensions are valid");
    for i in 0..4 {
        m[(i, i)] = 1.0;
    }
    m
}

/// 4x4 identity.
pub fn identity() -> Matrix {
    unit()
}

/// Translation by `(dx, dy, dz)`, stored in column 3.
pub fn shift(dx: f64, dy: f64, dz: f64) -> Matrix {
    let mut m = unit();
    m[(0, 3)] = dx;
    m[(1, 3)] = dy;
    m[(2, 3)] = dz;
    m
}

/// Per-axis scale on the diagonal.
pub fn scale(sx: f64, sy: f64, sz: f64) -> Matrix {
    let mut m = unit();
    m[(0, 0)] = sx;
    m[(1, 1)] = sy;
    m[(2, 2)] = sz;
    m
}

/// Scale and translation collapsed into one matrix, equivalent to
/// `shift(d...) * scale(s...)`.
pub fn scale_shift(sx: f64, sy: f64, sz: f64, dx: f64, dy: f64, dz: f64) -> Matrix {
    let mut m = unit();
    m[(0, 0)] = sx;
    m[(1, 1)] = sy;
    m[(2, 2)] = sz;
    m[(0, 3)] = dx;
    m[(1, 3)] = dy;
    m[(2, 3)] = dz;
    m
}

/// Rotation by `angle` radians in the plane spanned by the two axes, placed
/// as a standard 2D rotation block at their indices.
pub fn rotation(angle: f64, from: Axis, into: Axis) -> Matrix {
    let (from, into) = (from.index(), into.index());

    let mut m = unit();
    m[(from, from)] = angle.cos();
    m[(into, into)] = angle.cos();
    m[(from, into)] = -angle.sin();
    m[(into, from)] = angle.sin();
    m
}

/// Three plane rotations composed in the fixed order xz, then yz, then xy.
/// The order is part of the viewer's rotation convention and not
/// interchangeable.
pub fn camera_rotation(angle_xz: f64, angle_yz: f64, angle_xy: f64) -> Matrix {
    let xz = rotation(angle_xz, Axis::X, Axis::Z);
    let yz = rotation(angle_yz, Axis::Y, Axis::Z);
    let xy = rotation(angle_xy, Axis::X, Axis::Y);

    &(&xz * &yz) * &xy
}

/// Constant basis change between the viewer's "up" convention and the
/// camera's: axis 1 maps to axis 2, axis 2 to negated axis 1.
pub fn view_to_camera() -> Matrix {
    let mut m = Matrix::new(4, 4).expect("4x4 dimensions are valid");
    m[(0, 0)] = 1.0;
    m[(1, 2)] = 1.0;
    m[(2, 1)] = -1.0;
    m[(3, 3)] = 1.0;
    m
}

/// Orthographic-style projection sized by `size`, with the depth range packed
/// into row 2.
pub fn orthographic(size: f64, near: f64, far: f64, aspect_ratio: f64) -> Matrix {
    let mut m = unit();
    m[(0, 0)] = 1.0 / size;
    m[(1, 1)] = 1.0 / size * aspect_ratio;
    m[(2, 2)] = 2.0 / (far - near);
    m[(2, 3)] = (far + near) / (far - near);
    m
}

/// Right-handed perspective projection, `fov` in radians.
///
/// Depth is reversed-Z: far maps to 0 and near to 1. A consumer expecting the
/// standard Z convention must flip its depth test (the viewer renders with
/// GEQUAL).
pub fn perspective(fov: f64, near: f64, far: f64, aspect_ratio: f64) -> Matrix {
    let mut m = unit();
    m[(0, 0)] = 1.0 / (aspect_ratio * (fov / 2.0).tan());
    m[(1, 1)] = 1.0 / (fov / 2.0).tan();
    m[(2, 2)] = (far + near) / (far - near);
    m[(2, 3)] = 2.0 * (far * near) / (far - near);
    m[(3, 2)] = -1.0;
    m[(3, 3)] = 0.0;
    m
}
