//! Per-frame composition of the viewer's transform chain and export of the
//! resulting matrices as flat row-major buffers for uniform upload.

use serde::{Deserialize, Serialize};

use crate::math::{Vec3, radians};
use crate::matrix::Matrix;
use crate::transform;

/// Near clipping plane shared by both projection modes.
pub const NEAR_PLANE: f64 = 0.1;
/// Far clipping plane shared by both projection modes.
pub const FAR_PLANE: f64 = 2000.0;

/// Position, rotation (three plane angles, radians) and per-axis scale of the
/// displayed model.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectPose {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

/// Camera position and rotation angles (radians).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub rotation: Vec3,
}

/// Projection mode and its single parameter.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum Projection {
    Perspective { fov_degrees: f64 },
    Orthographic { size: f64 },
}

/// Model transform: scale first, then rotation, then translation.
pub fn object_transform(pose: &ObjectPose) -> Matrix {
    let shift = transform::shift(pose.position.x, pose.position.y, pose.position.z);
    let rotation =
        transform::camera_rotation(pose.rotation.x, pose.rotation.y, pose.rotation.z);
    let scale = transform::scale(pose.scale.x, pose.scale.y, pose.scale.z);

    &(&shift * &rotation) * &scale
}

/// Camera view matrix: the inverse of the camera's own motion.
///
/// The rotation angles are negated and fed in y, x, z order, unlike the
/// x, y, z order of [`object_transform`]. The permutation is part of the
/// viewer's coordinate convention and must stay asymmetric.
pub fn camera_view(pose: &CameraPose) -> Matrix {
    let rotation =
        transform::camera_rotation(-pose.rotation.y, -pose.rotation.x, -pose.rotation.z);
    let shift = transform::shift(-pose.position.x, -pose.position.y, -pose.position.z);

    &rotation * &shift
}

/// Projection matrix for the given mode, with the fixed near/far planes.
pub fn projection_matrix(projection: Projection, aspect_ratio: f64) -> Matrix {
    match projection {
        Projection::Perspective { fov_degrees } => {
            transform::perspective(radians(fov_degrees), NEAR_PLANE, FAR_PLANE, aspect_ratio)
        }
        Projection::Orthographic { size } => {
            transform::orthographic(size, NEAR_PLANE, FAR_PLANE, aspect_ratio)
        }
    }
}

/// Total view-projection: `projection * view_to_camera * view`.
pub fn view_projection(projection: &Matrix, view: &Matrix) -> Matrix {
    &(projection * &transform::view_to_camera()) * view
}

/// Row-major flattening of a 4x4 matrix, laid out for direct uniform upload.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FloatArray16 {
    pub data: [f32; 16],
}

impl FloatArray16 {
    /// Flattens `matrix` as `data[row * 4 + col]`.
    ///
    /// # Panics
    ///
    /// Panics unless `matrix` is exactly 4x4.
    pub fn from_matrix(matrix: &Matrix) -> FloatArray16 {
        assert!(
            matrix.rows() == 4 && matrix.columns() == 4,
            "expected a 4x4 matrix, got {}x{}",
            matrix.rows(),
            matrix.columns(),
        );

        let mut data = [0.0f32; 16];
        for row in 0..4 {
            for col in 0..4 {
                data[row * 4 + col] = matrix[(row, col)] as f32;
            }
        }

        FloatArray16 { data }
    }
}

/// The two buffers a renderer consumes each frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameMatrices {
    pub object: FloatArray16,
    pub view_projection: FloatArray16,
}

/// Composes and exports the per-frame matrix pair for one object and camera.
pub fn frame_matrices(
    object: &ObjectPose,
    camera: &CameraPose,
    projection: Projection,
    aspect_ratio: f64,
) -> FrameMatrices {
    log::trace!("composing frame matrices: {projection:?}, aspect {aspect_ratio}");

    let view = camera_view(camera);
    let total = view_projection(&projection_matrix(projection, aspect_ratio), &view);

    FrameMatrices {
        object: FloatArray16::from_matrix(&object_transform(object)),
        view_projection: FloatArray16::from_matrix(&total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{identity, scale, shift};

    #[test]
    fn object_transform_applies_scale_rotation_shift_in_order() {
        let pose = ObjectPose {
            position: Vec3::new(1.0, 2.0, 3.0),
            rotation: Vec3::zero(),
            scale: Vec3::new(2.0, 2.0, 2.0),
        };

        // No rotation, so the composition collapses to shift * scale.
        let expected = &shift(1.0, 2.0, 3.0) * &scale(2.0, 2.0, 2.0);
        assert!(object_transform(&pose).approx_eq(&expected));
    }

    #[test]
    fn camera_view_inverts_camera_translation() {
        let pose = CameraPose {
            position: Vec3::new(5.0, -3.0, 8.0),
            rotation: Vec3::zero(),
        };

        assert!(camera_view(&pose).approx_eq(&shift(-5.0, 3.0, -8.0)));
    }

    #[test]
    fn camera_view_permutes_and_negates_rotation_angles() {
        let pose = CameraPose {
            position: Vec3::zero(),
            rotation: Vec3::new(0.25, -0.5, 1.0),
        };

        // y, x, z order with negated angles; x, y, z would be wrong.
        let expected = transform::camera_rotation(0.5, -0.25, -1.0);
        assert!(camera_view(&pose).approx_eq(&expected));

        let symmetric = transform::camera_rotation(-0.25, 0.5, -1.0);
        assert!(!camera_view(&pose).approx_eq(&symmetric));
    }

    #[test]
    fn view_projection_inserts_basis_change() {
        let projection = projection_matrix(Projection::Orthographic { size: 2.0 }, 1.0);
        let view = identity();

        let expected = &projection * &transform::view_to_camera();
        assert!(view_projection(&projection, &view).approx_eq(&expected));
    }

    #[test]
    fn flat_array_is_row_major() {
        let mut m = identity();
        m[(0, 3)] = 7.0;
        m[(2, 1)] = -4.0;

        let flat = FloatArray16::from_matrix(&m);
        assert_eq!(flat.data[3], 7.0);
        assert_eq!(flat.data[2 * 4 + 1], -4.0);
        assert_eq!(flat.data[0], 1.0);
        assert_eq!(flat.data[15], 1.0);
    }

    #[test]
    #[should_panic(expected = "expected a 4x4 matrix")]
    fn flat_array_rejects_other_shapes() {
        let m = Matrix::new(3, 3).unwrap();
        FloatArray16::from_matrix(&m);
    }

    #[test]
    fn frame_matrices_with_neutral_poses() {
        let object = ObjectPose {
            position: Vec3::zero(),
            rotation: Vec3::zero(),
            scale: Vec3::one(),
        };
        let camera = CameraPose {
            position: Vec3::zero(),
            rotation: Vec3::zero(),
        };

        let frame = frame_matrices(
            &object,
            &camera,
            Projection::Orthographic { size: 1.0 },
            1.0,
        );

        assert_eq!(frame.object, FloatArray16::from_matrix(&identity()));

        let expected = view_projection(
            &projection_matrix(Projection::Orthographic { size: 1.0 }, 1.0),
            &identity(),
        );
        assert_eq!(
            frame.view_projection,
            FloatArray16::from_matrix(&expected)
        );
    }

    #[test]
    fn projection_config_round_trips_through_json() {
        let projection = Projection::Perspective { fov_degrees: 60.0 };
        let json = serde_json::to_string(&projection).unwrap();
        let back: Projection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, projection);

        let pose = ObjectPose {
            position: Vec3::new(1.0, 2.0, 3.0),
            rotation: Vec3::new(0.1, 0.2, 0.3),
            scale: Vec3::one(),
        };
        let json = serde_json::to_string(&pose).unwrap();
        let back: ObjectPose = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pose);
    }
}
