mod error;
mod math;
mod matrix;
mod pipeline;
mod transform;

// Re-export the main public interface
pub use error::MatrixError;
pub use math::{PI, Vec3, radians};
pub use matrix::{EPSILON, Matrix, MinorView, determinant_of_view};
pub use pipeline::{
    CameraPose, FAR_PLANE, FloatArray16, FrameMatrices, NEAR_PLANE, ObjectPose, Projection,
    camera_view, frame_matrices, object_transform, projection_matrix, view_projection,
};
pub use transform::{
    Axis, camera_rotation, identity, orthographic, perspective, rotation, scale, scale_shift,
    shift, view_to_camera,
};
