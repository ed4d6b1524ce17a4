//! Double precision vectors, matrices and quaternions for 2D/3D transforms.
//!
//! Matrices are stored column-major: element `(row, col)` of an `N×N` matrix
//! lives at flat index `col * N + row`, which is also the byte layout exposed
//! through `bytemuck`.

pub mod error;
pub mod scalar;
pub mod transform;
pub mod types;

pub use error::{MathError, MathResult};
pub use transform::Transform2;
pub use types::{Axis, Matrix2, Matrix3, Matrix4, Quat, Vector2, Vector3, Vector4};
