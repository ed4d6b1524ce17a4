mod matrix;
mod quat;
mod vector;

pub use matrix::{Matrix2, Matrix3, Matrix4};
pub use quat::Quat;
pub use vector::{Vector2, Vector3, Vector4};

/// Basis axis of the right-handed 3D coordinate system.
#[derive(strum::EnumIter, strum::EnumCount, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}
