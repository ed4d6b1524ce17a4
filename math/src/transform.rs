pub mod projection;

use bytemuck::{Pod, Zeroable};

use super::types::{Matrix3, Matrix4, Vector2};

#[cfg(test)]
mod test_transform_2 {
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    use super::Transform2;
    use crate::types::{Matrix3, Matrix4, Vector2};

    #[test]
    fn identity() {
        let m: Matrix3 = Transform2::identity().into();
        assert_eq!(m, Matrix3::identity());
        assert_eq!(Transform2::default(), Transform2::identity());
    }

    #[test]
    fn origin_lands_on_position() {
        let t = Transform2::identity()
            .with_position(Vector2::new(10.0, -4.0))
            .with_rotation(0.7)
            .with_scale(Vector2::new(2.0, 0.5))
            .with_origin(Vector2::new(3.0, 1.0))
            .with_skew(Vector2::new(0.2, 0.1));
        let m: Matrix3 = t.into();
        assert_abs_diff_eq!(m.transform2(t.origin), t.position, epsilon = 1e-12);
    }

    #[test]
    fn rotate_about_origin() {
        let t = Transform2::identity()
            .with_position(Vector2::new(1.0, 1.0))
            .with_rotation(FRAC_PI_2)
            .with_origin(Vector2::new(1.0, 1.0));
        let m: Matrix4 = t.into();
        assert_abs_diff_eq!(
            m.transform2(Vector2::new(2.0, 1.0)),
            Vector2::new(1.0, 2.0),
            epsilon = 1e-15
        );
    }

    #[test]
    fn skew() {
        let m: Matrix3 = Transform2::identity()
            .with_skew(Vector2::new(0.5, 0.0))
            .into();
        assert_eq!(m.transform2(Vector2::new(1.0, 0.0)), Vector2::new(1.0, 0.0));
        assert_eq!(m.transform2(Vector2::new(0.0, 1.0)), Vector2::new(0.5, 1.0));
        let m: Matrix3 = Transform2::identity()
            .with_skew(Vector2::new(0.0, 0.5))
            .into();
        assert_eq!(m.at(1, 0), 0.5);
        assert_eq!(m.at(0, 1), 0.0);
    }
}

/// Decomposed parameters of a 2D affine transform.
///
/// Converting into a matrix applies, from right to left: move `origin` to
/// the local origin, skew, scale, rotate and finally move to `position`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform2 {
    pub position: Vector2,
    pub scale: Vector2,
    pub origin: Vector2,
    pub skew: Vector2,
    pub rotation: f64,
}

impl Default for Transform2 {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Transform2> for Matrix3 {
    #[inline]
    fn from(value: Transform2) -> Self {
        Matrix3::transformation(
            value.position,
            value.rotation,
            value.scale,
            value.origin,
            value.skew,
        )
    }
}

impl From<Transform2> for Matrix4 {
    #[inline]
    fn from(value: Transform2) -> Self {
        Matrix4::transformation(
            value.position,
            value.rotation,
            value.scale,
            value.origin,
            value.skew,
        )
    }
}

impl Transform2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            position: Vector2::zero(),
            scale: Vector2::new(1.0, 1.0),
            origin: Vector2::zero(),
            skew: Vector2::zero(),
            rotation: 0.0,
        }
    }

    #[inline]
    pub fn with_position(self, position: Vector2) -> Self {
        Self { position, ..self }
    }

    #[inline]
    pub fn with_rotation(self, rotation: f64) -> Self {
        Self { rotation, ..self }
    }

    #[inline]
    pub fn with_scale(self, scale: Vector2) -> Self {
        Self { scale, ..self }
    }

    #[inline]
    pub fn with_origin(self, origin: Vector2) -> Self {
        Self { origin, ..self }
    }

    #[inline]
    pub fn with_skew(self, skew: Vector2) -> Self {
        Self { skew, ..self }
    }
}
