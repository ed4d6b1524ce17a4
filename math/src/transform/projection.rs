//! Right-handed, OpenGL-style view and projection matrices. Clip space depth
//! spans `[-1, 1]` and the camera looks down `-z`.

use crate::scalar;
use crate::types::{Matrix4, Vector3, Vector4};


impl Matrix4 {
    /// Maps the box `[left, right] × [bottom, top] × [-near, -far]` onto the
    /// clip cube.
    #[inline]
    pub fn ortho(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Matrix4 {
        let rml = right - left;
        let tmb = top - bottom;
        let fmn = far - near;
        Matrix4 {
            i: Vector4::new(2.0 / rml, 0.0, 0.0, 0.0),
            j: Vector4::new(0.0, 2.0 / tmb, 0.0, 0.0),
            k: Vector4::new(0.0, 0.0, -2.0 / fmn, 0.0),
            l: Vector4::new(
                -((right + left) / rml),
                -((top + bottom) / tmb),
                -((far + near) / fmn),
                1.0,
            ),
        }
    }

    #[inline]
    pub fn frustum(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Matrix4 {
        let rml = right - left;
        let tmb = top - bottom;
        let fmn = far - near;
        Matrix4 {
            i: Vector4::new(2.0 * near / rml, 0.0, 0.0, 0.0),
            j: Vector4::new(0.0, 2.0 * near / tmb, 0.0, 0.0),
            k: Vector4::new(
                (right + left) / rml,
                (top + bottom) / tmb,
                -(far + near) / fmn,
                -1.0,
            ),
            l: Vector4::new(0.0, 0.0, -2.0 * far * near / fmn, 0.0),
        }
    }

    /// Symmetric perspective projection. `fov_y_deg` is the full vertical
    /// field of view in degrees.
    #[inline]
    pub fn perspective(fov_y_deg: f64, aspect_ratio: f64, near: f64, far: f64) -> Matrix4 {
        let top = near * (0.5 * scalar::radians(fov_y_deg)).tan();
        let right = top * aspect_ratio;
        Self::frustum(-right, right, -top, top, near, far)
    }

    /// View matrix placing `eye` at the origin and looking at `target`.
    ///
    /// `up` must not be parallel to `eye - target`. Otherwise the right axis
    /// has zero length and the returned matrix is singular, with an all-zero
    /// first and second row in its rotation part.
    #[inline]
    pub fn look_at(eye: Vector3, target: Vector3, up: Vector3) -> Matrix4 {
        let b = (eye - target).norm();
        let r = up.cross(b).norm();
        let u = b.cross(r);
        Matrix4 {
            i: Vector4::new(r.x, u.x, b.x, 0.0),
            j: Vector4::new(r.y, u.y, b.y, 0.0),
            k: Vector4::new(r.z, u.z, b.z, 0.0),
            l: Vector4::new(-(eye * r), -(eye * u), -(eye * b), 1.0),
        }
    }
}
