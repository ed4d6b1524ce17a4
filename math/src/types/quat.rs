use approx::AbsDiffEq;
use bytemuck::{Pod, Zeroable};
use std::ops::{Add, Mul, Neg, Sub};

use super::{Matrix3, Matrix4, Vector3};
use crate::error::{read_le_f64, MathResult};
use crate::scalar::{self, EPSILON};


#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for Quat {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl Neg for Quat {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            w: -self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Add for Quat {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            w: self.w + rhs.w,
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Quat {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            w: self.w - rhs.w,
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Mul<Quat> for f64 {
    type Output = Quat;
    #[inline]
    fn mul(self, rhs: Quat) -> Self::Output {
        Quat {
            w: self * rhs.w,
            x: self * rhs.x,
            y: self * rhs.y,
            z: self * rhs.z,
        }
    }
}

/// Hamilton product. The rotation `a * b` applies `b` first.
impl Mul<Quat> for Quat {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Quat) -> Self::Output {
        Self {
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        }
    }
}

impl Mul<Vector3> for Quat {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Self::Output {
        self.rotate(rhs)
    }
}

impl Mul<Matrix3> for Quat {
    type Output = Matrix3;
    #[inline]
    fn mul(self, rhs: Matrix3) -> Self::Output {
        Matrix3::new(self * rhs.i, self * rhs.j, self * rhs.k)
    }
}

impl From<Quat> for Matrix3 {
    #[inline]
    fn from(q: Quat) -> Self {
        let Quat { w, x, y, z } = q;
        Matrix3 {
            i: Vector3::new(
                1.0 - 2.0 * (y * y + z * z),
                2.0 * (x * y + w * z),
                2.0 * (x * z - w * y),
            ),
            j: Vector3::new(
                2.0 * (x * y - w * z),
                1.0 - 2.0 * (x * x + z * z),
                2.0 * (y * z + w * x),
            ),
            k: Vector3::new(
                2.0 * (x * z + w * y),
                2.0 * (y * z - w * x),
                1.0 - 2.0 * (x * x + y * y),
            ),
        }
    }
}

impl From<Quat> for Matrix4 {
    #[inline]
    fn from(value: Quat) -> Self {
        Matrix3::from(value).into()
    }
}

/// Extracts the rotation of a proper orthonormal matrix, branching on the
/// largest diagonal term.
impl From<Matrix3> for Quat {
    #[inline]
    fn from(value: Matrix3) -> Self {
        let t;
        let q;
        if value.k.z < 0.0 {
            if value.i.x > value.j.y {
                t = 1.0 + value.i.x - value.j.y - value.k.z;
                q = Quat::new(
                    value.j.z - value.k.y,
                    t,
                    value.i.y + value.j.x,
                    value.k.x + value.i.z,
                );
            } else {
                t = 1.0 - value.i.x + value.j.y - value.k.z;
                q = Quat::new(
                    value.k.x - value.i.z,
                    value.i.y + value.j.x,
                    t,
                    value.j.z + value.k.y,
                );
            }
        } else if value.i.x < -value.j.y {
            t = 1.0 - value.i.x - value.j.y + value.k.z;
            q = Quat::new(
                value.i.y - value.j.x,
                value.k.x + value.i.z,
                value.j.z + value.k.y,
                t,
            );
        } else {
            t = 1.0 + value.i.x + value.j.y + value.k.z;
            q = Quat::new(
                t,
                value.j.z - value.k.y,
                value.k.x - value.i.z,
                value.i.y - value.j.x,
            );
        }

        (0.5 / t.sqrt()) * q
    }
}

impl From<[f64; 4]> for Quat {
    #[inline]
    fn from([w, x, y, z]: [f64; 4]) -> Self {
        Self { w, x, y, z }
    }
}

impl From<Quat> for [f64; 4] {
    #[inline]
    fn from(value: Quat) -> Self {
        value.to_array()
    }
}

impl AbsDiffEq for Quat {
    type Epsilon = f64;

    #[inline]
    fn default_epsilon() -> f64 {
        EPSILON
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.w.abs_diff_eq(&other.w, epsilon)
            && self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl Quat {
    #[inline]
    pub fn try_from_le_bytes(bytes: &[u8]) -> MathResult<Self> {
        read_le_f64::<4>(bytes).map(Self::from)
    }

    #[inline]
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    #[inline]
    pub fn identity() -> Self {
        Self {
            w: 1.0,
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotation by `rad` about `axis`. A zero-length axis yields the identity.
    #[inline]
    pub fn from_angle_axis(axis: Vector3, rad: f64) -> Self {
        let len = axis.length();
        if scalar::equal(len, 0.0) {
            log::trace!("Quat::from_angle_axis: zero-length axis, returning identity");
            return Self::identity();
        }
        let half = 0.5 * rad;
        let v = (half.sin() / len) * axis;
        Self {
            w: half.cos(),
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }

    /// Builds `qx * qy * qz` from X-Y-Z intrinsic Euler angles in radians.
    #[inline]
    pub fn from_euler(angles: Vector3) -> Self {
        let (sx, cx) = (0.5 * angles.x).sin_cos();
        let (sy, cy) = (0.5 * angles.y).sin_cos();
        let (sz, cz) = (0.5 * angles.z).sin_cos();
        Self {
            w: cx * cy * cz - sx * sy * sz,
            x: sx * cy * cz + cx * sy * sz,
            y: cx * sy * cz - sx * cy * sz,
            z: cx * cy * sz + sx * sy * cz,
        }
    }

    /// X-Y-Z intrinsic Euler angles of a unit quaternion.
    #[inline]
    pub fn to_euler(self) -> Vector3 {
        let Self { w, x, y, z } = self;
        Vector3 {
            x: f64::atan2(2.0 * (w * x - y * z), 1.0 - 2.0 * (x * x + y * y)),
            y: (2.0 * (x * z + w * y)).clamp(-1.0, 1.0).asin(),
            z: f64::atan2(2.0 * (w * z - x * y), 1.0 - 2.0 * (y * y + z * z)),
        }
    }

    #[inline]
    pub fn as_array(&self) -> &[f64; 4] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn to_array(self) -> [f64; 4] {
        [self.w, self.x, self.y, self.z]
    }

    #[inline]
    pub fn vector(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn length_square(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_square().sqrt()
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f64 {
        self.w * rhs.w + self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn conjugate(self) -> Self {
        Self {
            w: self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }

    #[inline]
    pub fn inv(self) -> Self {
        (1.0 / self.length_square()) * self.conjugate()
    }

    /// Rescales the quaternion in place to `length` and returns its previous
    /// length. A zero-length quaternion is left untouched.
    #[inline]
    pub fn normalize(&mut self, length: f64) -> f64 {
        let len = self.length();
        if scalar::equal(len, 0.0) {
            log::trace!("Quat::normalize: zero-length quaternion left unchanged");
        } else {
            *self = (length / len) * *self;
        }
        len
    }

    #[inline]
    pub fn norm(self) -> Self {
        let mut q = self;
        q.normalize(1.0);
        q
    }

    /// Spherical interpolation without renormalization. Nearly identical
    /// inputs fall back to linear weights.
    #[inline]
    pub fn slerp(from: Self, to: Self, t: f64) -> Self {
        let dot = from.dot(to);
        let (w_from, w_to) = if (1.0 - dot) > EPSILON {
            let omega = dot.acos();
            let sin_omega = omega.sin();
            (
                ((1.0 - t) * omega).sin() / sin_omega,
                (t * omega).sin() / sin_omega,
            )
        } else {
            (1.0 - t, t)
        };
        w_from * from + w_to * to
    }

    /// Vector part of `q * (0, v) * conj(q)`. Expects a unit quaternion.
    #[inline]
    pub fn rotate(self, v: Vector3) -> Vector3 {
        let p = Quat {
            w: 0.0,
            x: v.x,
            y: v.y,
            z: v.z,
        };
        (self * p * self.conjugate()).vector()
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.w.is_finite() && self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub fn approx_equal(self, rhs: Self) -> bool {
        scalar::equal(self.w, rhs.w)
            && scalar::equal(self.x, rhs.x)
            && scalar::equal(self.y, rhs.y)
            && scalar::equal(self.z, rhs.z)
    }
}
