use approx::AbsDiffEq;
use bytemuck::{Pod, Zeroable};
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use super::check_det;
use crate::error::{read_le_f64, MathResult};
use crate::scalar::EPSILON;
use crate::types::{Axis, Matrix2, Matrix4, Vector2, Vector3};


#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix3 {
    pub i: Vector3,
    pub j: Vector3,
    pub k: Vector3,
}

impl Neg for Matrix3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            i: -self.i,
            j: -self.j,
            k: -self.k,
        }
    }
}

impl Add for Matrix3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
            k: self.k + rhs.k,
        }
    }
}

impl Sub for Matrix3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            i: self.i - rhs.i,
            j: self.j - rhs.j,
            k: self.k - rhs.k,
        }
    }
}

impl Mul<Matrix3> for f64 {
    type Output = Matrix3;
    #[inline]
    fn mul(self, rhs: Matrix3) -> Self::Output {
        Matrix3 {
            i: self * rhs.i,
            j: self * rhs.j,
            k: self * rhs.k,
        }
    }
}

impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Self::Output {
        rhs.x * self.i + rhs.y * self.j + rhs.z * self.k
    }
}

impl Mul<Matrix3> for Matrix3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            i: self * rhs.i,
            j: self * rhs.j,
            k: self * rhs.k,
        }
    }
}

impl Index<usize> for Matrix3 {
    type Output = Vector3;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &bytemuck::cast_ref::<Self, [Vector3; 3]>(self)[index]
    }
}

impl IndexMut<usize> for Matrix3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut bytemuck::cast_mut::<Self, [Vector3; 3]>(self)[index]
    }
}

impl From<Matrix2> for Matrix3 {
    #[inline]
    fn from(value: Matrix2) -> Self {
        Self {
            i: value.i.into(),
            j: value.j.into(),
            k: Vector3::z(),
        }
    }
}

/// Keeps the upper-left linear block, dropping translation and the
/// projective row.
impl From<Matrix4> for Matrix3 {
    #[inline]
    fn from(value: Matrix4) -> Self {
        Self {
            i: value.i.into(),
            j: value.j.into(),
            k: value.k.into(),
        }
    }
}

impl AbsDiffEq for Matrix3 {
    type Epsilon = f64;

    #[inline]
    fn default_epsilon() -> f64 {
        EPSILON
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.i.abs_diff_eq(&other.i, epsilon)
            && self.j.abs_diff_eq(&other.j, epsilon)
            && self.k.abs_diff_eq(&other.k, epsilon)
    }
}

impl Matrix3 {
    #[inline]
    pub fn try_from_le_bytes(bytes: &[u8]) -> MathResult<Self> {
        read_le_f64::<9>(bytes).map(Self::from_cols_array)
    }

    #[inline]
    pub fn new(i: Vector3, j: Vector3, k: Vector3) -> Self {
        Self { i, j, k }
    }

    #[inline]
    pub fn zero() -> Self {
        Self {
            i: Vector3::zero(),
            j: Vector3::zero(),
            k: Vector3::zero(),
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Self {
            i: Vector3::x(),
            j: Vector3::y(),
            k: Vector3::z(),
        }
    }

    #[inline]
    pub fn from_cols_array(values: [f64; 9]) -> Self {
        bytemuck::cast(values)
    }

    #[inline]
    pub fn to_cols_array(self) -> [f64; 9] {
        bytemuck::cast(self)
    }

    #[inline]
    pub fn as_array(&self) -> &[f64; 9] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f64 {
        self[col][row]
    }

    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut f64 {
        &mut self[col][row]
    }

    #[inline]
    pub fn col(self, col: usize) -> Vector3 {
        self[col]
    }

    #[inline]
    pub fn row(self, row: usize) -> Vector3 {
        Vector3::new(self.i[row], self.j[row], self.k[row])
    }

    /// 2D affine translation stored in the third column.
    #[inline]
    pub fn translate(t: Vector2) -> Self {
        Self {
            i: Vector3::x(),
            j: Vector3::y(),
            k: Vector3::new(t.x, t.y, 1.0),
        }
    }

    #[inline]
    pub fn scale(s: Vector3) -> Self {
        Self {
            i: Vector3::new(s.x, 0.0, 0.0),
            j: Vector3::new(0.0, s.y, 0.0),
            k: Vector3::new(0.0, 0.0, s.z),
        }
    }

    #[inline]
    pub fn scale_xy(s: Vector2) -> Self {
        Self::scale(Vector3::new(s.x, s.y, 1.0))
    }

    /// Coupled shear: `e21 = e31 = s.x`, `e12 = e32 = s.y`, `e13 = e23 = s.z`.
    #[inline]
    pub fn shear(s: Vector3) -> Self {
        Self {
            i: Vector3::new(1.0, s.x, s.x),
            j: Vector3::new(s.y, 1.0, s.y),
            k: Vector3::new(s.z, s.z, 1.0),
        }
    }

    #[inline]
    pub fn shear_xy(s: Vector2) -> Self {
        Self {
            i: Vector3::new(1.0, s.x, 0.0),
            j: Vector3::new(s.y, 1.0, 0.0),
            k: Vector3::z(),
        }
    }

    #[inline]
    pub fn rotate_x(rad: f64) -> Self {
        let cos = rad.cos();
        let sin = rad.sin();
        Self {
            i: Vector3::x(),
            j: Vector3::new(0.0, cos, sin),
            k: Vector3::new(0.0, -sin, cos),
        }
    }

    #[inline]
    pub fn rotate_y(rad: f64) -> Self {
        let cos = rad.cos();
        let sin = rad.sin();
        Self {
            i: Vector3::new(cos, 0.0, -sin),
            j: Vector3::y(),
            k: Vector3::new(sin, 0.0, cos),
        }
    }

    #[inline]
    pub fn rotate_z(rad: f64) -> Self {
        let cos = rad.cos();
        let sin = rad.sin();
        Self {
            i: Vector3::new(cos, sin, 0.0),
            j: Vector3::new(-sin, cos, 0.0),
            k: Vector3::z(),
        }
    }

    #[inline]
    pub fn rotate(axis: Axis, rad: f64) -> Self {
        match axis {
            Axis::X => Self::rotate_x(rad),
            Axis::Y => Self::rotate_y(rad),
            Axis::Z => Self::rotate_z(rad),
        }
    }

    /// Rotation by `rad` about a unit-length `axis` (Rodrigues form).
    #[inline]
    pub fn rotate_axis(rad: f64, axis: Vector3) -> Self {
        let c = rad.cos();
        let s = rad.sin();
        let t = 1.0 - c;
        let Vector3 { x, y, z } = axis;
        Self {
            i: Vector3::new(x * x * t + c, x * y * t + z * s, x * z * t - y * s),
            j: Vector3::new(x * y * t - z * s, y * y * t + c, y * z * t + x * s),
            k: Vector3::new(x * z * t + y * s, y * z * t - x * s, z * z * t + c),
        }
    }

    /// 2D affine matrix from decomposed parameters, applied as
    /// `Move * Rotate * Scale * Skew * Origin`.
    ///
    /// `origin` is the pivot in local space that ends up at `position`;
    /// `skew` holds the shear factors along x and y.
    #[inline]
    pub fn transformation(
        position: Vector2,
        rotation: f64,
        scale: Vector2,
        origin: Vector2,
        skew: Vector2,
    ) -> Self {
        let [a, b, c, d, tx, ty] = affine_terms(position, rotation, scale, origin, skew);
        Self {
            i: Vector3::new(a, b, 0.0),
            j: Vector3::new(c, d, 0.0),
            k: Vector3::new(tx, ty, 1.0),
        }
    }

    /// Applies the matrix to `v` as a 2D point: `(e11 x + e12 y + e13, e21 x + e22 y + e23)`.
    #[inline]
    pub fn transform2(self, v: Vector2) -> Vector2 {
        Vector2 {
            x: self.i.x * v.x + self.j.x * v.y + self.k.x,
            y: self.i.y * v.x + self.j.y * v.y + self.k.y,
        }
    }

    #[inline]
    pub fn transform3(self, v: Vector3) -> Vector3 {
        self * v
    }

    #[inline]
    pub fn transpose(self) -> Self {
        Self {
            i: Vector3::new(self.i.x, self.j.x, self.k.x),
            j: Vector3::new(self.i.y, self.j.y, self.k.y),
            k: Vector3::new(self.i.z, self.j.z, self.k.z),
        }
    }

    #[inline]
    pub fn det(self) -> f64 {
        let [e11, e21, e31, e12, e22, e32, e13, e23, e33] = self.to_cols_array();
        e11 * (e22 * e33 - e32 * e23) - e21 * (e12 * e33 - e32 * e13)
            + e31 * (e12 * e23 - e22 * e13)
    }

    /// Unchecked inverse. A singular matrix yields non-finite elements.
    #[inline]
    pub fn inv(self) -> Self {
        self.adj_scaled(1.0 / self.det())
    }

    #[inline]
    pub fn try_inv(self) -> MathResult<Self> {
        let det = check_det("Matrix3", self.det())?;
        Ok(self.adj_scaled(1.0 / det))
    }

    #[inline]
    pub fn trace(self) -> f64 {
        self.i.x + self.j.y + self.k.z
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.i.is_valid() && self.j.is_valid() && self.k.is_valid()
    }

    #[inline]
    pub fn approx_equal(self, rhs: Self) -> bool {
        self.i.approx_equal(rhs.i) && self.j.approx_equal(rhs.j) && self.k.approx_equal(rhs.k)
    }

    /// Adjugate scaled by `det`, the reciprocal determinant.
    #[inline]
    fn adj_scaled(self, det: f64) -> Self {
        let [e11, e21, e31, e12, e22, e32, e13, e23, e33] = self.to_cols_array();
        Self {
            i: Vector3 {
                x: det * (e22 * e33 - e32 * e23),
                y: -det * (e21 * e33 - e31 * e23),
                z: det * (e21 * e32 - e31 * e22),
            },
            j: Vector3 {
                x: -det * (e12 * e33 - e32 * e13),
                y: det * (e11 * e33 - e31 * e13),
                z: -det * (e11 * e32 - e31 * e12),
            },
            k: Vector3 {
                x: det * (e12 * e23 - e22 * e13),
                y: -det * (e11 * e23 - e21 * e13),
                z: det * (e11 * e22 - e21 * e12),
            },
        }
    }
}

/// Linear part `[a, b, c, d]` (column-major 2×2) and translation `[tx, ty]`
/// of the decomposed 2D affine transform.
#[inline]
pub(super) fn affine_terms(
    position: Vector2,
    rotation: f64,
    scale: Vector2,
    origin: Vector2,
    skew: Vector2,
) -> [f64; 6] {
    let c = rotation.cos();
    let s = rotation.sin();
    let Vector2 { x: sx, y: sy } = scale;
    let Vector2 { x: kx, y: ky } = skew;
    let a = c * sx - ky * s * sy;
    let b = s * sx + ky * c * sy;
    let cc = kx * c * sx - s * sy;
    let d = kx * s * sx + c * sy;
    let tx = position.x - origin.x * a - origin.y * cc;
    let ty = position.y - origin.x * b - origin.y * d;
    [a, b, cc, d, tx, ty]
}
