use approx::AbsDiffEq;
use bytemuck::{Pod, Zeroable};
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use super::{check_det, matrix3::affine_terms};
use crate::error::{read_le_f64, MathResult};
use crate::scalar::EPSILON;
use crate::types::{Axis, Matrix2, Matrix3, Vector2, Vector3, Vector4};


#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix4 {
    pub i: Vector4,
    pub j: Vector4,
    pub k: Vector4,
    pub l: Vector4,
}

impl Neg for Matrix4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            i: -self.i,
            j: -self.j,
            k: -self.k,
            l: -self.l,
        }
    }
}

impl Add for Matrix4 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
            k: self.k + rhs.k,
            l: self.l + rhs.l,
        }
    }
}

impl Sub for Matrix4 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            i: self.i - rhs.i,
            j: self.j - rhs.j,
            k: self.k - rhs.k,
            l: self.l - rhs.l,
        }
    }
}

impl Mul<Matrix4> for f64 {
    type Output = Matrix4;
    #[inline]
    fn mul(self, rhs: Matrix4) -> Self::Output {
        Matrix4 {
            i: self * rhs.i,
            j: self * rhs.j,
            k: self * rhs.k,
            l: self * rhs.l,
        }
    }
}

impl Mul<Vector4> for Matrix4 {
    type Output = Vector4;
    #[inline]
    fn mul(self, rhs: Vector4) -> Self::Output {
        rhs.x * self.i + rhs.y * self.j + rhs.z * self.k + rhs.w * self.l
    }
}

impl Mul<Matrix4> for Matrix4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            i: self * rhs.i,
            j: self * rhs.j,
            k: self * rhs.k,
            l: self * rhs.l,
        }
    }
}

impl Index<usize> for Matrix4 {
    type Output = Vector4;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &bytemuck::cast_ref::<Self, [Vector4; 4]>(self)[index]
    }
}

impl IndexMut<usize> for Matrix4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut bytemuck::cast_mut::<Self, [Vector4; 4]>(self)[index]
    }
}

impl From<Matrix2> for Matrix4 {
    #[inline]
    fn from(value: Matrix2) -> Self {
        Self {
            i: value.i.into(),
            j: value.j.into(),
            k: Vector4::z(),
            l: Vector4::w(),
        }
    }
}

impl From<Matrix3> for Matrix4 {
    #[inline]
    fn from(value: Matrix3) -> Self {
        Self {
            i: value.i.into(),
            j: value.j.into(),
            k: value.k.into(),
            l: Vector4::w(),
        }
    }
}

impl AbsDiffEq for Matrix4 {
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
            && self.l.abs_diff_eq(&other.l, epsilon)
    }
}

impl Matrix4 {
    #[inline]
    pub fn try_from_le_bytes(bytes: &[u8]) -> MathResult<Self> {
        read_le_f64::<16>(bytes).map(Self::from_cols_array)
    }

    #[inline]
    pub fn new(i: Vector4, j: Vector4, k: Vector4, l: Vector4) -> Self {
        Self { i, j, k, l }
    }

    #[inline]
    pub fn zero() -> Self {
        Self {
            i: Vector4::zero(),
            j: Vector4::zero(),
            k: Vector4::zero(),
            l: Vector4::zero(),
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Self {
            i: Vector4::x(),
            j: Vector4::y(),
            k: Vector4::z(),
            l: Vector4::w(),
        }
    }

    #[inline]
    pub fn from_cols_array(values: [f64; 16]) -> Self {
        bytemuck::cast(values)
    }

    #[inline]
    pub fn to_cols_array(self) -> [f64; 16] {
        bytemuck::cast(self)
    }

    #[inline]
    pub fn as_array(&self) -> &[f64; 16] {
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
    pub fn col(self, col: usize) -> Vector4 {
        self[col]
    }

    #[inline]
    pub fn row(self, row: usize) -> Vector4 {
        Vector4::new(self.i[row], self.j[row], self.k[row], self.l[row])
    }

    #[inline]
    pub fn translate(t: Vector3) -> Self {
        Self {
            i: Vector4::x(),
            j: Vector4::y(),
            k: Vector4::z(),
            l: Vector4::point(t),
        }
    }

    #[inline]
    pub fn translate_xy(t: Vector2) -> Self {
        Self::translate(Vector3::from(t))
    }

    #[inline]
    pub fn scale(s: Vector3) -> Self {
        Matrix3::scale(s).into()
    }

    #[inline]
    pub fn scale_xy(s: Vector2) -> Self {
        Matrix3::scale_xy(s).into()
    }

    #[inline]
    pub fn shear(s: Vector3) -> Self {
        Matrix3::shear(s).into()
    }

    #[inline]
    pub fn shear_xy(s: Vector2) -> Self {
        Matrix3::shear_xy(s).into()
    }

    #[inline]
    pub fn rotate_x(rad: f64) -> Self {
        Matrix3::rotate_x(rad).into()
    }

    #[inline]
    pub fn rotate_y(rad: f64) -> Self {
        Matrix3::rotate_y(rad).into()
    }

    #[inline]
    pub fn rotate_z(rad: f64) -> Self {
        Matrix3::rotate_z(rad).into()
    }

    #[inline]
    pub fn rotate(axis: Axis, rad: f64) -> Self {
        Matrix3::rotate(axis, rad).into()
    }

    #[inline]
    pub fn rotate_axis(rad: f64, axis: Vector3) -> Self {
        Matrix3::rotate_axis(rad, axis).into()
    }

    /// Same closed form as [`Matrix3::transformation`], with the translation
    /// stored in the fourth column.
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
            i: Vector4::new(a, b, 0.0, 0.0),
            j: Vector4::new(c, d, 0.0, 0.0),
            k: Vector4::z(),
            l: Vector4::new(tx, ty, 0.0, 1.0),
        }
    }

    #[inline]
    pub fn transform2(self, v: Vector2) -> Vector2 {
        Vector2 {
            x: self.i.x * v.x + self.j.x * v.y + self.l.x,
            y: self.i.y * v.x + self.j.y * v.y + self.l.y,
        }
    }

    /// Applies the matrix to `v` as an affine point. The projective row is
    /// ignored.
    #[inline]
    pub fn transform3(self, v: Vector3) -> Vector3 {
        Vector3 {
            x: self.i.x * v.x + self.j.x * v.y + self.k.x * v.z + self.l.x,
            y: self.i.y * v.x + self.j.y * v.y + self.k.y * v.z + self.l.y,
            z: self.i.z * v.x + self.j.z * v.y + self.k.z * v.z + self.l.z,
        }
    }

    #[inline]
    pub fn transpose(self) -> Self {
        Self {
            i: self.row(0),
            j: self.row(1),
            k: self.row(2),
            l: self.row(3),
        }
    }

    /// Cofactor expansion along the bottom row.
    #[rustfmt::skip]
    #[inline]
    pub fn det(self) -> f64 {
        let [e11, e21, e31, e41, e12, e22, e32, e42, e13, e23, e33, e43, e14, e24, e34, e44] =
            self.to_cols_array();
        e41 * (e14 * e23 * e32 - e13 * e24 * e32 - e14 * e22 * e33
               + e12 * e24 * e33 + e13 * e22 * e34 - e12 * e23 * e34)
      + e42 * (e11 * e23 * e34 - e11 * e24 * e33 + e14 * e21 * e33
               - e13 * e21 * e34 + e13 * e24 * e31 - e14 * e23 * e31)
      + e43 * (e11 * e24 * e32 - e11 * e22 * e34 - e14 * e21 * e32
               + e12 * e21 * e34 + e14 * e22 * e31 - e12 * e24 * e31)
      + e44 * (-e13 * e22 * e31 - e11 * e23 * e32 + e11 * e22 * e33
               + e13 * e21 * e32 - e12 * e21 * e33 + e12 * e23 * e31)
    }

    /// Unchecked inverse. A singular matrix yields non-finite elements.
    #[inline]
    pub fn inv(self) -> Self {
        self.adj_scaled(1.0 / self.det())
    }

    #[inline]
    pub fn try_inv(self) -> MathResult<Self> {
        let det = check_det("Matrix4", self.det())?;
        Ok(self.adj_scaled(1.0 / det))
    }

    #[inline]
    pub fn trace(self) -> f64 {
        self.i.x + self.j.y + self.k.z + self.l.w
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.i.is_valid() && self.j.is_valid() && self.k.is_valid() && self.l.is_valid()
    }

    #[inline]
    pub fn approx_equal(self, rhs: Self) -> bool {
        self.i.approx_equal(rhs.i)
            && self.j.approx_equal(rhs.j)
            && self.k.approx_equal(rhs.k)
            && self.l.approx_equal(rhs.l)
    }

    #[rustfmt::skip]
    fn adj_scaled(self, det: f64) -> Self {
        let [e11, e21, e31, e41, e12, e22, e32, e42, e13, e23, e33, e43, e14, e24, e34, e44] =
            self.to_cols_array();
        Self {
            i: Vector4 {
                x: det * (e23 * e34 * e42 - e24 * e33 * e42 + e24 * e32 * e43
                        - e22 * e34 * e43 - e23 * e32 * e44 + e22 * e33 * e44),
                y: det * (e24 * e33 * e41 - e23 * e34 * e41 - e24 * e31 * e43
                        + e21 * e34 * e43 + e23 * e31 * e44 - e21 * e33 * e44),
                z: det * (e22 * e34 * e41 - e24 * e32 * e41 + e24 * e31 * e42
                        - e21 * e34 * e42 - e22 * e31 * e44 + e21 * e32 * e44),
                w: det * (e23 * e32 * e41 - e22 * e33 * e41 - e23 * e31 * e42
                        + e21 * e33 * e42 + e22 * e31 * e43 - e21 * e32 * e43),
            },
            j: Vector4 {
                x: det * (e14 * e33 * e42 - e13 * e34 * e42 - e14 * e32 * e43
                        + e12 * e34 * e43 + e13 * e32 * e44 - e12 * e33 * e44),
                y: det * (e13 * e34 * e41 - e14 * e33 * e41 + e14 * e31 * e43
                        - e11 * e34 * e43 - e13 * e31 * e44 + e11 * e33 * e44),
                z: det * (e14 * e32 * e41 - e12 * e34 * e41 - e14 * e31 * e42
                        + e11 * e34 * e42 + e12 * e31 * e44 - e11 * e32 * e44),
                w: det * (e12 * e33 * e41 - e13 * e32 * e41 + e13 * e31 * e42
                        - e11 * e33 * e42 - e12 * e31 * e43 + e11 * e32 * e43),
            },
            k: Vector4 {
                x: det * (e13 * e24 * e42 - e14 * e23 * e42 + e14 * e22 * e43
                        - e12 * e24 * e43 - e13 * e22 * e44 + e12 * e23 * e44),
                y: det * (e14 * e23 * e41 - e13 * e24 * e41 - e14 * e21 * e43
                        + e11 * e24 * e43 + e13 * e21 * e44 - e11 * e23 * e44),
                z: det * (e12 * e24 * e41 - e14 * e22 * e41 + e14 * e21 * e42
                        - e11 * e24 * e42 - e12 * e21 * e44 + e11 * e22 * e44),
                w: det * (e13 * e22 * e41 - e12 * e23 * e41 - e13 * e21 * e42
                        + e11 * e23 * e42 + e12 * e21 * e43 - e11 * e22 * e43),
            },
            l: Vector4 {
                x: det * (e14 * e23 * e32 - e13 * e24 * e32 - e14 * e22 * e33
                        + e12 * e24 * e33 + e13 * e22 * e34 - e12 * e23 * e34),
                y: det * (e13 * e24 * e31 - e14 * e23 * e31 + e14 * e21 * e33
                        - e11 * e24 * e33 - e13 * e21 * e34 + e11 * e23 * e34),
                z: det * (e14 * e22 * e31 - e12 * e24 * e31 - e14 * e21 * e32
                        + e11 * e24 * e32 + e12 * e21 * e34 - e11 * e22 * e34),
                w: det * (e12 * e23 * e31 - e13 * e22 * e31 + e13 * e21 * e32
                        - e11 * e23 * e32 - e12 * e21 * e33 + e11 * e22 * e33),
            },
        }
    }
}
