use approx::AbsDiffEq;
use bytemuck::{Pod, Zeroable};
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use super::check_det;
use crate::error::{read_le_f64, MathResult};
use crate::scalar::EPSILON;
use crate::types::{Matrix3, Matrix4, Vector2};


#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix2 {
    pub i: Vector2,
    pub j: Vector2,
}

impl Neg for Matrix2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            i: -self.i,
            j: -self.j,
        }
    }
}

impl Add for Matrix2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
        }
    }
}

impl Sub for Matrix2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            i: self.i - rhs.i,
            j: self.j - rhs.j,
        }
    }
}

impl Mul<Matrix2> for f64 {
    type Output = Matrix2;
    #[inline]
    fn mul(self, rhs: Matrix2) -> Self::Output {
        Matrix2 {
            i: self * rhs.i,
            j: self * rhs.j,
        }
    }
}

impl Mul<Vector2> for Matrix2 {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: Vector2) -> Self::Output {
        rhs.x * self.i + rhs.y * self.j
    }
}

impl Mul<Matrix2> for Matrix2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            i: self * rhs.i,
            j: self * rhs.j,
        }
    }
}

impl Index<usize> for Matrix2 {
    type Output = Vector2;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &bytemuck::cast_ref::<Self, [Vector2; 2]>(self)[index]
    }
}

impl IndexMut<usize> for Matrix2 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut bytemuck::cast_mut::<Self, [Vector2; 2]>(self)[index]
    }
}

impl From<Matrix3> for Matrix2 {
    #[inline]
    fn from(value: Matrix3) -> Self {
        Self {
            i: value.i.into(),
            j: value.j.into(),
        }
    }
}

impl From<Matrix4> for Matrix2 {
    #[inline]
    fn from(value: Matrix4) -> Self {
        Self {
            i: value.i.into(),
            j: value.j.into(),
        }
    }
}

impl AbsDiffEq for Matrix2 {
    type Epsilon = f64;

    #[inline]
    fn default_epsilon() -> f64 {
        EPSILON
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.i.abs_diff_eq(&other.i, epsilon) && self.j.abs_diff_eq(&other.j, epsilon)
    }
}

impl Matrix2 {
    #[inline]
    pub fn try_from_le_bytes(bytes: &[u8]) -> MathResult<Self> {
        read_le_f64::<4>(bytes).map(Self::from_cols_array)
    }

    #[inline]
    pub fn new(i: Vector2, j: Vector2) -> Self {
        Self { i, j }
    }

    #[inline]
    pub fn zero() -> Self {
        Self {
            i: Vector2::zero(),
            j: Vector2::zero(),
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Self {
            i: Vector2::x(),
            j: Vector2::y(),
        }
    }

    #[inline]
    pub fn from_cols_array(values: [f64; 4]) -> Self {
        bytemuck::cast(values)
    }

    #[inline]
    pub fn to_cols_array(self) -> [f64; 4] {
        bytemuck::cast(self)
    }

    #[inline]
    pub fn as_array(&self) -> &[f64; 4] {
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
    pub fn col(self, col: usize) -> Vector2 {
        self[col]
    }

    #[inline]
    pub fn row(self, row: usize) -> Vector2 {
        Vector2::new(self.i[row], self.j[row])
    }

    #[inline]
    pub fn scale(s: Vector2) -> Self {
        Self {
            i: Vector2::new(s.x, 0.0),
            j: Vector2::new(0.0, s.y),
        }
    }

    /// `e21 = s.x`, `e12 = s.y`.
    #[inline]
    pub fn shear(s: Vector2) -> Self {
        Self {
            i: Vector2::new(1.0, s.x),
            j: Vector2::new(s.y, 1.0),
        }
    }

    #[inline]
    pub fn rotate(rad: f64) -> Self {
        let cos = rad.cos();
        let sin = rad.sin();
        Self {
            i: Vector2::new(cos, sin),
            j: Vector2::new(-sin, cos),
        }
    }

    #[inline]
    pub fn transform(self, v: Vector2) -> Vector2 {
        self * v
    }

    #[inline]
    pub fn transpose(self) -> Self {
        Self {
            i: Vector2 {
                x: self.i.x,
                y: self.j.x,
            },
            j: Vector2 {
                x: self.i.y,
                y: self.j.y,
            },
        }
    }

    #[inline]
    pub fn det(self) -> f64 {
        self.i.x * self.j.y - self.j.x * self.i.y
    }

    /// Unchecked inverse. A singular matrix yields non-finite elements.
    #[inline]
    pub fn inv(self) -> Self {
        self.adj_scaled(1.0 / self.det())
    }

    #[inline]
    pub fn try_inv(self) -> MathResult<Self> {
        let det = check_det("Matrix2", self.det())?;
        Ok(self.adj_scaled(1.0 / det))
    }

    #[inline]
    pub fn trace(self) -> f64 {
        self.i.x + self.j.y
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.i.is_valid() && self.j.is_valid()
    }

    #[inline]
    pub fn approx_equal(self, rhs: Self) -> bool {
        self.i.approx_equal(rhs.i) && self.j.approx_equal(rhs.j)
    }

    #[inline]
    fn adj_scaled(self, det: f64) -> Self {
        Self {
            i: Vector2 {
                x: det * self.j.y,
                y: -det * self.i.y,
            },
            j: Vector2 {
                x: -det * self.j.x,
                y: det * self.i.x,
            },
        }
    }
}
