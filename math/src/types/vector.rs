use approx::AbsDiffEq;
use bytemuck::{Pod, Zeroable};
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use super::Axis;
use crate::error::{read_le_f64, MathResult};
use crate::scalar::{self, EPSILON};


#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Neg for Vector2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Add for Vector2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Vector2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: Vector2) -> Self::Output {
        Vector2 {
            x: rhs.x * self,
            y: rhs.y * self,
        }
    }
}

impl Div<f64> for Vector2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl Mul<Vector2> for Vector2 {
    type Output = f64;
    #[inline]
    fn mul(self, rhs: Vector2) -> Self::Output {
        self.x * rhs.x + self.y * rhs.y
    }
}

impl Index<usize> for Vector2 {
    type Output = f64;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_array()[index]
    }
}

impl IndexMut<usize> for Vector2 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut bytemuck::cast_mut::<Self, [f64; 2]>(self)[index]
    }
}

impl From<[f64; 2]> for Vector2 {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Vector2> for [f64; 2] {
    #[inline]
    fn from(value: Vector2) -> Self {
        value.to_array()
    }
}

impl From<Vector3> for Vector2 {
    #[inline]
    fn from(value: Vector3) -> Self {
        Self {
            x: value.x,
            y: value.y,
        }
    }
}

impl From<Vector4> for Vector2 {
    #[inline]
    fn from(value: Vector4) -> Self {
        Self {
            x: value.x,
            y: value.y,
        }
    }
}

impl AbsDiffEq for Vector2 {
    type Epsilon = f64;

    #[inline]
    fn default_epsilon() -> f64 {
        EPSILON
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl Vector2 {
    #[inline]
    pub fn try_from_le_bytes(bytes: &[u8]) -> MathResult<Self> {
        read_le_f64::<2>(bytes).map(Self::from)
    }

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn x() -> Self {
        Self { x: 1.0, y: 0.0 }
    }

    #[inline]
    pub fn y() -> Self {
        Self { x: 0.0, y: 1.0 }
    }

    #[inline]
    pub fn as_array(&self) -> &[f64; 2] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    #[inline]
    pub fn length_square(self) -> f64 {
        self * self
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_square().sqrt()
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f64 {
        self * rhs
    }

    /// Z component of the 3D cross product of `(self, 0)` and `(rhs, 0)`.
    #[inline]
    pub fn cross(self, rhs: Self) -> f64 {
        self.x * rhs.y - self.y * rhs.x
    }

    #[inline]
    pub fn scale(self, s: f64) -> Self {
        s * self
    }

    #[inline]
    pub fn mul_elem(self, rhs: Self) -> Self {
        Self {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
        }
    }

    #[inline]
    pub fn div_elem(self, rhs: Self) -> Self {
        Self {
            x: self.x / rhs.x,
            y: self.y / rhs.y,
        }
    }

    /// Rescales the vector in place to `length` and returns its previous
    /// length. A zero-length vector is left untouched.
    #[inline]
    pub fn normalize(&mut self, length: f64) -> f64 {
        let len = self.length();
        if scalar::equal(len, 0.0) {
            log::trace!("Vector2::normalize: zero-length vector left unchanged");
        } else {
            *self = (length / len) * *self;
        }
        len
    }

    #[inline]
    pub fn norm(self) -> Self {
        let mut v = self;
        v.normalize(1.0);
        v
    }

    #[inline]
    pub fn rotate(self, rad: f64) -> Self {
        let cos = rad.cos();
        let sin = rad.sin();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn approx_equal(self, rhs: Self) -> bool {
        scalar::equal(self.x, rhs.x) && scalar::equal(self.y, rhs.y)
    }
}

#[cfg(test)]
mod test_vector_3 {
    use strum::IntoEnumIterator;

    use super::{Axis, Vector3};

    #[test]
    fn cross() {
        assert!(Vector3::x().cross(Vector3::y()).approx_equal(Vector3::z()));
        assert!(Vector3::y().cross(Vector3::x()).approx_equal(-Vector3::z()));
        assert_eq!(
            Vector3::new(5.0, 7.0, 0.0).cross(Vector3::new(8.0, 6.0, 4.0)),
            Vector3::new(28.0, -20.0, -26.0)
        );
    }

    #[test]
    fn normalize() {
        let mut h = Vector3::new(8.0, 6.0, 4.0);
        let len = h.normalize(2.5);
        assert!((len - 116.0f64.sqrt()).abs() < 1e-12);
        assert!((h.length() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn normalize_zero() {
        let mut v = Vector3::new(0.0, 0.0, 0.0);
        assert_eq!(v.normalize(1.0), 0.0);
        assert_eq!(v, Vector3::zero());
    }

    #[test]
    fn rotate_is_right_handed() {
        let quarter = std::f64::consts::FRAC_PI_2;
        assert!(Vector3::y().rotate_x(quarter).approx_equal(Vector3::z()));
        assert!(Vector3::z().rotate_y(quarter).approx_equal(Vector3::x()));
        assert!(Vector3::x().rotate_z(quarter).approx_equal(Vector3::y()));
    }

    #[test]
    fn rotate_keeps_fixed_axis() {
        let h = Vector3::new(8.0, 6.0, 4.0);
        for axis in Axis::iter() {
            let r = h.rotate_about(axis, 0.7);
            let fixed = Vector3::unit(axis);
            assert_eq!(r * fixed, h * fixed);
            assert!((r.length() - h.length()).abs() < 1e-12);
        }
    }

    #[test]
    fn rotate_perpendicular() {
        let h = Vector3::new(8.0, 0.0, 4.0);
        let r = h.rotate_y(std::f64::consts::FRAC_PI_2);
        assert!((h * r).abs() < 1e-12);
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Neg for Vector3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Add for Vector3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Vector3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Self::Output {
        Vector3 {
            x: rhs.x * self,
            y: rhs.y * self,
            z: rhs.z * self,
        }
    }
}

impl Div<f64> for Vector3 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

impl Mul<Vector3> for Vector3 {
    type Output = f64;
    #[inline]
    fn mul(self, rhs: Vector3) -> Self::Output {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
}

impl Index<usize> for Vector3 {
    type Output = f64;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_array()[index]
    }
}

impl IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut bytemuck::cast_mut::<Self, [f64; 3]>(self)[index]
    }
}

impl From<[f64; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Vector3> for [f64; 3] {
    #[inline]
    fn from(value: Vector3) -> Self {
        value.to_array()
    }
}

impl From<Vector2> for Vector3 {
    #[inline]
    fn from(value: Vector2) -> Self {
        Self {
            x: value.x,
            y: value.y,
            z: 0.0,
        }
    }
}

impl From<Vector4> for Vector3 {
    #[inline]
    fn from(value: Vector4) -> Self {
        Self {
            x: value.x,
            y: value.y,
            z: value.z,
        }
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = f64;

    #[inline]
    fn default_epsilon() -> f64 {
        EPSILON
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl Vector3 {
    #[inline]
    pub fn try_from_le_bytes(bytes: &[u8]) -> MathResult<Self> {
        read_le_f64::<3>(bytes).map(Self::from)
    }

    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    #[inline]
    pub fn x() -> Self {
        Self {
            x: 1.0,
            y: 0.0,
            z: 0.0,
        }
    }

    #[inline]
    pub fn y() -> Self {
        Self {
            x: 0.0,
            y: 1.0,
            z: 0.0,
        }
    }

    #[inline]
    pub fn z() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 1.0,
        }
    }

    #[inline]
    pub fn unit(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::x(),
            Axis::Y => Self::y(),
            Axis::Z => Self::z(),
        }
    }

    #[inline]
    pub fn as_array(&self) -> &[f64; 3] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn length_square(self) -> f64 {
        self * self
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_square().sqrt()
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f64 {
        self * rhs
    }

    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    #[inline]
    pub fn scale(self, s: f64) -> Self {
        s * self
    }

    #[inline]
    pub fn mul_elem(self, rhs: Self) -> Self {
        Self {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            z: self.z * rhs.z,
        }
    }

    #[inline]
    pub fn div_elem(self, rhs: Self) -> Self {
        Self {
            x: self.x / rhs.x,
            y: self.y / rhs.y,
            z: self.z / rhs.z,
        }
    }

    /// Rescales the vector in place to `length` and returns its previous
    /// length. A zero-length vector is left untouched.
    #[inline]
    pub fn normalize(&mut self, length: f64) -> f64 {
        let len = self.length();
        if scalar::equal(len, 0.0) {
            log::trace!("Vector3::normalize: zero-length vector left unchanged");
        } else {
            *self = (length / len) * *self;
        }
        len
    }

    #[inline]
    pub fn norm(self) -> Self {
        let mut v = self;
        v.normalize(1.0);
        v
    }

    #[inline]
    pub fn rotate_x(self, rad: f64) -> Self {
        let cos = rad.cos();
        let sin = rad.sin();
        Self {
            x: self.x,
            y: self.y * cos - self.z * sin,
            z: self.y * sin + self.z * cos,
        }
    }

    #[inline]
    pub fn rotate_y(self, rad: f64) -> Self {
        let cos = rad.cos();
        let sin = rad.sin();
        Self {
            x: self.z * sin + self.x * cos,
            y: self.y,
            z: self.z * cos - self.x * sin,
        }
    }

    #[inline]
    pub fn rotate_z(self, rad: f64) -> Self {
        let cos = rad.cos();
        let sin = rad.sin();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
            z: self.z,
        }
    }

    #[inline]
    pub fn rotate_about(self, axis: Axis, rad: f64) -> Self {
        match axis {
            Axis::X => self.rotate_x(rad),
            Axis::Y => self.rotate_y(rad),
            Axis::Z => self.rotate_z(rad),
        }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub fn approx_equal(self, rhs: Self) -> bool {
        scalar::equal(self.x, rhs.x) && scalar::equal(self.y, rhs.y) && scalar::equal(self.z, rhs.z)
    }
}

#[cfg(test)]
mod test_vector_4 {
    use super::{Vector3, Vector4};
    use crate::error::MathError;

    #[test]
    fn homogeneous() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(Vector4::point(v), Vector4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(Vector4::vector(v), Vector4::new(1.0, 2.0, 3.0, 0.0));
        assert_eq!(Vector3::from(Vector4::point(v)), v);
    }

    #[test]
    fn normalize() {
        let mut v = Vector4::new(1.0, -2.0, 3.0, -4.0);
        v.normalize(1.0);
        assert!((v.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn from_le_bytes() {
        let bytes: Vec<u8> = [1.0f64, 2.0, 3.0, 4.0]
            .iter()
            .flat_map(|v| v.to_le_bytes())
            .collect();
        assert_eq!(
            Vector4::try_from_le_bytes(&bytes),
            Ok(Vector4::new(1.0, 2.0, 3.0, 4.0))
        );
        assert_eq!(
            Vector4::try_from_le_bytes(&bytes[..24]),
            Err(MathError::InvalidByteLength {
                expected: 32,
                found: 24
            })
        );
    }

    #[test]
    fn byte_layout() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(bytemuck::bytes_of(&v).len(), 32);
        assert_eq!(v.as_array(), &[1.0, 2.0, 3.0, 4.0]);
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Neg for Vector4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

impl Add for Vector4 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}

impl Sub for Vector4 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}

impl Mul<Vector4> for f64 {
    type Output = Vector4;
    #[inline]
    fn mul(self, rhs: Vector4) -> Self::Output {
        Vector4 {
            x: rhs.x * self,
            y: rhs.y * self,
            z: rhs.z * self,
            w: rhs.w * self,
        }
    }
}

impl Div<f64> for Vector4 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
            w: self.w / rhs,
        }
    }
}

impl Mul<Vector4> for Vector4 {
    type Output = f64;
    #[inline]
    fn mul(self, rhs: Vector4) -> Self::Output {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }
}

impl Index<usize> for Vector4 {
    type Output = f64;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_array()[index]
    }
}

impl IndexMut<usize> for Vector4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut bytemuck::cast_mut::<Self, [f64; 4]>(self)[index]
    }
}

impl From<[f64; 4]> for Vector4 {
    #[inline]
    fn from([x, y, z, w]: [f64; 4]) -> Self {
        Self { x, y, z, w }
    }
}

impl From<Vector4> for [f64; 4] {
    #[inline]
    fn from(value: Vector4) -> Self {
        value.to_array()
    }
}

impl From<Vector2> for Vector4 {
    #[inline]
    fn from(value: Vector2) -> Self {
        Self {
            x: value.x,
            y: value.y,
            z: 0.0,
            w: 0.0,
        }
    }
}

impl From<Vector3> for Vector4 {
    #[inline]
    fn from(value: Vector3) -> Self {
        Self {
            x: value.x,
            y: value.y,
            z: value.z,
            w: 0.0,
        }
    }
}

impl AbsDiffEq for Vector4 {
    type Epsilon = f64;

    #[inline]
    fn default_epsilon() -> f64 {
        EPSILON
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
            && self.w.abs_diff_eq(&other.w, epsilon)
    }
}

impl Vector4 {
    #[inline]
    pub fn try_from_le_bytes(bytes: &[u8]) -> MathResult<Self> {
        read_le_f64::<4>(bytes).map(Self::from)
    }

    #[inline]
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 0.0,
        }
    }

    #[inline]
    pub fn point(p: Vector3) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
            w: 1.0,
        }
    }

    #[inline]
    pub fn vector(v: Vector3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
            w: 0.0,
        }
    }

    #[inline]
    pub fn x() -> Self {
        Self {
            x: 1.0,
            y: 0.0,
            z: 0.0,
            w: 0.0,
        }
    }

    #[inline]
    pub fn y() -> Self {
        Self {
            x: 0.0,
            y: 1.0,
            z: 0.0,
            w: 0.0,
        }
    }

    #[inline]
    pub fn z() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 1.0,
            w: 0.0,
        }
    }

    #[inline]
    pub fn w() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }

    #[inline]
    pub fn as_array(&self) -> &[f64; 4] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    #[inline]
    pub fn length_square(self) -> f64 {
        self * self
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_square().sqrt()
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f64 {
        self * rhs
    }

    #[inline]
    pub fn scale(self, s: f64) -> Self {
        s * self
    }

    #[inline]
    pub fn mul_elem(self, rhs: Self) -> Self {
        Self {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            z: self.z * rhs.z,
            w: self.w * rhs.w,
        }
    }

    #[inline]
    pub fn div_elem(self, rhs: Self) -> Self {
        Self {
            x: self.x / rhs.x,
            y: self.y / rhs.y,
            z: self.z / rhs.z,
            w: self.w / rhs.w,
        }
    }

    /// Rescales the vector in place to `length` and returns its previous
    /// length. A zero-length vector is left untouched.
    #[inline]
    pub fn normalize(&mut self, length: f64) -> f64 {
        let len = self.length();
        if scalar::equal(len, 0.0) {
            log::trace!("Vector4::normalize: zero-length vector left unchanged");
        } else {
            *self = (length / len) * *self;
        }
        len
    }

    #[inline]
    pub fn norm(self) -> Self {
        let mut v = self;
        v.normalize(1.0);
        v
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    #[inline]
    pub fn approx_equal(self, rhs: Self) -> bool {
        scalar::equal(self.x, rhs.x)
            && scalar::equal(self.y, rhs.y)
            && scalar::equal(self.z, rhs.z)
            && scalar::equal(self.w, rhs.w)
    }
}
