//! Fixed-layout vector values.
//!
//! Every vector here is `#[repr(C)]` and [`Pod`], so its byte layout is the
//! same on both sides of the boundary: three or four packed `f32`s with no
//! padding. Values are always structurally copied; nothing is normalised or
//! aliased implicitly.

use std::fmt;
use std::ops::{Add, AddAssign, Index, Mul, MulAssign, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A two-component `f32` vector.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

/// A three-component `f32` vector.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A four-component `f32` vector, used for colours and other RGBA-like data.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self::splat(0.0);

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// A vector with every component set to `scalar`.
    #[must_use]
    pub const fn splat(scalar: f32) -> Self {
        Self::new(scalar, scalar)
    }

    /// Linear interpolation from `a` to `b` by `t`. `t` is not clamped.
    #[must_use]
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        Self::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }

    /// Returns component `index` (0 = x, 1 = y), or `None` when out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            _ => None,
        }
    }

    /// Sets component `index`. Returns `false` when out of range.
    pub fn set(&mut self, index: usize, value: f32) -> bool {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            _ => return false,
        }
        true
    }
}

impl Vector3 {
    pub const ZERO: Self = Self::splat(0.0);
    pub const ONE: Self = Self::splat(1.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// A vector with every component set to `scalar`.
    #[must_use]
    pub const fn splat(scalar: f32) -> Self {
        Self::new(scalar, scalar, scalar)
    }

    /// Returns the x/y components.
    #[must_use]
    pub const fn xy(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }
}

impl Vector4 {
    pub const ZERO: Self = Self::splat(0.0);
    pub const ONE: Self = Self::splat(1.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// A vector with every component set to `scalar`.
    #[must_use]
    pub const fn splat(scalar: f32) -> Self {
        Self::new(scalar, scalar, scalar, scalar)
    }
}

impl Index<usize> for Vector2 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vector2 index out of range: {index}"),
        }
    }
}

/// Componentwise `+`, `-`, `* f32` and their assigning forms.
macro_rules! impl_componentwise {
    ($ty:ident { $($field:ident),+ }) => {
        impl Add for $ty {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl Sub for $ty {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl Mul<f32> for $ty {
            type Output = Self;

            fn mul(self, scalar: f32) -> Self {
                Self { $($field: self.$field * scalar),+ }
            }
        }

        impl AddAssign for $ty {
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl SubAssign for $ty {
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field -= rhs.$field;)+
            }
        }

        impl MulAssign<f32> for $ty {
            fn mul_assign(&mut self, scalar: f32) {
                $(self.$field *= scalar;)+
            }
        }
    };
}

impl_componentwise!(Vector2 { x, y });
impl_componentwise!(Vector3 { x, y, z });
impl_componentwise!(Vector4 { x, y, z, w });

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.x, self.y, self.z, self.w)
    }
}

impl From<glam::Vec2> for Vector2 {
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for glam::Vec2 {
    fn from(v: Vector2) -> Self {
        glam::Vec2::new(v.x, v.y)
    }
}

impl From<glam::Vec3> for Vector3 {
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for glam::Vec3 {
    fn from(v: Vector3) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

impl From<glam::Vec4> for Vector4 {
    fn from(v: glam::Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vector4> for glam::Vec4 {
    fn from(v: Vector4) -> Self {
        glam::Vec4::new(v.x, v.y, v.z, v.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_packed_f32() {
        assert_eq!(std::mem::size_of::<Vector2>(), 8);
        assert_eq!(std::mem::size_of::<Vector3>(), 12);
        assert_eq!(std::mem::size_of::<Vector4>(), 16);
        assert_eq!(std::mem::align_of::<Vector3>(), std::mem::align_of::<f32>());
    }

    #[test]
    fn test_bytes_follow_field_order() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&v));
        assert_eq!(floats, &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_zeroed_is_zero() {
        assert_eq!(Vector4::zeroed(), Vector4::ZERO);
    }

    #[test]
    fn test_arithmetic_is_componentwise() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(0.5, -1.0, 2.0);
        assert_eq!(a + b, Vector3::new(1.5, 1.0, 5.0));
        assert_eq!(a - b, Vector3::new(0.5, 3.0, 1.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));

        let mut c = a;
        c += b;
        c *= 0.5;
        assert_eq!(c, Vector3::new(0.75, 0.5, 2.5));
    }

    #[test]
    fn test_no_implicit_normalisation() {
        let v = Vector4::new(3.0, 4.0, 0.0, 10.0) * 2.0;
        assert_eq!(v, Vector4::new(6.0, 8.0, 0.0, 20.0));
    }

    #[test]
    fn test_copies_do_not_alias() {
        let a = Vector3::new(1.0, 1.0, 1.0);
        let mut b = a;
        b.x = 9.0;
        assert_eq!(a.x, 1.0);
    }

    #[test]
    fn test_vector2_lerp() {
        let a = Vector2::new(0.0, 10.0);
        let b = Vector2::new(10.0, 20.0);
        assert_eq!(Vector2::lerp(a, b, 0.5), Vector2::new(5.0, 15.0));
    }

    #[test]
    fn test_vector2_indexing() {
        let mut v = Vector2::new(1.0, 2.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v.get(1), Some(2.0));
        assert_eq!(v.get(2), None);
        assert!(v.set(1, 5.0));
        assert!(!v.set(7, 5.0));
        assert_eq!(v, Vector2::new(1.0, 5.0));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_vector2_index_out_of_range_panics() {
        let v = Vector2::ZERO;
        let _ = v[2];
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector3::new(1.0, 2.5, -3.0).to_string(), "1, 2.5, -3");
        assert_eq!(Vector4::splat(0.0).to_string(), "0, 0, 0, 0");
    }

    #[test]
    fn test_glam_conversion() {
        let g = glam::Vec3::new(1.0, 2.0, 3.0);
        let v: Vector3 = g.into();
        assert_eq!(glam::Vec3::from(v), g);
    }
}
