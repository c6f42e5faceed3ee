//! # bridge_math
//!
//! Plain value types that cross the script/host boundary by copy.
//!
//! - [`Vector2`], [`Vector3`], [`Vector4`]: `#[repr(C)]` POD tuples of `f32`
//!   with componentwise equality and arithmetic. They are passed by value into
//!   the engine and written through `&mut` out-parameters on the way back.
//! - [`Transform`]: the engine-side translation/rotation/scale record that the
//!   transform boundary calls read and write.
//!
//! Conversions to and from [`glam`] are provided so engine code can do real
//! linear algebra on the same data.

pub mod transform;
pub mod vector;

// Re-export glam types for convenience.
pub use glam::{EulerRot, Mat4, Quat, Vec2, Vec3, Vec4};

pub use transform::Transform;
pub use vector::{Vector2, Vector3, Vector4};
