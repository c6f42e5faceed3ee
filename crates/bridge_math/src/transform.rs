//! Engine-side transform record.
//!
//! [`Transform`] holds translation, Euler rotation (radians, XYZ order) and
//! per-axis scale. Scripts never hold a `Transform`; they read and write its
//! fields one at a time through the transform boundary calls.

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::vector::Vector3;

/// Translation, rotation and scale of an entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Transform {
    /// World-space position.
    pub translation: Vector3,
    /// Euler angles in radians, applied in XYZ order.
    pub rotation: Vector3,
    /// Per-axis scale factor.
    pub scale: Vector3,
}

impl Transform {
    /// The identity transform: origin, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        translation: Vector3::ZERO,
        rotation: Vector3::ZERO,
        scale: Vector3::ONE,
    };

    /// Create a new transform at `translation` with default rotation/scale.
    #[must_use]
    pub fn from_translation(translation: Vector3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// The rotation as a quaternion.
    #[must_use]
    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// Compute the 4×4 model matrix for this transform.
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::from(self.scale),
            self.rotation_quat(),
            Vec3::from(self.translation),
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_transform() {
        let t = Transform::IDENTITY;
        assert_eq!(t.translation, Vector3::ZERO);
        assert_eq!(t.rotation, Vector3::ZERO);
        assert_eq!(t.scale, Vector3::ONE);
        assert_eq!(t.to_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_matrix_translation_column() {
        let t = Transform::from_translation(Vector3::new(1.0, 2.0, 3.0));
        let m = t.to_matrix();
        assert_eq!(m.w_axis.truncate(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_rotation_quarter_turn_about_z() {
        let t = Transform {
            rotation: Vector3::new(0.0, 0.0, std::f32::consts::FRAC_PI_2),
            ..Transform::IDENTITY
        };
        let rotated = t.rotation_quat() * Vec3::X;
        assert!((rotated - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_json_shape() {
        let t = Transform::from_translation(Vector3::new(1.0, 0.0, 0.0));
        let json = serde_json::to_value(t).unwrap();
        assert_eq!(json["translation"]["x"], 1.0);
        assert_eq!(json["scale"]["z"], 1.0);
    }
}
