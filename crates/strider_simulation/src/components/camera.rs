//! Camera reference frame
//!
//! Камера сама по себе external — core видит только её yaw.
//! Convention: +Z вперёд, +X вправо; yaw 90° поворачивает +Z в +X.

use bevy::prelude::*;

/// Горизонтальный heading камеры (градусы, world frame)
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct CameraHeading {
    pub yaw: f32,
}

impl CameraHeading {
    pub fn new(yaw: f32) -> Self {
        Self { yaw }
    }

    pub fn rotation(&self) -> Quat {
        yaw_rotation(self.yaw)
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::Z
    }
}

/// Поворот вокруг world up на `degrees`
pub fn yaw_rotation(degrees: f32) -> Quat {
    Quat::from_rotation_y(degrees.to_radians())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_follows_yaw() {
        let forward = CameraHeading::new(0.0).forward();
        assert_eq!(forward, Vec3::Z);

        let right = CameraHeading::new(90.0).forward();
        assert!((right - Vec3::X).length() < 1e-6, "right = {:?}", right);

        let back = CameraHeading::new(180.0).forward();
        assert!((back + Vec3::Z).length() < 1e-6, "back = {:?}", back);
    }
}
