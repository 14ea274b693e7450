//! OrientationController — куда смотрит актор и как плавно туда поворачивается
//!
//! Target:
//! - StareAtCamera → yaw камеры
//! - FaceTravel + есть ввод → input angle + yaw камеры
//! - FaceTravel без ввода → текущий rotation (поворот не навязывается)
//!
//! Сглаживание: slerp с factor = rotation_slerp * dt (factor ≥ 1 → snap).

use bevy::prelude::*;

use crate::components::yaw_rotation;
use crate::config::FacingPolicy;

pub fn target_rotation(
    policy: FacingPolicy,
    input_active: bool,
    input_angle: f32,
    camera_yaw: f32,
    current: Quat,
) -> Quat {
    match policy {
        FacingPolicy::StareAtCamera => yaw_rotation(camera_yaw),
        FacingPolicy::FaceTravel if input_active => yaw_rotation(input_angle + camera_yaw),
        FacingPolicy::FaceTravel => current,
    }
}

/// Slerp с клампом factor в [0, 1]
pub fn smooth_rotation(current: Quat, target: Quat, factor: f32) -> Quat {
    if factor >= 1.0 {
        target
    } else if factor > 0.0 {
        current.slerp(target, factor).normalize()
    } else {
        // 0, отрицательный или NaN
        current
    }
}

pub fn update_orientation(
    policy: FacingPolicy,
    input_active: bool,
    input_angle: f32,
    camera_yaw: f32,
    current: Quat,
    rotation_slerp: f32,
    dt: f32,
) -> Quat {
    let target = target_rotation(policy, input_active, input_angle, camera_yaw, current);
    smooth_rotation(current, target, rotation_slerp * dt)
}
