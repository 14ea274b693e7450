//! HorizontalMotionComposer — camera-relative движение по земле
//!
//! Axis (h, 0, v) → normalize → поворот по yaw камеры → наклон по normal земли
//! → × move_speed. Вертикаль (gravity/jump) добавляется отдельно, без наклона.

use bevy::prelude::*;

use crate::components::{yaw_rotation, InputSample};
use crate::locomotion::ground::WORLD_UP;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalMotion {
    /// World-space скорость (m/s)
    pub velocity: Vec3,
    /// Camera-relative угол ввода (градусы): 0 вперёд, 90 вправо, -90 влево, 180 назад
    pub input_angle: f32,
}

/// Нулевой ввод → нулевая скорость и прошлый input angle
pub fn compose_horizontal(
    input: &InputSample,
    camera_yaw: f32,
    ground_normal: Vec3,
    move_speed: f32,
    last_input_angle: f32,
) -> HorizontalMotion {
    if !input.has_movement() {
        return HorizontalMotion {
            velocity: Vec3::ZERO,
            input_angle: last_input_angle,
        };
    }

    let input_angle = input.horizontal.atan2(input.vertical).to_degrees();
    // Субнормальные оси: length² уходит в 0 → нулевое направление, не NaN
    let axis = Vec3::new(input.horizontal, 0.0, input.vertical).normalize_or_zero();
    let heading = yaw_rotation(camera_yaw) * axis;

    HorizontalMotion {
        velocity: ground_alignment(ground_normal) * heading * move_speed,
        input_angle,
    }
}

/// Поворот, который переводит world up в normal земли
pub fn ground_alignment(ground_normal: Vec3) -> Quat {
    match ground_normal.try_normalize() {
        Some(normal) => Quat::from_rotation_arc(WORLD_UP, normal),
        None => Quat::IDENTITY,
    }
}

/// Полная скорость: вертикаль вдоль world up + горизонталь
pub fn compose_velocity(vertical_velocity: f32, horizontal: Vec3) -> Vec3 {
    WORLD_UP * vertical_velocity + horizontal
}
