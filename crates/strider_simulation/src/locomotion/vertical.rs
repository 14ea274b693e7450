//! VerticalVelocityModel — gravity, jump, slope bias, ceiling clamp
//!
//! На земле:
//! - скорость выше -gravity → сброс в маленький bias `-gravity * dt`
//!   (стоя на месте скорость не копится)
//! - jump → `jump_force`, перекрывает всё остальное
//! - иначе slope bias: `height * lerp(0, slope_force, angle / slope_limit)`
//!
//! В воздухе: обычная интеграция + head-bump (collision above гасит только подъём).

use bevy::prelude::*;

use crate::components::GroundInfo;
use crate::config::{CapsuleShape, LocomotionConfig};
use crate::locomotion::ground::WORLD_UP;

pub fn update_vertical_velocity(
    ground: &GroundInfo,
    jump: bool,
    dt: f32,
    previous: f32,
    config: &LocomotionConfig,
    capsule: &CapsuleShape,
) -> f32 {
    if ground.grounded {
        if jump {
            return config.jump_force;
        }

        let mut velocity = previous;
        if velocity > -config.gravity {
            velocity = -config.gravity * dt;
        }

        let slope = slope_force_at(ground.normal, config.slope_force, capsule.slope_limit);
        velocity - capsule.height * slope
    } else {
        let velocity = previous - config.gravity * dt;

        if ground.collision_above && velocity > 0.0 {
            0.0
        } else {
            velocity
        }
    }
}

/// Угол между world up и normal (градусы)
pub fn slope_angle(normal: Vec3) -> f32 {
    WORLD_UP.angle_between(normal).to_degrees()
}

/// Slope bias на данном уклоне: 0 на ровном, `slope_force` начиная со slope_limit
pub fn slope_force_at(normal: Vec3, slope_force: f32, slope_limit: f32) -> f32 {
    let angle = slope_angle(normal);

    let t = if slope_limit > 0.0 {
        (angle / slope_limit).clamp(0.0, 1.0)
    } else if angle > 0.0 {
        1.0
    } else {
        0.0
    };

    slope_force * t
}
