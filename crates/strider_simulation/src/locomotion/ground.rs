//! GroundSampler — normal поверхности под актором
//!
//! Единственный geometry query локомоции. Grounded / collision-above сюда
//! не входят: их отдаёт move_and_collide (один источник правды о контактах).

use bevy::prelude::*;

use crate::physics::PhysicsBackend;

pub const WORLD_UP: Vec3 = Vec3::Y;

/// Ray вдоль `-up` из origin актора; промах → world up
pub fn sample_ground_normal<B: PhysicsBackend + ?Sized>(
    backend: &B,
    position: Vec3,
    up: Vec3,
    ray_distance: f32,
) -> Vec3 {
    let up = up.try_normalize().unwrap_or(WORLD_UP);

    backend
        .cast_ground_ray(position, -up, ray_distance)
        .and_then(|normal| normal.try_normalize())
        .unwrap_or(WORLD_UP)
}
