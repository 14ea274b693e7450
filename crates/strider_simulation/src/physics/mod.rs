//! Physical world access
//!
//! Locomotion core видит физику только через `PhysicsBackend`:
//! - cast_ground_ray: ray под актором → normal поверхности
//! - move_and_collide: capsule move, коллизии решает backend
//!
//! Реализации:
//! - FlatWorld: детерминированный fake (тесты, headless прогоны)
//! - RapierBackend: bevy_rapier3d KinematicCharacterController

pub mod flat_world;
pub mod rapier;

use bevy::prelude::*;

use crate::components::ContactFlags;

// Re-export основных типов
pub use flat_world::{FlatWorld, FlatWorldPlugin};
pub use rapier::{spawn_rapier_locomotion_actor, RapierBackend, RapierLocomotionPlugin};

/// Capability interface физического мира
pub trait PhysicsBackend {
    /// Ray из `origin` вдоль `direction` (unit) длиной `max_distance`
    ///
    /// Возвращает normal поверхности в точке попадания.
    fn cast_ground_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<Vec3>;

    /// Запрос на перемещение capsule на `displacement`
    ///
    /// `Some(flags)` — backend разрешил move синхронно (flags для следующего тика).
    /// `None` — результат появится после physics step (Rapier).
    fn move_and_collide(&mut self, transform: &mut Transform, displacement: Vec3)
        -> Option<ContactFlags>;
}
