//! Mover — одна displacement заявка в physics backend за тик
//!
//! Своей collision resolution нет: заблокированный move поглощает backend.

use bevy::prelude::*;

use crate::components::ContactFlags;
use crate::physics::PhysicsBackend;

pub fn apply_motion<B: PhysicsBackend + ?Sized>(
    backend: &mut B,
    transform: &mut Transform,
    velocity: Vec3,
    dt: f32,
) -> Option<ContactFlags> {
    backend.move_and_collide(transform, velocity * dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::FlatWorld;

    #[test]
    fn test_submits_velocity_times_dt() {
        let mut world = FlatWorld::default();
        let mut transform = Transform::from_xyz(0.0, 1.0, 0.0);

        let flags = apply_motion(&mut world, &mut transform, Vec3::new(2.0, 0.0, -4.0), 0.5);

        assert_eq!(world.moves, vec![Vec3::new(1.0, 0.0, -2.0)]);
        assert_eq!(transform.translation, Vec3::new(1.0, 1.0, -2.0));
        assert_eq!(flags.map(|f| f.grounded), Some(false));
    }
}
