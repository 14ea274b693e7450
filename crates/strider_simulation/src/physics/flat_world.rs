//! FlatWorld — детерминированный physics backend
//!
//! Бесконечная плоскость на `ground_height` (+ опциональный потолок).
//! Normal плоскости настраивается отдельно от геометрии — так тесты
//! получают "склон" без настоящего solver'а.
//!
//! Используется:
//! - unit/integration тестами (точное воспроизведение чисел)
//! - headless симуляцией (FlatWorldPlugin)

use bevy::prelude::*;

use crate::components::{
    AnimationParameters, AnimationSink, CameraHeading, ContactFlags, InputSample, LocomotionActor,
    LocomotionState,
};
use crate::config::{CapsuleShape, LocomotionConfig};
use crate::locomotion::{log_tick_events, step_locomotion, LocomotionSet, TickContext};
use crate::physics::PhysicsBackend;

/// Допуск контакта с плоскостью (метры)
const CONTACT_EPSILON: f32 = 1e-4;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct FlatWorld {
    /// Высота плоскости пола
    pub ground_height: f32,
    /// Normal которую возвращает ground ray (unit)
    pub ground_normal: Vec3,
    /// Высота потолка (None = открытое небо)
    pub ceiling_height: Option<f32>,
    /// Высота capsule актора, которого сейчас двигаем (проверка потолка)
    ///
    /// Tick система выставляет её из CapsuleShape перед каждым актором.
    pub actor_height: f32,
    /// Все displacement'ы, отправленные через move_and_collide
    pub moves: Vec<Vec3>,
}

impl Default for FlatWorld {
    fn default() -> Self {
        Self {
            ground_height: 0.0,
            ground_normal: Vec3::Y,
            ceiling_height: None,
            actor_height: CapsuleShape::default().height,
            moves: Vec::new(),
        }
    }
}

impl FlatWorld {
    /// Пол с "наклонённой" normal (градусы от вертикали, наклон вокруг X)
    pub fn with_slope(mut self, degrees: f32) -> Self {
        self.ground_normal = Quat::from_rotation_x(degrees.to_radians()) * Vec3::Y;
        self
    }

    pub fn with_ceiling(mut self, height: f32) -> Self {
        self.ceiling_height = Some(height);
        self
    }

    pub fn take_moves(&mut self) -> Vec<Vec3> {
        std::mem::take(&mut self.moves)
    }
}

impl PhysicsBackend for FlatWorld {
    fn cast_ground_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<Vec3> {
        // Ray параллелен полу или смотрит вверх
        if direction.y >= 0.0 {
            return None;
        }

        let distance = (origin.y - self.ground_height) / -direction.y;
        if (-CONTACT_EPSILON..=max_distance).contains(&distance) {
            Some(self.ground_normal)
        } else {
            None
        }
    }

    fn move_and_collide(
        &mut self,
        transform: &mut Transform,
        displacement: Vec3,
    ) -> Option<ContactFlags> {
        self.moves.push(displacement);
        transform.translation += displacement;

        let mut flags = ContactFlags::default();

        if transform.translation.y <= self.ground_height + CONTACT_EPSILON {
            transform.translation.y = self.ground_height;
            flags.grounded = true;
        }

        if let Some(ceiling) = self.ceiling_height {
            if transform.translation.y + self.actor_height >= ceiling {
                transform.translation.y = ceiling - self.actor_height;
                flags.collision_above = true;
            }
        }

        Some(flags)
    }
}

/// Headless backend plugin
///
/// Регистрирует locomotion tick против FlatWorld resource в FixedUpdate.
pub struct FlatWorldPlugin;

impl Plugin for FlatWorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FlatWorld>().add_systems(
            FixedUpdate,
            locomotion_tick_flat_world.in_set(LocomotionSet::Tick),
        );
    }
}

/// System: один locomotion тик для всех акторов против FlatWorld
pub fn locomotion_tick_flat_world(
    mut actors: Query<
        (
            Entity,
            &mut Transform,
            &LocomotionConfig,
            &CapsuleShape,
            &mut LocomotionState,
            &mut InputSample,
            Option<&mut AnimationParameters>,
        ),
        With<LocomotionActor>,
    >,
    camera: Res<CameraHeading>,
    mut flat_world: ResMut<FlatWorld>,
    time: Res<Time<Fixed>>,
) {
    let dt = time.delta_secs();

    for (entity, mut transform, config, capsule, mut state, mut input, mut animation) in
        actors.iter_mut()
    {
        // Snapshot ввода на входе, дальше тик его не перечитывает
        let ctx = TickContext::new(dt, camera.yaw, *input);
        input.consume_edges();

        let sink = animation
            .as_deref_mut()
            .map(|params| params as &mut dyn AnimationSink);

        flat_world.actor_height = capsule.height;

        let report = step_locomotion(
            &ctx,
            config,
            capsule,
            &mut state,
            &mut *transform,
            &mut *flat_world,
            sink,
        );
        log_tick_events(entity, &report);
    }

    // Лог displacement'ов нужен только тестам, которые вызывают step напрямую
    flat_world.moves.clear();
}
