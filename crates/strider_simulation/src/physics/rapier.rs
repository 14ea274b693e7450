//! Rapier backend для locomotion controller'а
//!
//! Архитектура:
//! - Collider capsule + KinematicCharacterController (без RigidBody)
//! - Velocity интегрируем сами, Rapier только решает коллизии
//! - Collider центрирован на Transform актора (origin = центр capsule)
//! - Ground ray: ray cast вниз от центра, свой collider исключён
//! - Контакты (grounded / ceiling) приходят из KinematicCharacterControllerOutput
//!   ПОСЛЕ physics step → читаем их на следующем тике
//!
//! Ожидает Rapier в fixed schedule (`RapierPhysicsPlugin::in_fixed_schedule()`):
//! Rapier крутится в FixedPostUpdate, тик в FixedUpdate → порядок тик → step
//! даёт сам fixed main loop, явных cross-schedule ограничений нет.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::{
    AnimationParameters, AnimationSink, CameraHeading, ContactFlags, InputSample, LocomotionActor,
    LocomotionState,
};
use crate::config::{CapsuleShape, LocomotionConfig};
use crate::locomotion::{log_tick_events, step_locomotion, LocomotionSet, TickContext};
use crate::physics::PhysicsBackend;

/// Минимальный dot(normal, up) чтобы контакт считался потолком
const CEILING_DOT: f32 = 0.7;

/// PhysicsBackend поверх RapierContext для одного актора
pub struct RapierBackend<'a, 'w> {
    context: &'a RapierContext<'w>,
    actor: Entity,
    /// Origin актора в центре capsule → ray удлиняется на half height
    half_height: f32,
    controller: &'a mut KinematicCharacterController,
}

impl<'a, 'w> RapierBackend<'a, 'w> {
    pub fn new(
        context: &'a RapierContext<'w>,
        actor: Entity,
        capsule: &CapsuleShape,
        controller: &'a mut KinematicCharacterController,
    ) -> Self {
        Self {
            context,
            actor,
            half_height: capsule.height * 0.5,
            controller,
        }
    }
}

impl PhysicsBackend for RapierBackend<'_, '_> {
    fn cast_ground_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<Vec3> {
        let filter = QueryFilter::default().exclude_collider(self.actor);

        self.context
            .cast_ray_and_get_normal(origin, direction, max_distance + self.half_height, true, filter)
            .map(|(_, intersection)| intersection.normal)
    }

    fn move_and_collide(
        &mut self,
        _transform: &mut Transform,
        displacement: Vec3,
    ) -> Option<ContactFlags> {
        // Несколько move за тик (обычный + dash) → суммируем в один запрос
        let pending = self.controller.translation.unwrap_or(Vec3::ZERO);
        self.controller.translation = Some(pending + displacement);
        None
    }
}

/// Является ли контакт ударом головой
///
/// `character_normal` — normal на capsule, `obstacle_normal` — на препятствии.
pub fn is_ceiling_contact(character_normal: Vec3, obstacle_normal: Vec3, up: Vec3) -> bool {
    character_normal.dot(up) > CEILING_DOT || obstacle_normal.dot(up) < -CEILING_DOT
}

/// Контакты из output последнего physics step
pub fn contact_flags_from_output(output: &KinematicCharacterControllerOutput, up: Vec3) -> ContactFlags {
    let collision_above = output.collisions.iter().any(|collision| {
        collision
            .hit
            .details
            .as_ref()
            .is_some_and(|details| is_ceiling_contact(details.normal1, details.normal2, up))
    });

    ContactFlags {
        grounded: output.grounded,
        collision_above,
    }
}

/// Система: KinematicCharacterControllerOutput → LocomotionState.contacts
pub fn sync_contacts_from_rapier(
    mut query: Query<
        (&KinematicCharacterControllerOutput, &Transform, &mut LocomotionState),
        With<LocomotionActor>,
    >,
) {
    for (output, transform, mut state) in query.iter_mut() {
        state.contacts = contact_flags_from_output(output, *transform.up());
    }
}

/// Система: locomotion тик против Rapier
pub fn locomotion_tick_rapier(
    mut actors: Query<
        (
            Entity,
            &mut Transform,
            &LocomotionConfig,
            &CapsuleShape,
            &mut LocomotionState,
            &mut InputSample,
            &mut KinematicCharacterController,
            Option<&mut AnimationParameters>,
        ),
        With<LocomotionActor>,
    >,
    camera: Res<CameraHeading>,
    rapier: ReadRapierContext,
    time: Res<Time<Fixed>>,
) {
    let Ok(context) = rapier.single() else {
        return;
    };
    let dt = time.delta_secs();

    for (entity, mut transform, config, capsule, mut state, mut input, mut controller, mut animation) in
        actors.iter_mut()
    {
        let ctx = TickContext::new(dt, camera.yaw, *input);
        input.consume_edges();

        let mut backend = RapierBackend::new(&context, entity, capsule, &mut *controller);
        let sink = animation
            .as_deref_mut()
            .map(|params| params as &mut dyn AnimationSink);

        // Translation двигает Rapier writeback, тик пишет только rotation
        let report = step_locomotion(
            &ctx,
            config,
            capsule,
            &mut state,
            &mut *transform,
            &mut backend,
            sink,
        );
        log_tick_events(entity, &report);
    }
}

/// Plugin: locomotion поверх bevy_rapier3d
///
/// Порядок:
/// 1. FixedUpdate: sync_contacts_from_rapier — флаги прошлого physics step
/// 2. FixedUpdate: locomotion_tick_rapier — тик, translation → KinematicCharacterController
/// 3. FixedPostUpdate: Rapier step (character controller, writeback)
pub struct RapierLocomotionPlugin;

impl Plugin for RapierLocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (sync_contacts_from_rapier, locomotion_tick_rapier)
                .chain()
                .in_set(LocomotionSet::Tick),
        );
    }
}

/// Spawn helper для Rapier актора
///
/// Создает entity с полным набором компонентов:
/// - LocomotionActor (+ required config/state/input)
/// - AnimationParameters (in-process animation sink)
/// - Rapier: Collider (capsule) + KinematicCharacterController
///
/// `position` — центр capsule.
pub fn spawn_rapier_locomotion_actor(
    commands: &mut Commands,
    position: Vec3,
    config: LocomotionConfig,
    capsule: CapsuleShape,
) -> Entity {
    commands
        .spawn((
            LocomotionActor,
            Transform::from_translation(position),
            config,
            capsule,
            AnimationParameters::default(),
            Collider::capsule_y(capsule.half_segment(), capsule.radius),
            KinematicCharacterController {
                max_slope_climb_angle: capsule.slope_limit.to_radians(),
                snap_to_ground: Some(CharacterLength::Absolute(config.ground_ray_distance)),
                ..default()
            },
        ))
        .id()
}
