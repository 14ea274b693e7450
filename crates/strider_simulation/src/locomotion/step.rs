//! Один locomotion тик
//!
//! Порядок:
//! 1. ground sample (ray под актором)
//! 2. vertical velocity
//! 3. horizontal motion (camera-relative, по склону)
//! 4. mover (velocity * dt → backend)
//! 5. dash trigger/tick (нужен до orientation ради override)
//! 6. orientation (dash активен → StareAtCamera)
//! 7. dash displacement (отдельный move сверх обычного)
//! 8. animation mapping
//!
//! Dash override: ровно одна slerp за тик, с политикой StareAtCamera вместо
//! политики актора. Второй slerp поверх обычного (двойной поворот на dash
//! тиках) намеренно не делаем: скорость поворота не зависит от dash.
//!
//! Никаких глобалей: dt, yaw камеры и ввод приходят в TickContext.

use bevy::prelude::*;

use crate::components::{AnimationSink, GroundInfo, InputSample, LocomotionState};
use crate::config::{CapsuleShape, FacingPolicy, LocomotionConfig};
use crate::locomotion::animation::map_animation;
use crate::locomotion::ground::sample_ground_normal;
use crate::locomotion::horizontal::{compose_horizontal, compose_velocity};
use crate::locomotion::mover::apply_motion;
use crate::locomotion::orientation::update_orientation;
use crate::locomotion::vertical::update_vertical_velocity;
use crate::physics::PhysicsBackend;

/// Всё что тик читает извне, снятое один раз на входе
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub dt: f32,
    /// Yaw камеры (градусы)
    pub camera_yaw: f32,
    pub input: InputSample,
}

impl TickContext {
    pub fn new(dt: f32, camera_yaw: f32, input: InputSample) -> Self {
        Self {
            dt,
            camera_yaw,
            input,
        }
    }
}

/// Что произошло за тик (логи, тесты)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Полная скорость обычного move (без dash)
    pub velocity: Vec3,
    pub ground_normal: Vec3,
    pub dash_active: bool,
    pub dash_displacement: Vec3,
    pub jumped: bool,
    pub dash_triggered: bool,
    /// Подъём погашен потолком
    pub ceiling_bump: bool,
}

pub fn step_locomotion<B: PhysicsBackend + ?Sized>(
    ctx: &TickContext,
    config: &LocomotionConfig,
    capsule: &CapsuleShape,
    state: &mut LocomotionState,
    transform: &mut Transform,
    backend: &mut B,
    sink: Option<&mut dyn AnimationSink>,
) -> TickReport {
    let input = ctx.input;

    // 1. Ground
    let ground_normal = sample_ground_normal(
        backend,
        transform.translation,
        *transform.up(),
        config.ground_ray_distance,
    );
    let ground = GroundInfo::new(state.contacts, ground_normal);

    // 2. Vertical
    let previous_vertical = state.motion.vertical_velocity;
    let vertical =
        update_vertical_velocity(&ground, input.jump, ctx.dt, previous_vertical, config, capsule);
    let jumped = ground.grounded && input.jump;
    let ceiling_bump = !ground.grounded
        && ground.collision_above
        && previous_vertical - config.gravity * ctx.dt > 0.0;
    state.motion.vertical_velocity = vertical;

    // 3. Horizontal
    let horizontal = compose_horizontal(
        &input,
        ctx.camera_yaw,
        ground_normal,
        config.move_speed,
        state.motion.last_input_angle,
    );
    state.motion.last_input_angle = horizontal.input_angle;

    let velocity = compose_velocity(vertical, horizontal.velocity);
    state.motion.velocity = velocity;

    // 4. Mover
    if let Some(contacts) = apply_motion(backend, transform, velocity, ctx.dt) {
        state.contacts = contacts;
    }

    // 5. Dash
    if input.dash {
        state.dash.trigger(config.dash_time);
    }
    let dash = state
        .dash
        .tick(ctx.dt, config.dash_time, config.dash_speed, ctx.camera_yaw);

    // 6. Orientation
    let policy = if dash.active {
        FacingPolicy::StareAtCamera
    } else {
        config.facing
    };
    transform.rotation = update_orientation(
        policy,
        input.has_movement(),
        horizontal.input_angle,
        ctx.camera_yaw,
        transform.rotation,
        config.rotation_slerp,
        ctx.dt,
    );

    // 7. Dash displacement
    if dash.displacement != Vec3::ZERO {
        if let Some(contacts) = backend.move_and_collide(transform, dash.displacement) {
            state.contacts = contacts;
        }
    }

    // 8. Animation (политика актора, не dash override)
    map_animation(config.facing, &input, state.contacts.grounded, sink);

    TickReport {
        velocity,
        ground_normal,
        dash_active: dash.active,
        dash_displacement: dash.displacement,
        jumped,
        dash_triggered: input.dash && dash.active,
        ceiling_bump,
    }
}

/// Debug лог событий тика (jump, dash, потолок)
pub fn log_tick_events(entity: Entity, report: &TickReport) {
    if report.jumped {
        crate::logger::log(&format!(
            "{:?}: jump (vertical {:.2} m/s)",
            entity, report.velocity.y
        ));
    }
    if report.dash_triggered {
        crate::logger::log(&format!("{:?}: dash started", entity));
    }
    if report.ceiling_bump {
        crate::logger::log(&format!("{:?}: ceiling bump, upward velocity cancelled", entity));
    }
}
