//! Locomotion controller (third-person, kinematic)
//!
//! Один тик = ground → vertical → horizontal → mover → dash → orientation → animation.
//! Логика чистая (функции над данными), ECS только раздаёт компоненты
//! и вызывает `step_locomotion` из backend систем.
//!
//! Порядок в FixedUpdate:
//! 1. LocomotionSet::Input — input systems латчат InputSample
//! 2. LocomotionSet::Tick — backend система (FlatWorld или Rapier) гоняет тик

use bevy::prelude::*;

pub mod animation;
pub mod dash;
pub mod ground;
pub mod horizontal;
pub mod mover;
pub mod orientation;
pub mod step;
pub mod vertical;


// Re-export основных типов
pub use animation::map_animation;
pub use dash::{DashState, DashTick};
pub use ground::{sample_ground_normal, WORLD_UP};
pub use horizontal::{compose_horizontal, compose_velocity, HorizontalMotion};
pub use mover::apply_motion;
pub use orientation::{smooth_rotation, target_rotation, update_orientation};
pub use step::{log_tick_events, step_locomotion, TickContext, TickReport};
pub use vertical::{slope_force_at, update_vertical_velocity};

use crate::components::{
    AnimationParameters, CameraHeading, ContactFlags, InputSample, LocomotionActor,
    LocomotionState, MotionState, Player,
};
use crate::config::{CapsuleShape, FacingPolicy, LocomotionConfig};

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocomotionSet {
    /// Запись InputSample (keyboard, scripted driver)
    Input,
    /// Locomotion тик против physics backend
    Tick,
}

/// Locomotion Plugin (backend-agnostic часть)
///
/// Backend добавляется отдельно: FlatWorldPlugin или RapierLocomotionPlugin.
pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<LocomotionActor>()
            .register_type::<Player>()
            .register_type::<LocomotionConfig>()
            .register_type::<CapsuleShape>()
            .register_type::<FacingPolicy>()
            .register_type::<LocomotionState>()
            .register_type::<MotionState>()
            .register_type::<ContactFlags>()
            .register_type::<DashState>()
            .register_type::<InputSample>()
            .register_type::<AnimationParameters>()
            .register_type::<CameraHeading>();

        app.init_resource::<CameraHeading>();

        app.configure_sets(
            FixedUpdate,
            (LocomotionSet::Input, LocomotionSet::Tick).chain(),
        );
    }
}
