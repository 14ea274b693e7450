//! Strider Simulation Core
//!
//! Third-person locomotion controller на Bevy 0.16.
//!
//! Слои:
//! - locomotion: чистая логика тика (ground, vertical, horizontal, dash, orientation, animation)
//! - physics: PhysicsBackend (FlatWorld для headless/тестов, Rapier для игры)
//! - input: keyboard и scripted driver → InputSample
//! - components/config: ECS данные актора + JSON профили
//!
//! Рендер, камера и animation graph — снаружи (host engine).

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod components;
pub mod config;
pub mod input;
pub mod locomotion;
pub mod logger;
pub mod physics;

// Re-export базовых типов для удобства
pub use components::*;
pub use config::{ActorProfile, CapsuleShape, ConfigError, FacingPolicy, LocomotionConfig};
pub use input::{KeyBindings, KeyboardInputPlugin, ScriptedDriver, ScriptedInputPlugin};
pub use locomotion::{
    step_locomotion, DashState, LocomotionPlugin, LocomotionSet, TickContext, TickReport,
};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger,
    set_logger_if_needed, LogLevel, LogPrinter,
};
pub use physics::{
    spawn_rapier_locomotion_actor, FlatWorld, FlatWorldPlugin, PhysicsBackend, RapierBackend,
    RapierLocomotionPlugin,
};

/// Частота simulation тика (Hz)
pub const TICK_RATE_HZ: f64 = 60.0;

/// Главный plugin симуляции (headless вариант: FlatWorld backend)
///
/// Rapier игра собирается иначе: LocomotionPlugin + RapierLocomotionPlugin
/// + RapierPhysicsPlugin в fixed schedule.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Seed мог поставить create_headless_app — не перетираем
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app
            // Fixed timestep 60Hz для locomotion tick
            .insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
            .add_plugins((LocomotionPlugin, FlatWorldPlugin, ScriptedInputPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время двигается вручную: каждый `app.update()` = ровно один fixed тик
/// (кроме самого первого — он только стартует часы).
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / TICK_RATE_HZ,
        )))
        .add_plugins(SimulationPlugin);

    app
}

/// Spawn актора с FlatWorld-совместимым набором компонентов
///
/// `position` — низ capsule (FlatWorld меряет контакт по нему).
pub fn spawn_locomotion_actor(commands: &mut Commands, position: Vec3, profile: ActorProfile) -> Entity {
    commands
        .spawn((
            LocomotionActor,
            Transform::from_translation(position),
            profile.locomotion,
            profile.capsule,
            AnimationParameters::default(),
        ))
        .id()
}

/// Snapshot всех locomotion акторов для сравнения детерминизма
///
/// Побитово: позиция, rotation, вертикальная скорость, dash, контакты.
pub fn locomotion_snapshot(world: &mut World) -> Vec<u8> {
    let mut snapshot = Vec::new();

    let mut query = world.query_filtered::<(Entity, &Transform, &LocomotionState), With<LocomotionActor>>();
    let mut actors: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    actors.sort_by_key(|(entity, _, _)| entity.index());

    for (entity, transform, state) in actors {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());

        let floats = transform
            .translation
            .to_array()
            .into_iter()
            .chain(transform.rotation.to_array())
            .chain([
                state.motion.vertical_velocity,
                state.motion.last_input_angle,
                state.dash.remaining,
            ]);
        for value in floats {
            snapshot.extend_from_slice(&value.to_bits().to_le_bytes());
        }

        snapshot.push(state.contacts.grounded as u8);
        snapshot.push(state.contacts.collision_above as u8);
    }

    snapshot
}
