//! Маркеры акторов локомоции

use bevy::prelude::*;

use crate::config::{CapsuleShape, LocomotionConfig};
use crate::components::{InputSample, LocomotionState};

/// Актор управляемый locomotion controller'ом
///
/// Автоматически добавляет config, capsule, state и input через Required Components.
/// Transform.rotation = facing. Transform.translation = origin актора,
/// его смысл задаёт backend (FlatWorld: низ capsule, Rapier: центр collider'а).
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(LocomotionConfig, CapsuleShape, LocomotionState, InputSample, Transform)]
pub struct LocomotionActor;

/// Marker component для player-controlled актора
///
/// Input systems (keyboard, scripted driver) пишут InputSample только
/// в акторов с этим маркером.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Player;
