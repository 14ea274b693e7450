//! Состояние движения актора между тиками

use bevy::prelude::*;

use crate::locomotion::DashState;

/// Контакты от physics backend (результат последнего move)
///
/// Персистят между тиками: move на тике N → флаги читаются на тике N+1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub struct ContactFlags {
    pub grounded: bool,
    pub collision_above: bool,
}

/// Ground state текущего тика
///
/// Инвариант: собирается заново каждый тик, никогда не кешируется.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundInfo {
    pub grounded: bool,
    /// Unit normal под актором (world up если ray ничего не нашёл)
    pub normal: Vec3,
    pub collision_above: bool,
}

impl GroundInfo {
    pub fn new(contacts: ContactFlags, normal: Vec3) -> Self {
        Self {
            grounded: contacts.grounded,
            normal,
            collision_above: contacts.collision_above,
        }
    }

    /// Ровный пол без потолка
    pub fn flat(grounded: bool) -> Self {
        Self {
            grounded,
            normal: Vec3::Y,
            collision_above: false,
        }
    }
}

/// Интеграторы движения
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct MotionState {
    /// Вертикальная скорость (m/s, + вверх), интегрируется между тиками
    pub vertical_velocity: f32,
    /// Последний ненулевой input angle (градусы, camera-relative)
    pub last_input_angle: f32,
    /// Полная скорость последнего тика (без dash)
    pub velocity: Vec3,
}

/// Всё per-actor состояние локомоции одним компонентом
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct LocomotionState {
    pub motion: MotionState,
    pub dash: DashState,
    pub contacts: ContactFlags,
}

impl LocomotionState {
    pub fn grounded() -> Self {
        Self {
            contacts: ContactFlags {
                grounded: true,
                collision_above: false,
            },
            ..default()
        }
    }
}
