//! Конфигурация актора: tunables локомоции + параметры capsule
//!
//! Загружается из JSON (ActorProfile), санитизируется ОДИН раз при загрузке.
//! Сами вычисления локомоции конфиг не валидируют — считают его уже чистым.

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Политика ориентации актора
///
/// Выбирается один раз на актора. Её читают и OrientationController
/// (куда поворачиваться), и animation mapping (какие параметры писать).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacingPolicy {
    /// Всегда смотрим туда же куда камера (strafe-style)
    #[default]
    StareAtCamera,
    /// Поворачиваемся в направлении движения
    FaceTravel,
}

/// Tunables локомоции (per-actor)
///
/// Меняются между тиками (live tuning), никогда внутри тика.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Горизонтальная скорость (m/s)
    pub move_speed: f32,
    /// Максимальный slope bias (на угле = slope_limit)
    pub slope_force: f32,
    /// Скорость сглаживания поворота (factor = rotation_slerp * dt)
    pub rotation_slerp: f32,
    /// Модуль гравитации (m/s², положительный)
    pub gravity: f32,
    /// Вертикальная скорость прыжка (m/s)
    pub jump_force: f32,
    /// Стартовая скорость dash (m/s), линейно падает до 0
    pub dash_speed: f32,
    /// Длительность dash (секунды)
    pub dash_time: f32,
    pub facing: FacingPolicy,
    /// Длина ground ray под актором (метры)
    pub ground_ray_distance: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 7.0,
            slope_force: 5.0,
            rotation_slerp: 5.0,
            gravity: 9.81,
            jump_force: 10.0,
            dash_speed: 20.0,
            dash_time: 0.5,
            facing: FacingPolicy::StareAtCamera,
            ground_ray_distance: 0.1,
        }
    }
}

impl LocomotionConfig {
    /// Отрицательные (и NaN) значения → 0
    pub fn sanitized(self) -> Self {
        Self {
            move_speed: self.move_speed.max(0.0),
            slope_force: self.slope_force.max(0.0),
            rotation_slerp: self.rotation_slerp.max(0.0),
            gravity: self.gravity.max(0.0),
            jump_force: self.jump_force.max(0.0),
            dash_speed: self.dash_speed.max(0.0),
            dash_time: self.dash_time.max(0.0),
            facing: self.facing,
            ground_ray_distance: self.ground_ray_distance.max(0.0),
        }
    }
}

/// Capsule параметры, которые поставляет physics backend
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct CapsuleShape {
    /// Полная высота capsule (метры)
    pub height: f32,
    pub radius: f32,
    /// Максимальный проходимый уклон (градусы)
    pub slope_limit: f32,
}

impl Default for CapsuleShape {
    fn default() -> Self {
        Self {
            height: 2.0,
            radius: 0.5,
            slope_limit: 45.0,
        }
    }
}

impl CapsuleShape {
    pub fn sanitized(self) -> Self {
        Self {
            height: self.height.max(0.0),
            radius: self.radius.max(0.0),
            slope_limit: self.slope_limit.clamp(0.0, 90.0),
        }
    }

    /// Половина цилиндрической части (для Collider::capsule_y)
    pub fn half_segment(&self) -> f32 {
        (self.height * 0.5 - self.radius).max(0.0)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read actor profile {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid actor profile: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Файл профиля актора (JSON)
///
/// ```json
/// { "locomotion": { "move_speed": 6.0, "facing": "face_travel" },
///   "capsule": { "height": 1.8 } }
/// ```
/// Отсутствующие поля берутся из Default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorProfile {
    pub locomotion: LocomotionConfig,
    pub capsule: CapsuleShape,
}

impl ActorProfile {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let profile: ActorProfile = serde_json::from_str(json)?;
        Ok(profile.sanitized())
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn sanitized(self) -> Self {
        Self {
            locomotion: self.locomotion.sanitized(),
            capsule: self.capsule.sanitized(),
        }
    }
}
