//! DashController — timed forward impulse
//!
//! trigger() → remaining = dash_time (перезапуск в любой момент).
//! tick(dt): remaining -= dt (не ниже 0), displacement вдоль forward камеры
//! = dash_speed * (remaining / dash_time) * dt — линейно затухает до 0.
//! Пока dash активен, orientation принудительно смотрит в камеру.

use bevy::prelude::*;

use crate::components::yaw_rotation;

/// Инвариант: 0 ≤ remaining; remaining ≤ dash_time (кроме live-изменения dash_time)
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct DashState {
    /// Оставшееся время dash (секунды), 0 = неактивен
    pub remaining: f32,
}

/// Результат dash на одном тике
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashTick {
    /// Dash управлял этим тиком (orientation override)
    pub active: bool,
    /// Дополнительный displacement (метры), сверх обычного move
    pub displacement: Vec3,
}

impl DashTick {
    pub const IDLE: Self = Self {
        active: false,
        displacement: Vec3::ZERO,
    };
}

impl DashState {
    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn trigger(&mut self, dash_time: f32) {
        self.remaining = dash_time.max(0.0);
    }

    pub fn tick(&mut self, dt: f32, dash_time: f32, dash_speed: f32, camera_yaw: f32) -> DashTick {
        if !self.is_active() {
            return DashTick::IDLE;
        }

        // dash_time обнулили посреди dash → просто гасим
        if dash_time <= 0.0 {
            self.remaining = 0.0;
            return DashTick::IDLE;
        }

        self.remaining = (self.remaining - dt).max(0.0);

        let speed = dash_speed * (self.remaining / dash_time);
        let forward = yaw_rotation(camera_yaw) * Vec3::Z;

        DashTick {
            active: true,
            displacement: forward * speed * dt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DASH_TIME: f32 = 0.5;
    const DASH_SPEED: f32 = 20.0;

    #[test]
    fn test_inactive_by_default() {
        let mut dash = DashState::default();
        assert!(!dash.is_active());
        assert_eq!(dash.tick(0.02, DASH_TIME, DASH_SPEED, 0.0), DashTick::IDLE);
        assert_eq!(dash.remaining, 0.0);
    }

    #[test]
    fn test_displacement_decays_to_zero() {
        let dt = 0.02;
        let mut dash = DashState::default();
        dash.trigger(DASH_TIME);

        let mut previous = f32::MAX;
        let mut elapsed = 0.0;
        let mut ticks = 0;

        while dash.is_active() {
            let tick = dash.tick(dt, DASH_TIME, DASH_SPEED, 0.0);
            elapsed += dt;
            ticks += 1;

            assert!(tick.active);
            let magnitude = tick.displacement.length();
            assert!(magnitude < previous, "tick {}: {} !< {}", ticks, magnitude, previous);
            previous = magnitude;

            assert!(dash.remaining >= 0.0);
            assert!(ticks < 1000, "dash не закончился");
        }

        assert_eq!(previous, 0.0);
        assert!(elapsed >= DASH_TIME - 1e-4);

        // После конца — тишина
        assert_eq!(dash.tick(dt, DASH_TIME, DASH_SPEED, 0.0), DashTick::IDLE);
    }

    #[test]
    fn test_first_tick_is_near_full_speed() {
        let dt = 0.001;
        let mut dash = DashState::default();
        dash.trigger(DASH_TIME);

        let tick = dash.tick(dt, DASH_TIME, DASH_SPEED, 0.0);
        let expected = Vec3::Z * DASH_SPEED * dt;

        assert!((tick.displacement - expected).length() < DASH_SPEED * dt * 0.01);
        assert!((dash.remaining - DASH_TIME).abs() <= dt + 1e-6);
    }

    #[test]
    fn test_retrigger_restarts_countdown() {
        let mut dash = DashState::default();
        dash.trigger(DASH_TIME);

        for _ in 0..10 {
            dash.tick(0.02, DASH_TIME, DASH_SPEED, 0.0);
        }
        assert!(dash.remaining < DASH_TIME);

        dash.trigger(DASH_TIME);
        assert_eq!(dash.remaining, DASH_TIME);
    }

    #[test]
    fn test_remaining_floors_at_zero() {
        let mut dash = DashState { remaining: 0.01 };

        let tick = dash.tick(0.02, DASH_TIME, DASH_SPEED, 0.0);
        assert!(tick.active);
        assert_eq!(dash.remaining, 0.0);
        assert_eq!(tick.displacement, Vec3::ZERO);
    }

    #[test]
    fn test_follows_camera_forward() {
        let mut dash = DashState::default();
        dash.trigger(DASH_TIME);

        let tick = dash.tick(0.02, DASH_TIME, DASH_SPEED, 90.0);
        let direction = tick.displacement.normalize();
        assert!((direction - Vec3::X).length() < 1e-5, "{:?}", direction);
    }

    #[test]
    fn test_zero_dash_time_never_activates() {
        let mut dash = DashState::default();
        dash.trigger(0.0);
        assert!(!dash.is_active());

        let mut live = DashState { remaining: 0.3 };
        assert_eq!(live.tick(0.02, 0.0, DASH_SPEED, 0.0), DashTick::IDLE);
        assert_eq!(live.remaining, 0.0);
    }
}
