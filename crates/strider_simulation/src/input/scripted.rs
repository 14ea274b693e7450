//! Scripted input driver (headless прогоны, determinism тесты)
//!
//! Каждые N тиков выбирает новое направление, с заданной вероятностью
//! жмёт jump/dash. Весь рандом из DeterministicRng → один seed = один прогон.

use bevy::prelude::*;
use rand::Rng;

use crate::components::{InputSample, Player};
use crate::locomotion::LocomotionSet;
use crate::DeterministicRng;

/// Параметры бота-"игрока"
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ScriptedDriver {
    /// Сколько тиков держать направление (min..=max)
    pub min_hold_ticks: u32,
    pub max_hold_ticks: u32,
    /// Вероятность jump на тике
    pub jump_chance: f64,
    /// Вероятность dash на тике
    pub dash_chance: f64,
    /// Тиков до смены направления
    pub hold_remaining: u32,
    /// Текущие axes
    pub horizontal: f32,
    pub vertical: f32,
}

impl Default for ScriptedDriver {
    fn default() -> Self {
        Self {
            min_hold_ticks: 30,
            max_hold_ticks: 120,
            jump_chance: 0.01,
            dash_chance: 0.005,
            hold_remaining: 0,
            horizontal: 0.0,
            vertical: 0.0,
        }
    }
}

impl ScriptedDriver {
    /// Следующий sample; направление меняется когда hold истёк
    pub fn next_sample(&mut self, rng: &mut impl Rng) -> InputSample {
        if self.hold_remaining == 0 {
            self.horizontal = rng.gen_range(-1.0..=1.0);
            self.vertical = rng.gen_range(-1.0..=1.0);
            let max = self.max_hold_ticks.max(self.min_hold_ticks);
            self.hold_remaining = rng.gen_range(self.min_hold_ticks..=max).max(1);
        }
        self.hold_remaining -= 1;

        let mut sample = InputSample::new(self.horizontal, self.vertical);
        sample.jump = rng.gen_bool(self.jump_chance.clamp(0.0, 1.0));
        sample.dash = rng.gen_bool(self.dash_chance.clamp(0.0, 1.0));
        sample
    }
}

pub struct ScriptedInputPlugin;

impl Plugin for ScriptedInputPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ScriptedDriver>().add_systems(
            FixedUpdate,
            scripted_input_system.in_set(LocomotionSet::Input),
        );
    }
}

/// System: ScriptedDriver → InputSample
///
/// Итерация в порядке Entity для стабильной последовательности RNG.
pub fn scripted_input_system(
    mut drivers: Query<(Entity, &mut ScriptedDriver, &mut InputSample), With<Player>>,
    mut rng: ResMut<DeterministicRng>,
) {
    let mut ordered: Vec<_> = drivers.iter_mut().collect();
    ordered.sort_by_key(|(entity, _, _)| *entity);

    for (_, mut driver, mut input) in ordered {
        let sample = driver.next_sample(&mut rng.rng);
        input.latch(sample);
    }
}
