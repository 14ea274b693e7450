//! Input snapshot для одного тика

use bevy::prelude::*;

/// Ввод актора (axes + button edges)
///
/// Axes живут в [-1, 1]: `horizontal` +1 = вправо, `vertical` +1 = вперёд.
/// `jump`/`dash` — edge-triggered: input system их латчит между тиками,
/// tick копирует sample на входе и сбрасывает edges после себя.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct InputSample {
    pub horizontal: f32,
    pub vertical: f32,
    pub jump: bool,
    pub dash: bool,
}

impl InputSample {
    /// Axes клампятся в [-1, 1], NaN → 0
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal: clamp_axis(horizontal),
            vertical: clamp_axis(vertical),
            jump: false,
            dash: false,
        }
    }

    pub fn with_jump(mut self) -> Self {
        self.jump = true;
        self
    }

    pub fn with_dash(mut self) -> Self {
        self.dash = true;
        self
    }

    pub fn has_movement(&self) -> bool {
        self.horizontal != 0.0 || self.vertical != 0.0
    }

    /// Axes перезаписываются, edges накапливаются (OR) до следующего тика
    pub fn latch(&mut self, sample: InputSample) {
        self.horizontal = sample.horizontal;
        self.vertical = sample.vertical;
        self.jump |= sample.jump;
        self.dash |= sample.dash;
    }

    pub fn consume_edges(&mut self) {
        self.jump = false;
        self.dash = false;
    }
}

fn clamp_axis(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}
