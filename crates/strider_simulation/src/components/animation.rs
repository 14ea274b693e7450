//! Animation sink: куда locomotion пишет параметры для animation graph

use bevy::prelude::*;

pub const PARAM_MOVE: &str = "move";
pub const PARAM_DIRECTION: &str = "direction";
pub const PARAM_IS_GROUNDED: &str = "isGrounded";

/// Именованные параметры animation graph (float + bool)
///
/// Host engine может реализовать это поверх своего animator'а.
pub trait AnimationSink {
    fn set_float(&mut self, name: &str, value: f32);
    fn set_bool(&mut self, name: &str, value: bool);
}

/// In-process sink: последние записанные значения
///
/// Актор без этого компонента просто не получает animation mapping.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AnimationParameters {
    pub move_amount: f32,
    pub direction: f32,
    pub is_grounded: bool,
}

impl AnimationSink for AnimationParameters {
    fn set_float(&mut self, name: &str, value: f32) {
        match name {
            PARAM_MOVE => self.move_amount = value,
            PARAM_DIRECTION => self.direction = value,
            _ => {}
        }
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        if name == PARAM_IS_GROUNDED {
            self.is_grounded = value;
        }
    }
}
