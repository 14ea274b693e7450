//! Input sources для InputSample
//!
//! - keyboard: ButtonInput<KeyCode> → Player акторы (Update, латчинг между тиками)
//! - scripted: детерминированный driver поверх DeterministicRng (FixedUpdate)
//!
//! Оба пишут только в акторов с маркером Player.

use bevy::prelude::*;

pub mod scripted;

pub use scripted::{ScriptedDriver, ScriptedInputPlugin};

use crate::components::{InputSample, Player};

/// Key bindings (WASD/стрелки, Space jump, Z dash)
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct KeyBindings {
    pub forward: Vec<KeyCode>,
    pub backward: Vec<KeyCode>,
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
    pub jump: KeyCode,
    pub dash: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: vec![KeyCode::KeyW, KeyCode::ArrowUp],
            backward: vec![KeyCode::KeyS, KeyCode::ArrowDown],
            left: vec![KeyCode::KeyA, KeyCode::ArrowLeft],
            right: vec![KeyCode::KeyD, KeyCode::ArrowRight],
            jump: KeyCode::Space,
            dash: KeyCode::KeyZ,
        }
    }
}

impl KeyBindings {
    /// Snapshot клавиатуры в InputSample (цифровые оси: -1, 0, 1)
    pub fn sample(&self, keys: &ButtonInput<KeyCode>) -> InputSample {
        let axis = |negative: &[KeyCode], positive: &[KeyCode]| {
            let mut value = 0.0;
            if keys.any_pressed(positive.iter().copied()) {
                value += 1.0;
            }
            if keys.any_pressed(negative.iter().copied()) {
                value -= 1.0;
            }
            value
        };

        let mut sample = InputSample::new(
            axis(&self.left, &self.right),
            axis(&self.backward, &self.forward),
        );
        sample.jump = keys.just_pressed(self.jump);
        sample.dash = keys.just_pressed(self.dash);
        sample
    }
}

/// Keyboard input Plugin
///
/// Ожидает ButtonInput<KeyCode> от InputPlugin (DefaultPlugins).
/// Без него (headless, MinimalPlugins) система просто ничего не делает.
pub struct KeyboardInputPlugin;

impl Plugin for KeyboardInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KeyBindings>()
            .add_systems(Update, keyboard_input_system);
    }
}

/// System: клавиатура → InputSample игрока
///
/// Update может крутиться чаще FixedUpdate: axes перезаписываются,
/// edges (jump/dash) копятся до ближайшего тика.
pub fn keyboard_input_system(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    bindings: Res<KeyBindings>,
    mut players: Query<&mut InputSample, With<Player>>,
) {
    let Some(keys) = keys else {
        return;
    };

    let sample = bindings.sample(&keys);
    for mut input in players.iter_mut() {
        input.latch(sample);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasd_axes() {
        let bindings = KeyBindings::default();
        let mut keys = ButtonInput::<KeyCode>::default();

        keys.press(KeyCode::KeyW);
        keys.press(KeyCode::KeyD);
        let sample = bindings.sample(&keys);
        assert_eq!(sample.horizontal, 1.0);
        assert_eq!(sample.vertical, 1.0);
        assert!(!sample.jump);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let bindings = KeyBindings::default();
        let mut keys = ButtonInput::<KeyCode>::default();

        keys.press(KeyCode::KeyA);
        keys.press(KeyCode::ArrowRight);
        let sample = bindings.sample(&keys);
        assert_eq!(sample.horizontal, 0.0);
        assert!(!sample.has_movement());
    }

    #[test]
    fn test_jump_and_dash_are_edges() {
        let bindings = KeyBindings::default();
        let mut keys = ButtonInput::<KeyCode>::default();

        keys.press(KeyCode::Space);
        keys.press(KeyCode::KeyZ);
        let first = bindings.sample(&keys);
        assert!(first.jump);
        assert!(first.dash);

        // Следующий кадр: клавиши всё ещё зажаты, но edge уже прошёл
        keys.clear();
        let held = bindings.sample(&keys);
        assert!(!held.jump);
        assert!(!held.dash);
    }

    #[test]
    fn test_system_latches_only_players() {
        let mut app = App::new();
        app.add_plugins(KeyboardInputPlugin);

        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::KeyS);
        keys.press(KeyCode::Space);
        app.insert_resource(keys);

        let player = app.world_mut().spawn((Player, InputSample::default())).id();
        let npc = app.world_mut().spawn(InputSample::default()).id();

        app.update();

        let player_input = app.world().get::<InputSample>(player).unwrap();
        assert_eq!(player_input.vertical, -1.0);
        assert!(player_input.jump);

        let npc_input = app.world().get::<InputSample>(npc).unwrap();
        assert_eq!(*npc_input, InputSample::default());
    }
}
