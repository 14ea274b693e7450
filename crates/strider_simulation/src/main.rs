//! Headless симуляция Strider
//!
//! Scripted "игрок" бегает по FlatWorld, 1000 тиков.
//! Usage: strider_simulation [profile.json]

use bevy::prelude::*;
use strider_simulation::{
    create_headless_app, log_error, log_info, spawn_locomotion_actor, ActorProfile,
    LocomotionState, Player, ScriptedDriver,
};

fn main() {
    let seed = 42;
    let mut app = create_headless_app(seed);
    log_info(&format!("Starting Strider headless simulation (seed: {})", seed));

    // Профиль актора: файл из аргументов, иначе defaults
    let profile = match std::env::args().nth(1) {
        Some(path) => ActorProfile::load_from_file(&path).unwrap_or_else(|err| {
            log_error(&format!("{}; falling back to default profile", err));
            ActorProfile::default()
        }),
        None => ActorProfile::default(),
    };

    let world = app.world_mut();
    let player = {
        let mut commands = world.commands();
        let player = spawn_locomotion_actor(&mut commands, Vec3::ZERO, profile);
        commands
            .entity(player)
            .insert((Player, ScriptedDriver::default()));
        player
    };
    world.flush();

    // Запускаем 1000 тиков симуляции
    for tick in 0..1000 {
        app.update();

        if tick % 100 == 0 {
            if let (Some(transform), Some(state)) = (
                app.world().get::<Transform>(player),
                app.world().get::<LocomotionState>(player),
            ) {
                println!(
                    "Tick {}: position {:.2?}, grounded {}, dash {:.2}",
                    tick, transform.translation, state.contacts.grounded, state.dash.remaining
                );
            }
        }
    }

    println!("Simulation complete!");
}
