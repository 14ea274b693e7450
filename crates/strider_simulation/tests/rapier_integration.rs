//! Integration тесты Rapier backend'а
//!
//! MinimalPlugins + Rapier в fixed schedule, пол — cuboid с верхней гранью на y = 0.
//! Актор: capsule (height 2) → центр collider'а на y ≈ 1.

use std::time::Duration;

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy::transform::TransformPlugin;
use bevy_rapier3d::prelude::*;
use strider_simulation::{
    spawn_rapier_locomotion_actor, AnimationParameters, CapsuleShape, ContactFlags, InputSample,
    LocomotionConfig, LocomotionPlugin, LocomotionState, PhysicsBackend, RapierBackend,
    RapierLocomotionPlugin, TICK_RATE_HZ,
};

fn setup_rapier_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, TransformPlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / TICK_RATE_HZ,
        )))
        .insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
        .add_plugins((
            RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule(),
            LocomotionPlugin,
            RapierLocomotionPlugin,
        ));

    // Пол 100x100, верхняя грань на y = 0
    app.world_mut().spawn((
        Collider::cuboid(50.0, 0.5, 50.0),
        Transform::from_xyz(0.0, -0.5, 0.0),
    ));

    app.update(); // Startup (rapier context) + старт часов
    app
}

fn spawn_actor(app: &mut App, input: InputSample) -> Entity {
    let world = app.world_mut();
    let actor = {
        let mut commands = world.commands();
        let actor = spawn_rapier_locomotion_actor(
            &mut commands,
            Vec3::new(0.0, 1.02, 0.0),
            LocomotionConfig::default(),
            CapsuleShape::default(),
        );
        commands.entity(actor).insert(input);
        actor
    };
    world.flush();
    actor
}

fn run_ticks(app: &mut App, ticks: usize) {
    for _ in 0..ticks {
        app.update();
    }
}

fn position(app: &App, entity: Entity) -> Vec3 {
    app.world().get::<Transform>(entity).unwrap().translation
}

#[test]
fn test_actor_walks_and_becomes_grounded() {
    let mut app = setup_rapier_app();
    let actor = spawn_actor(&mut app, InputSample::new(0.0, 1.0));

    run_ticks(&mut app, 120); // 2 секунды при 7 m/s

    let pos = position(&app, actor);
    assert!(pos.z > 5.0, "z = {}", pos.z);
    assert!(pos.y > 0.9 && pos.y < 1.2, "y = {}", pos.y); // стоит на полу, не провалился

    // Output прошлого step → LocomotionState до тика
    let state = app.world().get::<LocomotionState>(actor).unwrap();
    assert!(state.contacts.grounded);
    assert!(!state.contacts.collision_above);

    let params = app.world().get::<AnimationParameters>(actor).unwrap();
    assert!(params.is_grounded);
    assert_eq!(params.move_amount, 1.0);
}

#[test]
fn test_dash_moves_actor_forward() {
    let mut app = setup_rapier_app();
    let actor = spawn_actor(&mut app, InputSample::default().with_dash());

    run_ticks(&mut app, 45);

    // Дискретный dash ≈ 4.8м вдоль forward камеры (+Z), без ввода осей
    let pos = position(&app, actor);
    assert!(pos.z > 3.5 && pos.z < 5.2, "z = {}", pos.z);
    assert!(pos.x.abs() < 0.05, "x = {}", pos.x);

    let state = app.world().get::<LocomotionState>(actor).unwrap();
    assert!(!state.dash.is_active());
}

#[test]
fn test_ground_ray_skips_own_collider() {
    let mut app = setup_rapier_app();

    // Capsule висит в 0.05м над полом (центр на 1.05)
    let actor = app
        .world_mut()
        .spawn((
            Collider::capsule_y(0.5, 0.5),
            Transform::from_xyz(0.0, 1.05, 0.0),
        ))
        .id();
    run_ticks(&mut app, 3); // collider'ы в query pipeline

    let (near, far) = app
        .world_mut()
        .run_system_once(move |rapier: ReadRapierContext| -> (Option<Vec3>, Option<Vec3>) {
            let Ok(context) = rapier.single() else {
                return (None, None);
            };
            let mut controller = KinematicCharacterController::default();
            let backend =
                RapierBackend::new(&context, actor, &CapsuleShape::default(), &mut controller);

            // 0.1м от низа capsule: ray от центра длиной 0.1 + half height
            let near = backend.cast_ground_ray(Vec3::new(0.0, 1.05, 0.0), Vec3::NEG_Y, 0.1);
            let far = backend.cast_ground_ray(Vec3::new(0.0, 1.5, 0.0), Vec3::NEG_Y, 0.1);
            (near, far)
        })
        .unwrap();

    // Свой collider исключён → попадание в пол с normal вверх
    let normal = near.expect("пол в пределах луча");
    assert!((normal - Vec3::Y).length() < 1e-3, "normal = {:?}", normal);

    // 0.5м над полом — вне луча, и свой collider тоже не ловим
    assert_eq!(far, None);
}

#[test]
fn test_moves_accumulate_into_controller() {
    let mut app = setup_rapier_app();
    let actor = app
        .world_mut()
        .spawn((Collider::capsule_y(0.5, 0.5), Transform::from_xyz(0.0, 1.0, 0.0)))
        .id();

    let (first, second, translation) = app
        .world_mut()
        .run_system_once(move |rapier: ReadRapierContext| -> (
            Option<ContactFlags>,
            Option<ContactFlags>,
            Option<Vec3>,
        ) {
            let Ok(context) = rapier.single() else {
                return (None, None, None);
            };
            let mut controller = KinematicCharacterController::default();
            let mut transform = Transform::from_xyz(0.0, 1.0, 0.0);

            let mut backend =
                RapierBackend::new(&context, actor, &CapsuleShape::default(), &mut controller);
            // Обычный move + dash в одном тике
            let first = backend.move_and_collide(&mut transform, Vec3::new(0.0, -0.1, 0.14));
            let second = backend.move_and_collide(&mut transform, Vec3::new(0.0, 0.0, 0.38));

            assert_eq!(transform.translation, Vec3::new(0.0, 1.0, 0.0)); // двигает Rapier
            (first, second, controller.translation)
        })
        .unwrap();

    // Контакты придут после physics step
    assert_eq!(first, None);
    assert_eq!(second, None);

    let total = translation.expect("translation записан в controller");
    assert!((total - Vec3::new(0.0, -0.1, 0.52)).length() < 1e-6, "total = {:?}", total);
}
