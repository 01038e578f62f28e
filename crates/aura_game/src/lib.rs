#![warn(clippy::unwrap_used)]
#![warn(clippy::perf, clippy::disallowed_types)] // performance warns
#![warn(clippy::pedantic)]
// most bevy systems violate these. Nothing I can do about it at the moment.
#![allow(
    clippy::type_complexity,
    clippy::too_many_arguments,
    clippy::needless_pass_by_value // TODO: separate out system functions from non-system 
)]
#![allow(clippy::cast_possible_truncation)]

#[cfg(feature = "developer-tools")]
use bevy::app::AppExit;
#[cfg(feature = "fps-diagnostics")]
use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};
use bevy::prelude::*;
#[cfg(feature = "developer-tools")]
use bevy_inspector_egui::quick::WorldInspectorPlugin;

use aura_controllers::{
    cursor::PointerCamera,
    player::{Controller, PlayerControllerBundle},
    HoverPlugin,
};
use aura_core::{ControlSet, CorePlugin};
use aura_physics::{Collider, PhysicsPlugin, Velocity, WalkSpeed};
use enemy::{EnemyBundle, Outline};

mod enemy;

const FLOOR_HALF_SIZE: f32 = 1024.;
const PLAYER_HALF_SIZE: f32 = 20.;

const ENEMY_POSITIONS: [Vec2; 4] = [
    Vec2::new(-200., 150.),
    Vec2::new(180., 220.),
    Vec2::new(260., -120.),
    Vec2::new(-150., -240.),
];

/// the bundle for spawning a player character
#[derive(Bundle)]
struct PlayerBundle {
    sprite: SpriteBundle,
    walk_speed: WalkSpeed,
    velocity: Velocity,
    collider: Collider,
    name: Name,
    player_controller_bundle: PlayerControllerBundle,
}

#[cfg(feature = "developer-tools")]
fn quit_on_eq(mut exit: EventWriter<AppExit>, keys: Res<Input<KeyCode>>) {
    if keys.pressed(KeyCode::Equals) {
        exit.send_default();
    }
}

/// a system to keep the player in the center of the screen
fn camera_follow_player(
    player: Query<&Transform, (With<Controller>, Without<Camera>, Changed<Transform>)>,
    mut cameras: Query<&mut Transform, (With<PointerCamera>, Without<Controller>)>,
) {
    let Ok(player) = player.get_single() else {
        return;
    };

    for mut camera in &mut cameras {
        camera.translation.x = player.translation.x;
        camera.translation.y = player.translation.y;
    }
}

pub fn run_game() {
    let mut app = App::new();

    // bevy plugins
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Aura".into(),
            ..default()
        }),
        ..default()
    }));

    #[cfg(feature = "fps-diagnostics")]
    app.add_plugins((FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin::default()));

    // world inspector & egui plugins
    #[cfg(feature = "developer-tools")]
    app.add_plugins(WorldInspectorPlugin::new());

    // our plugins
    app.add_plugins((
        CorePlugin,
        PhysicsPlugin,
        aura_controllers::Plugin,
        HoverPlugin::<Outline>::default(),
        enemy::Plugin,
    ));

    trace!("setting up resources, adding startup systems");
    app.insert_resource(ClearColor(Color::BLACK))
        .add_systems(Startup, setup)
        .add_systems(Update, camera_follow_player.in_set(ControlSet::Completed));

    #[cfg(feature = "developer-tools")]
    app.add_systems(Update, quit_on_eq);

    trace!("Running app");
    app.run();
}

fn setup(mut commands: Commands) {
    commands.spawn((Camera2dBundle::default(), PointerCamera, Name::new("Camera")));

    // blocks the cursor trace, but isn't interactable, so pointing at it clears the hover
    commands.spawn((
        SpriteBundle {
            sprite: Sprite {
                color: Color::rgb(0.15, 0.15, 0.18),
                custom_size: Some(Vec2::splat(FLOOR_HALF_SIZE * 2.)),
                ..default()
            },
            transform: Transform::from_xyz(0., 0., 0.),
            ..default()
        },
        Collider::block_all(Vec3::new(FLOOR_HALF_SIZE, FLOOR_HALF_SIZE, 0.5)),
        Name::new("Floor"),
    ));

    commands.spawn(PlayerBundle {
        sprite: SpriteBundle {
            sprite: Sprite {
                color: Color::rgb(0.3, 0.5, 0.9),
                custom_size: Some(Vec2::splat(PLAYER_HALF_SIZE * 2.)),
                ..default()
            },
            transform: Transform::from_xyz(0., 0., 1.),
            ..default()
        },
        walk_speed: WalkSpeed::default(),
        velocity: Velocity::default(),
        collider: Collider::block_all(Vec3::new(PLAYER_HALF_SIZE, PLAYER_HALF_SIZE, 0.5)),
        name: Name::new("Player"),
        player_controller_bundle: PlayerControllerBundle::default(),
    });

    for (i, position) in ENEMY_POSITIONS.into_iter().enumerate() {
        commands.spawn(EnemyBundle::new(format!("Enemy {i}"), position));
    }
}
