//! Player domain: spawning and the one-player rule.

use avian2d::prelude::*;
use bevy::app::AppExit;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::GameState;
use crate::level::LevelLayout;
use crate::player::{GameLayer, Grounded, Player, PlayerController, PlayerHandle, PlayerTuning};

/// Spawn a player at every spawn point in the layout. More than one is a
/// configuration error and aborts the app.
pub(crate) fn spawn_player(
    mut commands: Commands,
    layout: Res<LevelLayout>,
    tuning: Res<PlayerTuning>,
    mut handle: ResMut<PlayerHandle>,
    mut exit: MessageWriter<AppExit>,
) {
    for spawn_point in &layout.player_spawns {
        let mut controller = PlayerController::new(&tuning);
        // Spawn grace so nothing standing near the spawn point lands a hit
        controller.auto_iframes();

        let entity = commands
            .spawn((
                (Player, controller, Grounded::default()),
                Sprite {
                    color: Color::srgb(0.85, 0.75, 0.95),
                    custom_size: Some(tuning.body_size),
                    ..default()
                },
                Transform::from_xyz(spawn_point.x, spawn_point.y, 1.0),
                Visibility::default(),
                (
                    RigidBody::Dynamic,
                    Collider::rectangle(tuning.body_size.x, tuning.body_size.y),
                    LockedAxes::ROTATION_LOCKED,
                    LinearVelocity::default(),
                    GravityScale(1.0),
                    Friction::new(0.0),
                    CollisionEventsEnabled,
                    CollisionLayers::new(
                        GameLayer::Player,
                        [GameLayer::Ground, GameLayer::Enemy, GameLayer::Sensor],
                    ),
                ),
                DespawnOnExit(GameState::Run),
            ))
            .id();

        if let Err(e) = handle.register(entity) {
            error!("Player spawn failed: {}", e);
            commands.entity(entity).despawn();
            exit.write(AppExit::error());
            return;
        }

        info!("Spawned player {:?} at {:?}", entity, spawn_point);
    }
}

pub(crate) fn clear_player_handle(mut handle: ResMut<PlayerHandle>) {
    handle.clear();
}
