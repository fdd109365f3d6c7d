//! Enemies domain: spawning from the level layout.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{Invincibility, Vitals};
use crate::core::GameState;
use crate::enemies::{Enemy, EnemyFollow, EnemyTuning};
use crate::level::LevelLayout;
use crate::player::GameLayer;

pub(crate) fn spawn_enemies(
    mut commands: Commands,
    layout: Res<LevelLayout>,
    tuning: Res<EnemyTuning>,
) {
    for position in &layout.enemy_spawns {
        commands.spawn((
            (
                Enemy {
                    contact_damage: tuning.contact_damage,
                },
                EnemyFollow {
                    speed: tuning.speed,
                    facing_right: true,
                },
                Vitals::new(
                    tuning.health,
                    Invincibility::new(tuning.invincibility_duration, tuning.blink_period),
                ),
            ),
            Sprite {
                color: Color::srgb(0.45, 0.7, 0.3),
                custom_size: Some(tuning.size),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 1.0),
            Visibility::default(),
            (
                RigidBody::Dynamic,
                Collider::rectangle(tuning.size.x, tuning.size.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                CollisionEventsEnabled,
                CollisionLayers::new(
                    GameLayer::Enemy,
                    [
                        GameLayer::Ground,
                        GameLayer::Player,
                        GameLayer::Bottle,
                        GameLayer::Sensor,
                    ],
                ),
            ),
            DespawnOnExit(GameState::Run),
        ));
    }

    info!("Spawned {} enemies", layout.enemy_spawns.len());
}
