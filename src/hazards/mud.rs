//! Hazards domain: mud clusters that slow whatever walks through them.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use rand::Rng;

use crate::core::{GameState, ScatterRng};
use crate::enemies::Enemy;
use crate::level::LevelLayout;
use crate::player::{GameLayer, Player, PlayerController};
use crate::potions::{PotionEffect, PotionSplashEvent};

#[derive(Resource, Debug, Clone)]
pub struct HazardTuning {
    pub blob_count: usize,
    /// Half-size of the square blobs scatter in
    pub scatter: f32,
    pub blob_size: f32,
    pub slow_duration: f32,
    pub enemy_slow_multiplier: f32,
    /// Lifetime of clusters left by potions; level mud is permanent
    pub splash_lifetime: f32,
}

impl Default for HazardTuning {
    fn default() -> Self {
        Self {
            blob_count: 16,
            scatter: 32.0,
            blob_size: 14.0,
            slow_duration: 1.5,
            enemy_slow_multiplier: 0.5,
            splash_lifetime: 8.0,
        }
    }
}

#[derive(Component, Debug)]
pub struct MudBlob;

#[derive(Component, Debug)]
pub struct MudLifetime(pub f32);

/// Reduced movement speed for non-player bodies
#[derive(Component, Debug, Clone, Copy)]
pub struct Slowed {
    pub timer: f32,
    pub multiplier: f32,
}

/// Uniform offsets in a square of half-size `scatter`.
pub fn scatter_offsets(rng: &mut impl Rng, count: usize, scatter: f32) -> Vec<Vec2> {
    if scatter <= 0.0 {
        return vec![Vec2::ZERO; count];
    }
    (0..count)
        .map(|_| {
            Vec2::new(
                rng.random_range(-scatter..scatter),
                rng.random_range(-scatter..scatter),
            )
        })
        .collect()
}

fn spawn_mud_cluster(
    commands: &mut Commands,
    rng: &mut ScatterRng,
    tuning: &HazardTuning,
    center: Vec2,
    lifetime: Option<f32>,
) {
    for offset in scatter_offsets(&mut rng.0, tuning.blob_count, tuning.scatter) {
        let position = center + offset;
        let shade = rng.0.random_range(0.0..0.12);
        let mut blob = commands.spawn((
            MudBlob,
            Sprite {
                color: Color::srgb(0.4 + shade, 0.28 + shade, 0.15),
                custom_size: Some(Vec2::splat(tuning.blob_size)),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.5),
            RigidBody::Static,
            Collider::circle(tuning.blob_size * 0.5),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player, GameLayer::Enemy]),
            DespawnOnExit(GameState::Run),
        ));
        if let Some(lifetime) = lifetime {
            blob.insert(MudLifetime(lifetime));
        }
    }
}

pub(crate) fn spawn_level_mud(
    mut commands: Commands,
    layout: Res<LevelLayout>,
    tuning: Res<HazardTuning>,
    mut rng: ResMut<ScatterRng>,
) {
    for center in &layout.mud_patches {
        spawn_mud_cluster(&mut commands, &mut rng, &tuning, *center, None);
    }
}

pub(crate) fn spawn_mud_from_splashes(
    mut commands: Commands,
    mut splash_events: MessageReader<PotionSplashEvent>,
    tuning: Res<HazardTuning>,
    mut rng: ResMut<ScatterRng>,
) {
    for splash in splash_events.read() {
        if splash.effect != PotionEffect::Mud {
            continue;
        }
        debug!("Mud cluster at {:?}", splash.position);
        spawn_mud_cluster(
            &mut commands,
            &mut rng,
            &tuning,
            splash.position,
            Some(tuning.splash_lifetime),
        );
    }
}

pub(crate) fn mud_contact(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    tuning: Res<HazardTuning>,
    mud_query: Query<(), With<MudBlob>>,
    mut player_query: Query<&mut PlayerController, With<Player>>,
    enemy_query: Query<(), With<Enemy>>,
) {
    for event in collision_events.read() {
        for (mud, other) in [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ] {
            if mud_query.get(mud).is_err() {
                continue;
            }

            if let Ok(mut controller) = player_query.get_mut(other) {
                controller.slow(tuning.slow_duration);
            } else if enemy_query.get(other).is_ok() {
                commands.entity(other).insert(Slowed {
                    timer: tuning.slow_duration,
                    multiplier: tuning.enemy_slow_multiplier,
                });
            }
        }
    }
}

pub(crate) fn tick_slowed(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Slowed)>,
) {
    let dt = time.delta_secs();
    for (entity, mut slowed) in &mut query {
        slowed.timer = (slowed.timer - dt).max(0.0);
        if slowed.timer <= 0.0 {
            commands.entity(entity).remove::<Slowed>();
        }
    }
}

pub(crate) fn expire_mud(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut MudLifetime)>,
) {
    let dt = time.delta_secs();
    for (entity, mut lifetime) in &mut query {
        lifetime.0 -= dt;
        if lifetime.0 <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}
