//! Combat domain: damage routing, contact damage, and splash damage.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::events::{DamageEvent, EnemyDiedEvent, PlayerDiedEvent};
use crate::combat::{DamageOutcome, Damageable, Vitals};
use crate::enemies::Enemy;
use crate::player::{Player, PlayerController, PlayerEffectEvent};
use crate::potions::{PotionEffect, PotionSplashEvent};

/// Apply damage to whichever damageable the target carries.
pub(crate) fn route_damage(
    mut damage_events: MessageReader<DamageEvent>,
    mut effect_events: MessageWriter<PlayerEffectEvent>,
    mut died_events: MessageWriter<EnemyDiedEvent>,
    mut player_died_events: MessageWriter<PlayerDiedEvent>,
    mut player_query: Query<&mut PlayerController, With<Player>>,
    mut vitals_query: Query<&mut Vitals>,
) {
    for event in damage_events.read() {
        if let Ok(mut controller) = player_query.get_mut(event.target) {
            let outcome = controller.damage(event.amount);
            if outcome != DamageOutcome::Ignored {
                info!("Player damaged: {:?}", outcome);
            }
            if outcome == DamageOutcome::Died {
                player_died_events.write(PlayerDiedEvent {
                    entity: event.target,
                });
            }
            for effect in controller.damage_effects(outcome) {
                effect_events.write(PlayerEffectEvent(effect));
            }
            continue;
        }

        if let Ok(mut vitals) = vitals_query.get_mut(event.target) {
            match vitals.damage(event.amount) {
                DamageOutcome::Ignored => {}
                DamageOutcome::Hurt { remaining } => {
                    debug!("{:?} hurt, {} health left", event.target, remaining);
                }
                DamageOutcome::Died => {
                    died_events.write(EnemyDiedEvent {
                        entity: event.target,
                    });
                }
            }
        }
    }
}

/// Enemies hurt the player on touch.
pub(crate) fn enemy_contact_damage(
    mut collision_events: MessageReader<CollisionStart>,
    mut damage_events: MessageWriter<DamageEvent>,
    enemy_query: Query<&Enemy>,
    player_query: Query<(), With<Player>>,
) {
    for event in collision_events.read() {
        for (enemy_entity, other) in [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ] {
            let Ok(enemy) = enemy_query.get(enemy_entity) else {
                continue;
            };
            if player_query.get(other).is_ok() {
                damage_events.write(DamageEvent {
                    target: other,
                    amount: enemy.contact_damage,
                });
            }
        }
    }
}

/// Burst splashes damage every enemy inside the radius. Only enemies are
/// candidates, so the throwing player is never hit by their own bottle.
pub(crate) fn splash_damage(
    mut splash_events: MessageReader<PotionSplashEvent>,
    mut damage_events: MessageWriter<DamageEvent>,
    enemy_query: Query<(Entity, &Transform), (With<Enemy>, With<Vitals>)>,
) {
    for splash in splash_events.read() {
        let PotionEffect::Burst { damage, radius } = splash.effect else {
            continue;
        };

        let enemies = enemy_query
            .iter()
            .map(|(entity, transform)| (entity, transform.translation.truncate()));
        for target in burst_targets(splash.position, radius, enemies) {
            damage_events.write(DamageEvent {
                target,
                amount: damage,
            });
        }
    }
}

/// Everything from `candidates` inside the burst radius.
pub(crate) fn burst_targets(
    center: Vec2,
    radius: f32,
    candidates: impl IntoIterator<Item = (Entity, Vec2)>,
) -> Vec<Entity> {
    candidates
        .into_iter()
        .filter(|(_, position)| within_radius(center, *position, radius))
        .map(|(entity, _)| entity)
        .collect()
}

pub(crate) fn within_radius(center: Vec2, point: Vec2, radius: f32) -> bool {
    center.distance_squared(point) <= radius * radius
}

/// Blink damaged enemies while their invincibility runs.
pub(crate) fn tick_vitals(time: Res<Time>, mut query: Query<(&mut Vitals, &mut Visibility)>) {
    let dt = time.delta_secs();
    for (mut vitals, mut visibility) in &mut query {
        if let Some(visible) = vitals.invincibility.tick(dt) {
            *visibility = if visible {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            };
        }
    }
}

pub(crate) fn despawn_dead_enemies(
    mut commands: Commands,
    mut died_events: MessageReader<EnemyDiedEvent>,
) {
    for event in died_events.read() {
        info!("Enemy {:?} defeated", event.entity);
        commands.entity(event.entity).despawn();
    }
}
