//! Potions domain: thrown bottles and their splashes.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use std::collections::HashSet;

use crate::core::GameState;
use crate::player::{GameLayer, PlayerEffect, PlayerEffectEvent, PlayerHandle};
use crate::potions::{Element, ElementBook, ElementPair, PotionSplashEvent};

pub(crate) const BOTTLE_RADIUS: f32 = 6.0;
/// Bottles that never hit anything are cleaned up after this long
pub(crate) const BOTTLE_LIFETIME: f32 = 4.0;

/// A thrown bottle carrying the brew it was thrown with
#[derive(Component, Debug, Clone)]
pub struct Bottle {
    pub elements: ElementPair,
    pub owner: Option<Entity>,
}

#[derive(Component, Debug)]
pub struct BottleLifetime(pub f32);

pub(crate) fn element_color(element: Element) -> Color {
    match element {
        Element::None => Color::srgb(0.75, 0.75, 0.75),
        Element::Fire => Color::srgb(0.95, 0.4, 0.15),
        Element::Water => Color::srgb(0.2, 0.5, 0.95),
        Element::Earth => Color::srgb(0.55, 0.4, 0.2),
        Element::Air => Color::srgb(0.85, 0.95, 0.95),
    }
}

pub(crate) fn spawn_bottles(
    mut commands: Commands,
    mut effect_events: MessageReader<PlayerEffectEvent>,
    handle: Res<PlayerHandle>,
) {
    for PlayerEffectEvent(effect) in effect_events.read() {
        let PlayerEffect::SpawnBottle {
            position,
            velocity,
            elements,
        } = effect
        else {
            continue;
        };

        commands.spawn((
            Bottle {
                elements: *elements,
                owner: handle.get(),
            },
            BottleLifetime(BOTTLE_LIFETIME),
            Sprite {
                color: element_color(elements.0),
                custom_size: Some(Vec2::splat(BOTTLE_RADIUS * 2.0)),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 2.0),
            (
                RigidBody::Dynamic,
                Collider::circle(BOTTLE_RADIUS),
                LinearVelocity(*velocity),
                CollisionEventsEnabled,
                CollisionLayers::new(GameLayer::Bottle, [GameLayer::Ground, GameLayer::Enemy]),
            ),
            DespawnOnExit(GameState::Run),
        ));
    }
}

/// Shatter bottles on their first contact.
pub(crate) fn shatter_bottles(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    mut splash_events: MessageWriter<PotionSplashEvent>,
    book: Res<ElementBook>,
    bottle_query: Query<(&Bottle, &Transform)>,
) {
    let mut shattered = HashSet::new();

    for event in collision_events.read() {
        for (bottle_entity, other) in [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ] {
            let Ok((bottle, transform)) = bottle_query.get(bottle_entity) else {
                continue;
            };
            if Some(other) == bottle.owner || !shattered.insert(bottle_entity) {
                continue;
            }

            let effect = book.effect(bottle.elements);
            debug!(
                "Bottle {:?} shattered: {} -> {:?}",
                bottle_entity,
                book.combination_name(bottle.elements),
                effect
            );

            splash_events.write(PotionSplashEvent {
                position: transform.translation.truncate(),
                elements: bottle.elements,
                effect,
                owner: bottle.owner,
            });
            commands.entity(bottle_entity).despawn();
        }
    }
}

pub(crate) fn expire_bottles(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut BottleLifetime)>,
) {
    let dt = time.delta_secs();
    for (entity, mut lifetime) in &mut query {
        lifetime.0 -= dt;
        if lifetime.0 <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}
