//! Combat domain: damage routing messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Request to damage whatever damageable `target` carries
#[derive(Debug)]
pub struct DamageEvent {
    pub target: Entity,
    pub amount: i32,
}

impl Message for DamageEvent {}

#[derive(Debug)]
pub struct EnemyDiedEvent {
    pub entity: Entity,
}

impl Message for EnemyDiedEvent {}

#[derive(Debug)]
pub struct PlayerDiedEvent {
    pub entity: Entity,
}

impl Message for PlayerDiedEvent {}
