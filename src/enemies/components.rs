//! Enemies domain: components and tuning.

use bevy::prelude::*;

#[derive(Component, Debug, Clone)]
pub struct Enemy {
    pub contact_damage: i32,
}

/// Walks toward the player along its own floor line once the player is close.
#[derive(Component, Debug, Clone)]
pub struct EnemyFollow {
    pub speed: f32,
    pub facing_right: bool,
}

#[derive(Resource, Debug, Clone)]
pub struct EnemyTuning {
    pub follow_distance: f32,
    pub speed: f32,
    pub health: i32,
    pub contact_damage: i32,
    pub invincibility_duration: f32,
    pub blink_period: f32,
    pub size: Vec2,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            follow_distance: 320.0,
            speed: 64.0,
            health: 3,
            contact_damage: 1,
            invincibility_duration: 0.3,
            blink_period: 0.05,
            size: Vec2::new(32.0, 32.0),
        }
    }
}
