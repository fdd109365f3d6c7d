//! Enemies domain: follow behavior.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::enemies::{Enemy, EnemyFollow, EnemyTuning};
use crate::hazards::Slowed;
use crate::player::{Player, PlayerHandle};

/// One frame of following.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowStep {
    pub x: f32,
    pub turn: bool,
}

/// Move `enemy` toward the target's x by at most `max_step`, keeping its own y.
/// Returns `None` when the target is out of range.
pub fn follow_step(
    enemy: Vec2,
    facing_right: bool,
    target: Vec2,
    max_step: f32,
    follow_distance: f32,
) -> Option<FollowStep> {
    if enemy.distance(target) > follow_distance {
        return None;
    }

    let turn = (target.x < enemy.x && facing_right) ^ (target.x > enemy.x && !facing_right);
    let delta = target.x - enemy.x;
    let x = if delta.abs() <= max_step {
        target.x
    } else {
        enemy.x + delta.signum() * max_step
    };

    Some(FollowStep { x, turn })
}

pub(crate) fn follow_player(
    time: Res<Time>,
    tuning: Res<EnemyTuning>,
    handle: Res<PlayerHandle>,
    player_query: Query<&Transform, With<Player>>,
    mut enemy_query: Query<
        (
            &mut Transform,
            &mut EnemyFollow,
            &mut LinearVelocity,
            Option<&Slowed>,
        ),
        (With<Enemy>, Without<Player>),
    >,
) {
    let Some(player) = handle.get() else {
        return;
    };
    let Ok(player_transform) = player_query.get(player) else {
        return;
    };
    let target = player_transform.translation.truncate();
    let dt = time.delta_secs();

    for (mut transform, mut follow, mut velocity, slowed) in &mut enemy_query {
        let speed = follow.speed * slowed.map_or(1.0, |s| s.multiplier);
        let Some(step) = follow_step(
            transform.translation.truncate(),
            follow.facing_right,
            target,
            speed * dt,
            tuning.follow_distance,
        ) else {
            continue;
        };

        if step.turn {
            follow.facing_right = !follow.facing_right;
            transform.scale.x = -transform.scale.x;
        }
        transform.translation.x = step.x;
        velocity.x = 0.0;
    }
}
