//! UI domain: signpost help text.

use bevy::prelude::*;

use crate::level::{Signpost, SignpostHelp};
use crate::player::{Player, PlayerTuning};

/// Overlap test for two axis-aligned boxes given as center and half-extents.
/// Touching edges do not count.
pub fn aabb_intersects(a_center: Vec2, a_half: Vec2, b_center: Vec2, b_half: Vec2) -> bool {
    let delta = (a_center - b_center).abs();
    delta.x < a_half.x + b_half.x && delta.y < a_half.y + b_half.y
}

pub(crate) fn update_signposts(
    tuning: Res<PlayerTuning>,
    player_query: Query<&Transform, With<Player>>,
    signpost_query: Query<(&Transform, &Signpost, &Children), Without<Player>>,
    mut help_query: Query<&mut Visibility, With<SignpostHelp>>,
) {
    let Ok(player_transform) = player_query.single() else {
        return;
    };
    let player_center = player_transform.translation.truncate();
    let player_half = tuning.body_size * 0.5;

    for (transform, signpost, children) in &signpost_query {
        let touching = aabb_intersects(
            player_center,
            player_half,
            transform.translation.truncate(),
            signpost.half_extents,
        );

        for child in children.iter() {
            if let Ok(mut visibility) = help_query.get_mut(child) {
                let wanted = if touching {
                    Visibility::Inherited
                } else {
                    Visibility::Hidden
                };
                if *visibility != wanted {
                    *visibility = wanted;
                }
            }
        }
    }
}
