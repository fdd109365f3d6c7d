//! Player domain: grounded detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::{GameLayer, Grounded, Player, PlayerTuning};

/// Point overlap just below the feet against the ground layer.
pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<PlayerTuning>,
    mut query: Query<(&Transform, &mut Grounded), With<Player>>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, mut grounded) in &mut query {
        let was_grounded = grounded.0;
        let probe =
            transform.translation.truncate() - Vec2::new(0.0, tuning.ground_probe_offset);

        grounded.0 = !spatial_query
            .point_intersections(probe, &ground_filter)
            .is_empty();

        if grounded.0 != was_grounded {
            debug!("Grounded: {}", grounded.0);
        }
    }
}
