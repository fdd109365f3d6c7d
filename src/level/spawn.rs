//! Level domain: ground and signpost spawning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::GameState;
use crate::level::{LevelLayout, Signpost, SignpostHelp};
use crate::player::GameLayer;

pub(crate) fn spawn_level(mut commands: Commands, layout: Res<LevelLayout>) {
    let ground_color = Color::srgb(0.35, 0.4, 0.35);
    let signpost_color = Color::srgb(0.55, 0.4, 0.25);

    let ground_layers = CollisionLayers::new(
        GameLayer::Ground,
        [GameLayer::Player, GameLayer::Enemy, GameLayer::Bottle],
    );

    for platform in &layout.platforms {
        commands.spawn((
            Sprite {
                color: ground_color,
                custom_size: Some(platform.size),
                ..default()
            },
            Transform::from_xyz(platform.center.x, platform.center.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(platform.size.x, platform.size.y),
            ground_layers,
            DespawnOnExit(GameState::Run),
        ));
    }

    for signpost in &layout.signposts {
        commands
            .spawn((
                Signpost {
                    half_extents: signpost.half_extents,
                },
                Sprite {
                    color: signpost_color,
                    custom_size: Some(Vec2::new(8.0, 40.0)),
                    ..default()
                },
                Transform::from_xyz(signpost.position.x, signpost.position.y, 0.2),
                Visibility::default(),
                DespawnOnExit(GameState::Run),
            ))
            .with_children(|parent| {
                parent.spawn((
                    SignpostHelp,
                    Text2d::new(signpost.text.clone()),
                    TextFont {
                        font_size: 16.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    Transform::from_xyz(0.0, 72.0, 2.0),
                    Visibility::Hidden,
                ));
            });
    }

    info!(
        "Spawned level: {} platforms, {} signposts",
        layout.platforms.len(),
        layout.signposts.len()
    );
}
