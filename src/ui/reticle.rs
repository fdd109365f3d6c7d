//! UI domain: aiming reticle.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::GameState;
use crate::player::{PlayerEffect, PlayerEffectEvent};

#[derive(Component)]
pub struct Reticle;

pub(crate) fn spawn_reticle(mut commands: Commands) {
    commands.spawn((
        Reticle,
        Sprite {
            color: Color::srgba(1.0, 1.0, 1.0, 0.8),
            custom_size: Some(Vec2::splat(10.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 5.0),
        Visibility::Hidden,
        DespawnOnExit(GameState::Run),
    ));
}

pub(crate) fn update_reticle(
    mut effects: MessageReader<PlayerEffectEvent>,
    mut reticle_query: Query<(&mut Transform, &mut Visibility), With<Reticle>>,
) {
    let Ok((mut transform, mut visibility)) = reticle_query.single_mut() else {
        return;
    };

    for PlayerEffectEvent(effect) in effects.read() {
        match effect {
            PlayerEffect::ShowReticle(shown) => {
                *visibility = if *shown {
                    Visibility::Visible
                } else {
                    Visibility::Hidden
                };
            }
            PlayerEffect::MoveReticle(position) => {
                transform.translation.x = position.x;
                transform.translation.y = position.y;
            }
            _ => {}
        }
    }
}
