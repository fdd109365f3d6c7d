//! UI domain: the radial element selection overlay.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::GameState;
use crate::player::{PlayerEffect, PlayerEffectEvent};

const PANEL_COLOR: Color = Color::srgba(0.15, 0.15, 0.2, 0.75);
const HIGHLIGHT_COLOR: Color = Color::srgba(0.45, 0.35, 0.15, 0.9);

#[derive(Component)]
pub struct RadialMenuUI;

#[derive(Component)]
pub struct RadialQuadrant(pub usize);

#[derive(Component)]
pub struct QuadrantLabel(pub usize);

/// Top-left corner of a quadrant panel, in percent of the overlay.
/// 0 is top-right, then clockwise.
pub fn quadrant_anchor(quadrant: usize) -> (f32, f32) {
    match quadrant {
        0 => (50.0, 0.0),
        1 => (50.0, 50.0),
        2 => (0.0, 50.0),
        _ => (0.0, 0.0),
    }
}

pub(crate) fn spawn_radial_menu(mut commands: Commands) {
    commands
        .spawn((
            RadialMenuUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Percent(25.0),
                top: Val::Percent(20.0),
                width: Val::Percent(50.0),
                height: Val::Percent(60.0),
                ..default()
            },
            Visibility::Hidden,
            ZIndex(50),
            DespawnOnExit(GameState::Run),
        ))
        .with_children(|parent| {
            for quadrant in 0..4 {
                let (left, top) = quadrant_anchor(quadrant);
                parent
                    .spawn((
                        RadialQuadrant(quadrant),
                        Node {
                            position_type: PositionType::Absolute,
                            left: Val::Percent(left),
                            top: Val::Percent(top),
                            width: Val::Percent(50.0),
                            height: Val::Percent(50.0),
                            border: UiRect::all(Val::Px(2.0)),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            ..default()
                        },
                        BackgroundColor(PANEL_COLOR),
                        BorderColor::all(Color::srgb(0.5, 0.5, 0.6)),
                    ))
                    .with_child((
                        QuadrantLabel(quadrant),
                        Text::new(""),
                        TextFont {
                            font_size: 24.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.95, 0.95, 0.95)),
                    ));
            }
        });
}

pub(crate) fn update_radial_menu(
    mut effects: MessageReader<PlayerEffectEvent>,
    mut root_query: Query<&mut Visibility, With<RadialMenuUI>>,
    mut panel_query: Query<(&RadialQuadrant, &mut BackgroundColor)>,
    mut label_query: Query<(&QuadrantLabel, &mut Text)>,
) {
    for PlayerEffectEvent(effect) in effects.read() {
        match effect {
            PlayerEffect::OpenMenu { labels } => {
                for mut visibility in &mut root_query {
                    *visibility = Visibility::Visible;
                }
                for (label, mut text) in &mut label_query {
                    **text = labels[label.0].clone();
                }
                for (_, mut color) in &mut panel_query {
                    color.0 = PANEL_COLOR;
                }
            }
            PlayerEffect::HighlightQuadrant(highlighted) => {
                for (quadrant, mut color) in &mut panel_query {
                    color.0 = if *highlighted == Some(quadrant.0) {
                        HIGHLIGHT_COLOR
                    } else {
                        PANEL_COLOR
                    };
                }
            }
            PlayerEffect::CloseMenu => {
                for mut visibility in &mut root_query {
                    *visibility = Visibility::Hidden;
                }
            }
            _ => {}
        }
    }
}
