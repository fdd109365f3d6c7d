//! UI domain: death banner and the way back to the title.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::PlayerDiedEvent;
use crate::core::{GameState, GameplayPaused, PAUSE_SOURCE_DEATH};

/// Marker for the death banner overlay
#[derive(Component)]
pub struct DeathScreenUI;

/// Resource to track if player has died (prevents multiple death screens)
#[derive(Resource, Default)]
pub struct PlayerDeathState {
    pub is_dead: bool,
}

pub(crate) fn detect_player_death(
    mut commands: Commands,
    mut died_events: MessageReader<PlayerDiedEvent>,
    mut death_state: ResMut<PlayerDeathState>,
    mut paused: ResMut<GameplayPaused>,
) {
    let died = died_events.read().count() > 0;

    if !died || death_state.is_dead {
        return;
    }

    death_state.is_dead = true;
    paused.pause(PAUSE_SOURCE_DEATH);
    info!("Player died");
    spawn_death_screen(&mut commands);
}

fn spawn_death_screen(commands: &mut Commands) {
    commands
        .spawn((
            DeathScreenUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.75)),
            ZIndex(100),
            DespawnOnExit(GameState::Run),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("THE BREW BOILED OVER"),
                TextFont {
                    font_size: 56.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.15, 0.15)),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Press [R] to return to the title"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
            ));
        });
}

pub(crate) fn handle_return_to_title(
    keyboard: Res<ButtonInput<KeyCode>>,
    death_state: Res<PlayerDeathState>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if death_state.is_dead && keyboard.just_pressed(KeyCode::KeyR) {
        next_state.set(GameState::Title);
    }
}

pub(crate) fn reset_death_state(mut death_state: ResMut<PlayerDeathState>) {
    death_state.is_dead = false;
}
