//! UI domain: title screen and its fading credits panel.

use bevy::prelude::*;

use crate::core::GameState;

pub const CREDITS_MAX_ALPHA: f32 = 0.8;
/// Alpha change per second
pub const CREDITS_FADE_RATE: f32 = 1.0;
const CLOSE_HINT_ALPHA: f32 = 0.6;
const HIDE_ALPHA: f32 = 0.1;

#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct CreditsState {
    pub visible: bool,
    pub alpha: f32,
}

#[derive(Component)]
pub struct TitleScreenUI;

#[derive(Component)]
pub struct CreditsPanel;

#[derive(Component)]
pub struct CreditsText;

#[derive(Component)]
pub struct CreditsCloseHint;

/// Move `alpha` toward its target for this frame.
pub fn step_credits_alpha(alpha: f32, visible: bool, dt: f32) -> f32 {
    let step = CREDITS_FADE_RATE * dt.max(0.0);
    if visible {
        (alpha + step).min(CREDITS_MAX_ALPHA)
    } else {
        (alpha - step).max(0.0)
    }
}

pub fn credits_panel_shown(state: &CreditsState) -> bool {
    state.visible || state.alpha >= HIDE_ALPHA
}

pub fn close_hint_shown(state: &CreditsState) -> bool {
    state.alpha > CLOSE_HINT_ALPHA
}

pub(crate) fn spawn_title_screen(mut commands: Commands, mut credits: ResMut<CreditsState>) {
    *credits = CreditsState::default();

    commands
        .spawn((
            TitleScreenUI,
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
            BackgroundColor(Color::srgb(0.08, 0.07, 0.1)),
            DespawnOnExit(GameState::Title),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("HOMEBREW"),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.7, 0.95)),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Press [Enter] to start    [C] credits"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
            ));

            parent
                .spawn((
                    CreditsPanel,
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Percent(20.0),
                        right: Val::Percent(20.0),
                        top: Val::Percent(20.0),
                        bottom: Val::Percent(20.0),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(12.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.0)),
                    Visibility::Hidden,
                    ZIndex(10),
                ))
                .with_children(|panel| {
                    for line in ["Design & code: the Homebrew team", "Made with Bevy and Avian"] {
                        panel.spawn((
                            CreditsText,
                            Text::new(line),
                            TextFont {
                                font_size: 22.0,
                                ..default()
                            },
                            TextColor(Color::srgba(0.9, 0.9, 0.9, 0.0)),
                        ));
                    }

                    panel.spawn((
                        CreditsCloseHint,
                        Text::new("[C] close"),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.5, 0.5, 0.55)),
                        Visibility::Hidden,
                    ));
                });
        });
}

pub(crate) fn toggle_credits(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut credits: ResMut<CreditsState>,
) {
    if keyboard.just_pressed(KeyCode::KeyC) {
        credits.visible = !credits.visible;
    } else if keyboard.just_pressed(KeyCode::Escape) {
        credits.visible = false;
    }
}

pub(crate) fn fade_credits(
    time: Res<Time>,
    mut credits: ResMut<CreditsState>,
    mut panel_query: Query<(&mut BackgroundColor, &mut Visibility), With<CreditsPanel>>,
    mut text_query: Query<&mut TextColor, With<CreditsText>>,
    mut hint_query: Query<&mut Visibility, (With<CreditsCloseHint>, Without<CreditsPanel>)>,
) {
    credits.alpha = step_credits_alpha(credits.alpha, credits.visible, time.delta_secs());
    let alpha = credits.alpha;

    for (mut background, mut visibility) in &mut panel_query {
        background.0 = Color::srgba(0.0, 0.0, 0.0, alpha);
        *visibility = if credits_panel_shown(&credits) {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }

    for mut color in &mut text_query {
        color.0 = Color::srgba(0.9, 0.9, 0.9, alpha / CREDITS_MAX_ALPHA);
    }

    for mut visibility in &mut hint_query {
        *visibility = if close_hint_shown(&credits) {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}
