//! Debug overlay for fast iteration: controller timers and run info.
//!
//! F1 or backquote toggles the overlay.

use bevy::prelude::*;

use crate::core::{GameState, GameplayPaused, RunConfig, TimeScale};
use crate::player::{Grounded, Player, PlayerController};

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the info overlay is shown
    pub show_info: bool,
}

/// Marker for debug info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (toggle_debug_overlay, update_debug_info_overlay)
                .chain()
                .run_if(in_state(GameState::Run)),
        );
    }
}

fn toggle_debug_overlay(keyboard: Res<ButtonInput<KeyCode>>, mut debug_state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote) {
        debug_state.show_info = !debug_state.show_info;
        info!("Debug overlay: {}", debug_state.show_info);
    }
}

/// Text shown in the overlay for one controller.
pub fn debug_info_text(controller: &PlayerController, grounded: bool, position: Vec2) -> String {
    let movement = &controller.movement;
    format!(
        "Pos: ({:.0}, {:.0}) grounded: {}\nHP: {} iframes: {:.2}\nDash: {} auto: {} cooldown: {:.2}\nSince jump: {:.2} slow: {:.2}\nSlots: {:?} active: {} menu: {}",
        position.x,
        position.y,
        grounded,
        controller.health,
        controller.invincibility.timer,
        movement.dashing,
        movement.autodashing,
        movement.dash_cooldown,
        movement.time_since_jump,
        controller.slow_timer,
        controller.elements.slots,
        controller.elements.active,
        controller.elements.menu_open,
    )
}

fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    run_config: Res<RunConfig>,
    paused: Res<GameplayPaused>,
    scale: Res<TimeScale>,
    player_query: Query<(&Transform, &PlayerController, &Grounded), With<Player>>,
    mut overlay_query: Query<(Entity, &mut Text), With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for (entity, _) in &overlay_query {
            commands.entity(entity).despawn();
        }
        return;
    }

    let Ok((_, mut text)) = overlay_query.single_mut() else {
        spawn_debug_info_overlay(&mut commands);
        return;
    };

    let Ok((transform, controller, grounded)) = player_query.single() else {
        **text = format!("Seed: {}\nNo player", run_config.seed);
        return;
    };

    **text = format!(
        "{}\nSeed: {} paused: {} scale: {:.2}",
        debug_info_text(controller, grounded.0, transform.translation.truncate()),
        run_config.seed,
        paused.is_paused(),
        scale.0
    );
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(10.0),
            bottom: Val::Px(10.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(200),
        DespawnOnExit(GameState::Run),
    ));
}
