//! UI domain: title screen, HUD, radial menu, reticle, signposts, and death flow.

mod credits;
mod death;
mod hud_elements;
mod radial_menu;
mod reticle;
mod signpost;

pub use credits::{
    CREDITS_FADE_RATE, CREDITS_MAX_ALPHA, CreditsState, close_hint_shown, credits_panel_shown,
    step_credits_alpha,
};
pub use death::PlayerDeathState;
pub use hud_elements::{health_label_text, slot_label_text};
pub use radial_menu::quadrant_anchor;
pub use signpost::aabb_intersects;

use bevy::prelude::*;

use crate::core::GameState;
use crate::player::PlayerSystems;
use crate::ui::credits::{fade_credits, spawn_title_screen, toggle_credits};
use crate::ui::death::{detect_player_death, handle_return_to_title, reset_death_state};
use crate::ui::hud_elements::{spawn_element_hud, update_element_hud, update_health_label};
use crate::ui::radial_menu::{spawn_radial_menu, update_radial_menu};
use crate::ui::reticle::{spawn_reticle, update_reticle};
use crate::ui::signpost::update_signposts;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CreditsState>()
            .init_resource::<PlayerDeathState>()
            .add_systems(OnEnter(GameState::Title), spawn_title_screen)
            .add_systems(
                Update,
                (toggle_credits, fade_credits)
                    .chain()
                    .run_if(in_state(GameState::Title)),
            )
            .add_systems(
                OnEnter(GameState::Run),
                (spawn_element_hud, spawn_radial_menu, spawn_reticle),
            )
            .add_systems(OnExit(GameState::Run), reset_death_state)
            .add_systems(
                Update,
                (
                    update_element_hud,
                    update_health_label,
                    update_radial_menu,
                    update_reticle,
                    update_signposts,
                    detect_player_death,
                    handle_return_to_title,
                )
                    .after(PlayerSystems)
                    .run_if(in_state(GameState::Run)),
            );
    }
}
