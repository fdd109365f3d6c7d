//! Potions domain: elements, the element book, and thrown bottles.

mod book;
mod bottle;
mod elements;
mod events;

pub use book::{ElementBook, UNKNOWN_BREW_LABEL, UNOWNED_LABEL};
pub use bottle::Bottle;
pub use elements::{Combination, Element, ElementPair, PotionEffect, SLOT_COUNT};
pub use events::PotionSplashEvent;

pub(crate) use bottle::element_color;

use bevy::prelude::*;

use crate::core::GameState;
use crate::player::PlayerSystems;
use crate::potions::bottle::{expire_bottles, shatter_bottles, spawn_bottles};

pub struct PotionsPlugin;

impl Plugin for PotionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ElementBook>()
            .add_message::<PotionSplashEvent>()
            .add_systems(
                Update,
                (
                    spawn_bottles.after(PlayerSystems),
                    shatter_bottles,
                    expire_bottles,
                )
                    .run_if(in_state(GameState::Run)),
            );
    }
}
