//! Content domain: RON-backed element data.

mod data;
mod loader;
mod validation;

pub use data::{CombinationDef, ElementDef, ElementsFile};
pub use loader::{ContentLoadError, ELEMENTS_FILE, load_elements, parse_single};
pub use validation::{ValidationError, validate_elements};

use bevy::prelude::*;

use crate::content::loader::load_element_book;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_element_book);
    }
}
