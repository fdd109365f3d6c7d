mod combat;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod enemies;
mod hazards;
mod level;
mod player;
mod potions;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;

/// Pixels per world unit
const PIXELS_PER_UNIT: f32 = 64.0;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Homebrew".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default().with_length_unit(PIXELS_PER_UNIT))
    .insert_resource(Gravity(Vec2::NEG_Y * 9.81 * PIXELS_PER_UNIT))
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        level::LevelPlugin,
        player::PlayerPlugin,
        potions::PotionsPlugin,
        combat::CombatPlugin,
        enemies::EnemiesPlugin,
        hazards::HazardsPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
