//! Level domain: layout data.

use bevy::prelude::*;

#[derive(Debug, Clone)]
pub struct Platform {
    pub center: Vec2,
    pub size: Vec2,
}

#[derive(Debug, Clone)]
pub struct SignpostSpec {
    pub position: Vec2,
    pub half_extents: Vec2,
    pub text: String,
}

/// Trigger area that shows its help child while the player overlaps it
#[derive(Component, Debug, Clone, Copy)]
pub struct Signpost {
    pub half_extents: Vec2,
}

#[derive(Component, Debug)]
pub struct SignpostHelp;

#[derive(Resource, Debug, Clone)]
pub struct LevelLayout {
    /// Exactly one entry in a valid level
    pub player_spawns: Vec<Vec2>,
    pub enemy_spawns: Vec<Vec2>,
    pub platforms: Vec<Platform>,
    pub signposts: Vec<SignpostSpec>,
    pub mud_patches: Vec<Vec2>,
}

impl Default for LevelLayout {
    fn default() -> Self {
        let signpost = |x: f32, text: &str| SignpostSpec {
            position: Vec2::new(x, -146.0),
            half_extents: Vec2::new(48.0, 48.0),
            text: text.to_string(),
        };

        Self {
            player_spawns: vec![Vec2::new(-640.0, -120.0)],
            enemy_spawns: vec![Vec2::new(320.0, -160.0), Vec2::new(720.0, -160.0)],
            platforms: vec![
                Platform {
                    center: Vec2::new(0.0, -220.0),
                    size: Vec2::new(2000.0, 40.0),
                },
                Platform {
                    center: Vec2::new(-200.0, -60.0),
                    size: Vec2::new(200.0, 24.0),
                },
                Platform {
                    center: Vec2::new(140.0, 40.0),
                    size: Vec2::new(160.0, 24.0),
                },
                Platform {
                    center: Vec2::new(-1010.0, 100.0),
                    size: Vec2::new(20.0, 600.0),
                },
                Platform {
                    center: Vec2::new(1010.0, 100.0),
                    size: Vec2::new(20.0, 600.0),
                },
            ],
            signposts: vec![
                signpost(-640.0, "A / D to move, hold Shift to dash"),
                signpost(-440.0, "Space to jump, hold it to jump higher"),
                signpost(-40.0, "Hold left mouse to aim, release to throw"),
                signpost(160.0, "Q cycles slots, E opens the element wheel"),
            ],
            mud_patches: vec![Vec2::new(520.0, -184.0)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_has_one_player_spawn() {
        assert_eq!(LevelLayout::default().player_spawns.len(), 1);
    }
}
