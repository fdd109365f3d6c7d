//! Potions domain: element identities and the ordered pair carried by a bottle.

use serde::{Deserialize, Serialize};

/// Number of element slots the player brews with.
pub const SLOT_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum Element {
    #[default]
    None,
    Fire,
    Water,
    Earth,
    Air,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::None,
        Element::Fire,
        Element::Water,
        Element::Earth,
        Element::Air,
    ];

    pub fn default_name(self) -> &'static str {
        match self {
            Element::None => "Empty",
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Earth => "Earth",
            Element::Air => "Air",
        }
    }
}

/// Ordered pair of elements. `(Fire, Water)` and `(Water, Fire)` are distinct brews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub struct ElementPair(pub Element, pub Element);

impl ElementPair {
    pub fn from_slots(slots: [Element; SLOT_COUNT]) -> Self {
        Self(slots[0], slots[1])
    }
}

/// What a bottle does when it shatters.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub enum PotionEffect {
    /// Shatters harmlessly
    #[default]
    Fizzle,
    /// Damages every enemy within `radius` of the splash point
    Burst { damage: i32, radius: f32 },
    /// Leaves a mud hazard cluster that slows whatever walks through it
    Mud,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Combination {
    pub name: String,
    pub effect: PotionEffect,
}
