//! Potions domain: the element book (names, ownership, combination table).

use bevy::prelude::*;
use std::collections::HashMap;

use crate::potions::elements::{Combination, Element, ElementPair, PotionEffect};

/// Label shown in the radial menu for an element the player does not own yet.
pub const UNOWNED_LABEL: &str = "???";
/// Label shown when a pair has no entry in the combination table.
pub const UNKNOWN_BREW_LABEL: &str = "Murky Brew";

/// Display names, owned flags, and the ordered-pair combination table.
#[derive(Resource, Debug, Clone)]
pub struct ElementBook {
    pub names: HashMap<Element, String>,
    pub owned: HashMap<Element, bool>,
    pub combinations: HashMap<ElementPair, Combination>,
}

impl ElementBook {
    pub fn name(&self, element: Element) -> &str {
        self.names
            .get(&element)
            .map(String::as_str)
            .unwrap_or_else(|| element.default_name())
    }

    pub fn is_owned(&self, element: Element) -> bool {
        self.owned.get(&element).copied().unwrap_or(false)
    }

    pub fn set_owned(&mut self, element: Element, owned: bool) {
        self.owned.insert(element, owned);
    }

    /// Label for a radial menu quadrant: the name if owned, a placeholder otherwise.
    pub fn menu_label(&self, element: Element) -> String {
        if self.is_owned(element) {
            self.name(element).to_string()
        } else {
            UNOWNED_LABEL.to_string()
        }
    }

    pub fn combination(&self, pair: ElementPair) -> Option<&Combination> {
        self.combinations.get(&pair)
    }

    /// Display name for a pair, falling back to a textual default on a miss.
    pub fn combination_name(&self, pair: ElementPair) -> &str {
        self.combination(pair)
            .map(|c| c.name.as_str())
            .unwrap_or(UNKNOWN_BREW_LABEL)
    }

    pub fn effect(&self, pair: ElementPair) -> PotionEffect {
        self.combination(pair)
            .map(|c| c.effect.clone())
            .unwrap_or_default()
    }
}

impl Default for ElementBook {
    fn default() -> Self {
        let names = Element::ALL
            .iter()
            .map(|e| (*e, e.default_name().to_string()))
            .collect();

        let owned = [
            (Element::None, true),
            (Element::Fire, true),
            (Element::Water, true),
            (Element::Earth, true),
            (Element::Air, false),
        ]
        .into_iter()
        .collect();

        let burst = |name: &str, damage: i32, radius: f32| Combination {
            name: name.to_string(),
            effect: PotionEffect::Burst { damage, radius },
        };

        let combinations = [
            (
                ElementPair(Element::Fire, Element::None),
                burst("Ember Flask", 1, 48.0),
            ),
            (
                ElementPair(Element::Fire, Element::Fire),
                burst("Inferno", 2, 64.0),
            ),
            (
                ElementPair(Element::Fire, Element::Air),
                burst("Firestorm", 1, 112.0),
            ),
            (
                ElementPair(Element::Water, Element::Fire),
                burst("Scalding Steam", 1, 80.0),
            ),
            (
                ElementPair(Element::Earth, Element::Water),
                Combination {
                    name: "Mudslide".to_string(),
                    effect: PotionEffect::Mud,
                },
            ),
            (
                ElementPair(Element::Water, Element::Earth),
                Combination {
                    name: "Bog".to_string(),
                    effect: PotionEffect::Mud,
                },
            ),
        ]
        .into_iter()
        .collect();

        Self {
            names,
            owned,
            combinations,
        }
    }
}
