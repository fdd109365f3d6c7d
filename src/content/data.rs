//! Content domain: serialized shapes of the data files.

use serde::{Deserialize, Serialize};

use crate::potions::{Combination, Element, ElementBook, ElementPair, PotionEffect};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ElementDef {
    pub element: Element,
    pub name: String,
    #[serde(default)]
    pub owned: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CombinationDef {
    pub first: Element,
    pub second: Element,
    pub name: String,
    #[serde(default)]
    pub effect: PotionEffect,
}

/// Contents of `elements.ron`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ElementsFile {
    pub elements: Vec<ElementDef>,
    pub combinations: Vec<CombinationDef>,
}

impl ElementsFile {
    /// Build an element book. Elements missing from the file keep their
    /// default name and start unowned.
    pub fn into_book(self) -> ElementBook {
        let mut book = ElementBook::default();
        book.owned.clear();
        book.combinations.clear();

        for def in self.elements {
            book.set_owned(def.element, def.owned);
            book.names.insert(def.element, def.name);
        }

        for def in self.combinations {
            book.combinations.insert(
                ElementPair(def.first, def.second),
                Combination {
                    name: def.name,
                    effect: def.effect,
                },
            );
        }

        book
    }
}
