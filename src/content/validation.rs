//! Validation for the element data file.

use std::collections::HashSet;

use super::data::ElementsFile;
use crate::potions::PotionEffect;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}': {}", self.source_type, self.source_id, self.message)
    }
}

/// Returns a list of validation errors, empty if the file is consistent.
pub fn validate_elements(file: &ElementsFile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut seen_elements = HashSet::new();
    for def in &file.elements {
        if !seen_elements.insert(def.element) {
            errors.push(ValidationError {
                source_type: "Element",
                source_id: format!("{:?}", def.element),
                message: "defined more than once".to_string(),
            });
        }
    }

    let mut seen_pairs = HashSet::new();
    for def in &file.combinations {
        let id = format!("{:?}+{:?}", def.first, def.second);
        if !seen_pairs.insert((def.first, def.second)) {
            errors.push(ValidationError {
                source_type: "Combination",
                source_id: id.clone(),
                message: "pair defined more than once".to_string(),
            });
        }
        if let PotionEffect::Burst { damage, radius } = def.effect
            && (damage <= 0 || radius <= 0.0)
        {
            errors.push(ValidationError {
                source_type: "Combination",
                source_id: id,
                message: format!("burst needs positive damage and radius, got {damage}/{radius}"),
            });
        }
    }

    errors
}
