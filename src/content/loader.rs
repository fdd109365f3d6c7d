//! Loader for RON content files at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::ElementsFile;
use super::validation::validate_elements;

pub const ELEMENTS_FILE: &str = "assets/data/elements.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a single RON struct from text. `file_name` is only used in errors.
pub fn parse_single<T>(contents: &str, file_name: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_single(&contents, &file_name)
}

/// Load and validate the element file. Validation problems are reported as
/// one error listing each failure.
pub fn load_elements(path: &Path) -> Result<ElementsFile, ContentLoadError> {
    let file = load_single_file::<ElementsFile>(path)?;

    let problems = validate_elements(&file);
    if !problems.is_empty() {
        let message = problems
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(ContentLoadError {
            file: path.display().to_string(),
            message,
        });
    }

    Ok(file)
}

/// Startup system: replace the built-in element book with the data file.
pub(crate) fn load_element_book(mut commands: Commands) {
    match load_elements(Path::new(ELEMENTS_FILE)) {
        Ok(file) => {
            info!(
                "Loaded {} elements and {} combinations",
                file.elements.len(),
                file.combinations.len()
            );
            commands.insert_resource(file.into_book());
        }
        Err(e) => {
            warn!("{}; using built-in element book", e);
        }
    }
}
