//! Reads the four JSON data files from a directory.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::error::{ArvoreError, Result};
use crate::store::EntityStore;

pub const PLACES_FILE: &str = "places.json";
pub const PERSONS_FILE: &str = "persons.json";
pub const MARRIAGES_FILE: &str = "marriages.json";
pub const RELATIONSHIPS_FILE: &str = "relationships.json";

fn read_json(dir: &Path, file: &str) -> Result<Value> {
    let path = dir.join(file);
    let text = fs::read_to_string(&path).map_err(|e| ArvoreError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&text).map_err(|e| ArvoreError::data_format(file, e.to_string()))
}

/// Loads `places.json`, `persons.json`, `marriages.json` and
/// `relationships.json` from `dir` into a fresh store.
pub fn load_dir(dir: &Path) -> Result<EntityStore> {
    let places = read_json(dir, PLACES_FILE)?;
    let persons = read_json(dir, PERSONS_FILE)?;
    let marriages = read_json(dir, MARRIAGES_FILE)?;
    let relationships = read_json(dir, RELATIONSHIPS_FILE)?;
    info!(dir = %dir.display(), "data files read");
    EntityStore::from_json_values(places, persons, marriages, relationships)
}
