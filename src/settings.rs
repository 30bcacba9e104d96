//! Runtime settings: defaults, then `arvore.toml`, then `ARVORE_*` variables.

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;
use crate::viewport::ViewportClass;

pub const DEFAULT_CONFIG_FILE: &str = "arvore";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Directory holding the four JSON data files.
    pub data_dir: String,
    /// Address the HTTP server listens on.
    pub bind: String,
    /// Viewport used when a tree request carries no window size.
    pub default_viewport: ViewportClass,
}

impl Settings {
    /// Reads settings, taking the config file name from `ARVORE_CONFIG`
    /// when set. A missing file is fine; a malformed one is not.
    pub fn load() -> Result<Self> {
        let file = std::env::var("ARVORE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::from_file(&file)
    }

    pub fn from_file(file: &str) -> Result<Self> {
        let settings = Config::builder()
            .set_default("data_dir", "data")?
            .set_default("bind", "127.0.0.1:3000")?
            .set_default("default_viewport", "desktop")?
            .add_source(File::with_name(file).required(false))
            .add_source(Environment::with_prefix("ARVORE"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
