//! Project settings for the typetable tools
//!
//! A small TOML file names the project's installed apps and the main app
//! (which holds settings, never models). `defaults/typetable.default.toml`
//! is embedded into the binary so a missing key always has a value;
//! callers layer their project file on top via [`Loader`] before
//! deserializing into [`Settings`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/typetable.default.toml");

/// Settings consumed by the scanner and the CLI.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Installed apps, scanned in listed order.
    pub apps: Vec<String>,
    /// The main app; skipped when scanning for models.
    pub main_app: Option<String>,
}

/// Helper for layering a project settings file over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a settings file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Finish loading and deserialize the merged settings.
    pub fn load(self) -> Result<Settings, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
