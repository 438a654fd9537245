//! EventHub configuration.
//!
//! Settings are layered, later sources winning:
//! built-in defaults, `~/.config/eventhub/config.toml`, `./eventhub.toml`,
//! then `EVENTHUB_*` environment variables.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::catalog::{Catalog, CatalogOptions};
use crate::constants::DEFAULT_CURRENCY;
use crate::error::{EventHubError, EventHubResult};

pub const DEFAULT_BIND: &str = "127.0.0.1:4096";
pub const LOCAL_CONFIG_FILE: &str = "eventhub.toml";

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Address the server listens on
    #[serde(default = "default_bind")]
    pub bind: String,

    /// JSON or TOML catalog; the bundled catalog is used when unset
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Glyph placed before prices
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Reject records whose price disagrees with `isPaid`
    #[serde(default)]
    pub strict_pricing: bool,

    /// Default tracing filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            bind: default_bind(),
            catalog_path: None,
            currency: default_currency(),
            strict_pricing: false,
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// ~/.config/eventhub/config.toml
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("eventhub").join("config.toml"))
    }

    pub fn load() -> EventHubResult<Self> {
        Self::load_from(Self::user_config_path().as_deref(), Path::new(LOCAL_CONFIG_FILE))
    }

    /// Load from explicit file locations. Missing files are skipped.
    pub fn load_from(user_config: Option<&Path>, local_config: &Path) -> EventHubResult<Self> {
        let mut builder = Config::builder();

        if let Some(path) = user_config {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder
            .add_source(File::from(local_config).required(false))
            .add_source(Environment::with_prefix("EVENTHUB").try_parsing(true))
            .build()
            .map_err(|e| EventHubError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventHubError::Config(e.to_string()))
    }

    /// `catalog_path` with a leading `~` expanded.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog_path.as_ref().map(|path| {
            PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
        })
    }

    pub fn catalog_options(&self) -> CatalogOptions {
        CatalogOptions {
            strict_pricing: self.strict_pricing,
        }
    }

    pub fn load_catalog(&self) -> EventHubResult<Catalog> {
        Catalog::load_or_bundled(self.catalog_path().as_deref(), self.catalog_options())
    }
}
