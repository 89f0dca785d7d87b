//! # tpf-config
//!
//! Layered configuration loading for the paradigm pipeline using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TPF_*` prefix, `__` as separator)
//! 2. Project-level `paradigms.toml` in the working directory
//! 3. User-level `~/.config/paradigms/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TPF_PATHS__LITERATURE_ROOT` -> `paths.literature_root`,
//! `TPF_THRESHOLDS__MIN_TIMELINE_HITS` -> `thresholds.min_timeline_hits`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use tpf_config::TpfConfig;
//!
//! let config = TpfConfig::load_with_dotenv().expect("config");
//! println!("scores cache: {}", config.paths.content_scores_file().display());
//! ```

mod error;
mod keywords;
mod library;
mod notes;
mod paths;
mod scan;
mod thresholds;

pub use error::ConfigError;
pub use keywords::KeywordsConfig;
pub use library::LibraryConfig;
pub use notes::NotesConfig;
pub use paths::PathsConfig;
pub use scan::ScanConfig;
pub use thresholds::ThresholdsConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "TPF_";

/// Project-local configuration file name.
pub const LOCAL_CONFIG_FILE: &str = "paradigms.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct TpfConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub library: LibraryConfig,
    #[serde(default)]
    pub notes: NotesConfig,
    #[serde(default)]
    pub keywords: KeywordsConfig,
}

impl TpfConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading a `.env` file from the current directory.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests and callers can add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("paradigms").join("config.toml"))
    }

    /// Reject values that would make the pipeline meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let score = self.thresholds.stream_override_score;
        if !(0.0..=1.0).contains(&score) {
            return Err(ConfigError::InvalidValue {
                field: "thresholds.stream_override_score".to_string(),
                reason: format!("{score} is outside [0, 1]"),
            });
        }
        if self.scan.style_max_pages == 0 {
            return Err(ConfigError::InvalidValue {
                field: "scan.style_max_pages".to_string(),
                reason: "must read at least one page".to_string(),
            });
        }
        if self.scan.content_max_pages == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "scan.content_max_pages".to_string(),
                reason: "must read at least one page; omit it to read everything".to_string(),
            });
        }
        Ok(())
    }
}
