//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/course-planner/course-planner.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `COURSE_PLANNER_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{Traversal, DEFAULT_DELIMITER};

/// Prefix for environment overrides, e.g. `COURSE_PLANNER_DATA_FILE`.
pub const ENV_PREFIX: &str = "COURSE_PLANNER";

/// Unified configuration for course-planner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Course file used when none is given on the command line or at the prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
    /// Column separator in course files
    pub delimiter: char,
    /// Order used by `list` when `--order` is not given
    pub listing_order: Traversal,
    /// Check prerequisites after every load
    pub validate_on_load: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: None,
            delimiter: DEFAULT_DELIMITER,
            listing_order: Traversal::In,
            validate_on_load: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub data_file: Option<PathBuf>,
    pub delimiter: Option<char>,
    pub listing_order: Option<Traversal>,
    pub validate_on_load: Option<bool>,
}

/// Get the XDG config directory for course-planner.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "course-planner").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("course-planner.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}` in a path string; unknown variables leave it as is.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn parse_delimiter(value: &str) -> ApplicationResult<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ApplicationError::Config {
            message: format!("delimiter must be a single character, got {value:?}"),
        }),
    }
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; unlike the global file it must exist
    pub fn load(config_file: Option<&Path>) -> ApplicationResult<Self> {
        let global = global_config_path();
        let current = Self::load_layers(global.as_deref(), config_file)?;
        Self::apply_env_overrides(current)
    }

    /// Merge defaults with the given config files, without environment overrides.
    ///
    /// A missing global file is skipped; a missing explicit file is an error.
    pub fn load_layers(global: Option<&Path>, config_file: Option<&Path>) -> ApplicationResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        if let Some(path) = config_file {
            debug!("explicit config: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        current.expand_paths();
        Ok(current)
    }

    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            data_file: overlay.data_file.clone().or_else(|| self.data_file.clone()),
            delimiter: overlay.delimiter.unwrap_or(self.delimiter),
            listing_order: overlay.listing_order.unwrap_or(self.listing_order),
            validate_on_load: overlay.validate_on_load.unwrap_or(self.validate_on_load),
        }
    }

    fn expand_paths(&mut self) {
        if let Some(data_file) = &self.data_file {
            self.data_file = Some(PathBuf::from(expand_env_vars(
                data_file.to_string_lossy().as_ref(),
            )));
        }
    }

    /// Apply COURSE_PLANNER_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> ApplicationResult<Self> {
        let config = Config::builder()
            .add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("_"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("data_file") {
            settings.data_file = Some(PathBuf::from(expand_env_vars(&val)));
        }
        if let Ok(val) = config.get_string("delimiter") {
            settings.delimiter = parse_delimiter(&val)?;
        }
        if let Ok(val) = config.get_string("listing_order") {
            settings.listing_order = val
                .parse()
                .map_err(|message| ApplicationError::Config { message })?;
        }
        if let Ok(val) = config.get_bool("validate_on_load") {
            settings.validate_on_load = val;
        }

        Ok(settings)
    }

    /// The course file to load: the explicit one, else the configured `data_file`.
    pub fn resolve_data_file(&self, explicit: Option<&Path>) -> ApplicationResult<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.data_file.clone())
            .ok_or(ApplicationError::NoDataFile)
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })
    }
}
