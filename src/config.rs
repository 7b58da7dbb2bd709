//! Configuration file support for quayside.
//!
//! Quayside supports two configuration file locations:
//! - Global: `~/.quayside/config.toml` - User-wide defaults
//! - Project: `.quayside/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config, and environment
//! variables take precedence over both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::resolve::Selection;

/// Environment variable naming the configured Qt API.
pub const ENV_QT_API: &str = "QUAYSIDE_QT_API";

/// Environment variable for the legacy PyQt4 force flag (`true` to set).
pub const ENV_FORCE_PYQT: &str = "QUAYSIDE_FORCE_PYQT";

/// Environment variable selecting the stand-in backend (`true` to set).
pub const ENV_STUB: &str = "QUAYSIDE_STUB";

/// Quayside configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Qt binding selection settings
    pub qt: QtSettings,
}

/// Qt binding selection settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QtSettings {
    /// Configured Qt API name (pyside, pyqt4, pyqt4v2, pyqt5).
    ///
    /// Kept as a raw string; the resolver validates it.
    pub api: Option<String>,

    /// Pin PyQt4 regardless of other settings (legacy escape hatch)
    #[serde(default)]
    pub force_pyqt: bool,

    /// Use the toolkit-less stand-in backend
    #[serde(default)]
    pub stub: bool,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.qt.api.is_some() {
            self.qt.api = other.qt.api;
        }
        if other.qt.force_pyqt {
            self.qt.force_pyqt = true;
        }
        if other.qt.stub {
            self.qt.stub = true;
        }
    }

    /// Selection inputs from file values alone.
    pub fn selection(&self) -> Selection {
        Selection {
            explicit: None,
            force_pyqt: self.qt.force_pyqt,
            configured: self.qt.api.clone(),
            stub: self.qt.stub,
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.quayside/config.toml)
/// 2. Global config (~/.quayside/config.toml)
/// 3. Defaults
pub fn load_config(global_path: &Path, project_path: &Path) -> Config {
    let mut config = Config::default();

    if global_path.exists() {
        let global = Config::load_or_default(global_path);
        config.merge(global);
    }

    if project_path.exists() {
        let project = Config::load_or_default(project_path);
        config.merge(project);
    }

    config
}

/// Get the global quayside config directory (~/.quayside).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".quayside"))
}

/// Get the global config path (~/.quayside/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.quayside/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".quayside").join("config.toml")
}

/// Overlay environment variables onto selection inputs.
///
/// `QUAYSIDE_QT_API` replaces the configured name when non-empty. The two
/// flag variables turn their flag on when set to exactly `true`; they never
/// turn a file-set flag off.
pub fn overlay_env(selection: Selection) -> Selection {
    overlay(selection, |key| std::env::var(key).ok())
}

fn overlay(mut selection: Selection, get: impl Fn(&str) -> Option<String>) -> Selection {
    if let Some(api) = get(ENV_QT_API).filter(|v| !v.is_empty()) {
        selection.configured = Some(api);
    }
    if get(ENV_FORCE_PYQT).as_deref() == Some("true") {
        selection.force_pyqt = true;
    }
    if get(ENV_STUB).as_deref() == Some("true") {
        selection.stub = true;
    }
    selection
}

/// Gather selection inputs from config files and the environment.
///
/// Searches for config in this order:
/// 1. Environment variables
/// 2. Project config (`.quayside/config.toml` in current dir)
/// 3. Global config (`~/.quayside/config.toml`)
///
/// The caller's explicit override, if any, is applied on the returned
/// selection afterwards.
pub fn gather_selection() -> Selection {
    let cwd = std::env::current_dir().unwrap_or_default();
    let project_path = project_config_path(&cwd);
    let global_path = global_config_path();

    let config = if let Some(ref global) = global_path {
        load_config(global, &project_path)
    } else {
        load_config(&PathBuf::new(), &project_path)
    };

    overlay_env(config.selection())
}
