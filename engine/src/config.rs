use serde::Deserialize;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

use says_types::FormFactor;
use says_types::ui::UiOptions;

const FORM_FACTOR_ENV: &str = "SAYS_FORM_FACTOR";

// Default value function for serde (bool::default() is false, so only true needs a fn)
pub(crate) const fn default_true() -> bool {
    true
}

/// Contents of `~/.says/config.toml`. Every section is optional.
///
/// ```toml
/// [app]
/// ascii_only = false
/// high_contrast = false
/// reduced_motion = false
/// form_factor = "rect"
///
/// [game]
/// seed = 42
///
/// [haptics]
/// enabled = true
/// bell = false
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct SaysConfig {
    pub app: Option<AppConfig>,
    pub game: Option<GameConfig>,
    pub haptics: Option<HapticsConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for the button column.
    #[serde(default)]
    pub ascii_only: bool,
    /// Monochrome palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable screen shake and flashing colours.
    #[serde(default)]
    pub reduced_motion: bool,
    /// "rect" or "round".
    pub form_factor: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GameConfig {
    /// Fixed RNG seed for a reproducible game. Clock-seeded when absent.
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct HapticsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Ring the terminal bell for every pulse.
    #[serde(default)]
    pub bell: bool,
}

impl Default for HapticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bell: false,
        }
    }
}

impl SaysConfig {
    /// Load the config from its default location. `Ok(None)` when there is no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    /// Get the config file path.
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// UI options with the `SAYS_FORM_FACTOR` env var as fallback for the form factor.
    #[must_use]
    pub fn ui_options(config: Option<&Self>) -> UiOptions {
        let env_form = env::var(FORM_FACTOR_ENV).ok();
        Self::ui_options_with_env(config, env_form.as_deref())
    }

    fn ui_options_with_env(config: Option<&Self>, env_form: Option<&str>) -> UiOptions {
        let app = config.and_then(|cfg| cfg.app.as_ref());
        let form_factor = app
            .and_then(|app| app.form_factor.as_deref())
            .and_then(|raw| parse_form_factor(raw, "config"))
            .or_else(|| env_form.and_then(|raw| parse_form_factor(raw, FORM_FACTOR_ENV)))
            .unwrap_or_default();

        UiOptions {
            ascii_only: app.is_some_and(|app| app.ascii_only),
            high_contrast: app.is_some_and(|app| app.high_contrast),
            reduced_motion: app.is_some_and(|app| app.reduced_motion),
            form_factor,
        }
    }

    #[must_use]
    pub fn seed(config: Option<&Self>) -> Option<u64> {
        config
            .and_then(|cfg| cfg.game.as_ref())
            .and_then(|game| game.seed)
    }

    #[must_use]
    pub fn haptics(config: Option<&Self>) -> HapticsConfig {
        config
            .and_then(|cfg| cfg.haptics.as_ref())
            .map(|haptics| HapticsConfig {
                enabled: haptics.enabled,
                bell: haptics.bell,
            })
            .unwrap_or_default()
    }
}

fn parse_form_factor(raw: &str, source: &str) -> Option<FormFactor> {
    let parsed = FormFactor::parse(raw);
    if parsed.is_none() {
        tracing::warn!("Unknown form factor in {}: {}", source, raw);
    }
    parsed
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".says").join("config.toml"))
}
