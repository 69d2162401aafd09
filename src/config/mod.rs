//! On-disk defaults for the command-line front end.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use dirs::home_dir;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{currency::Currency, errors::LimitError};

const DEFAULT_DIR_NAME: &str = ".daily_limit";
const CONFIG_FILE: &str = "config.json";
const HOME_ENV: &str = "DAILY_LIMIT_HOME";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Daily kcal budget.
    pub calorie_limit: f64,
    /// Daily money budget in rubles.
    pub cash_limit: f64,
    /// Currency code used when none is given on the command line.
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            calorie_limit: 2000.0,
            cash_limit: 1000.0,
            currency: Currency::Rub.code().into(),
        }
    }
}

impl Config {
    /// Confirms the default currency is supported and returns it.
    pub fn validate(&self) -> Result<Currency, LimitError> {
        self.currency.parse()
    }
}

/// Returns the application data directory, defaulting to `~/.daily_limit`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: impl AsRef<Path>) -> Self {
        Self {
            path: base.as_ref().join(CONFIG_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the config file, or the defaults when it does not exist yet.
    pub fn load(&self) -> Result<Config, LimitError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), LimitError> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension(TMP_SUFFIX);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
