// ABOUTME: Configuration management for spot-onboard
// Loads layered TOML config for analysis timing, form defaults, and UI preferences

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use crate::wizard::WizardSettings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Simulated analysis timing
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Form defaults
    #[serde(default)]
    pub form: FormConfig,

    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Time between progress ticks in milliseconds (default: 200ms)
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,

    /// Percentage added per tick (default: 5)
    #[serde(default = "default_increment")]
    pub increment: u8,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval(),
            increment: default_increment(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Address pre-filled into the company email field
    #[serde(default = "default_company_email")]
    pub company_email: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            company_email: default_company_email(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop poll rate in milliseconds (default: 100ms)
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    /// Blink the text cursor in the focused field
    #[serde(default = "default_true")]
    pub cursor_blink: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            cursor_blink: default_true(),
        }
    }
}

fn default_tick_interval() -> u64 {
    200
}

fn default_increment() -> u8 {
    5
}

fn default_company_email() -> String {
    "tech@odela.com.my".to_string()
}

fn default_tick_rate() -> u64 {
    100
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Load configuration from default locations, then an explicit file if given
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        for path in Self::get_config_paths() {
            if path.exists() {
                config.merge(Self::load_file(&path)?);
            }
        }

        if let Some(path) = explicit {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            config.merge(Self::load_file(path)?);
        }

        config.validate()?;
        debug!("Effective config: {:?}", config);
        Ok(config)
    }

    /// Parse one config file
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get configuration file paths in order of precedence
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        // 1. Local project config
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(".spot-onboard").join("config.toml"));
        }

        // 2. User config (~/.spot-onboard/config/config.toml)
        if let Ok(config_dir) = Self::get_user_config_dir() {
            paths.push(config_dir.join("config.toml"));
        }

        paths
    }

    /// Get user configuration directory
    fn get_user_config_dir() -> Result<PathBuf> {
        Ok(base_dir()?.join("config"))
    }

    /// Merge another config into this one; values left at their defaults do not override
    fn merge(&mut self, other: AppConfig) {
        if other.analysis.tick_interval_ms != default_tick_interval() {
            self.analysis.tick_interval_ms = other.analysis.tick_interval_ms;
        }
        if other.analysis.increment != default_increment() {
            self.analysis.increment = other.analysis.increment;
        }
        if other.form.company_email != default_company_email() {
            self.form.company_email = other.form.company_email;
        }
        if other.ui.tick_rate_ms != default_tick_rate() {
            self.ui.tick_rate_ms = other.ui.tick_rate_ms;
        }
        if other.ui.cursor_blink != default_true() {
            self.ui.cursor_blink = other.ui.cursor_blink;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.analysis.increment == 0 {
            bail!("analysis.increment must be at least 1");
        }
        if self.analysis.tick_interval_ms == 0 {
            bail!("analysis.tick_interval_ms must be at least 1");
        }
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms.max(1))
    }

    /// Wizard construction parameters from this config
    pub fn wizard_settings(&self) -> WizardSettings {
        WizardSettings {
            company_email: self.form.company_email.clone(),
            tick_interval: Duration::from_millis(self.analysis.tick_interval_ms),
            increment: self.analysis.increment,
        }
    }
}

/// Base directory for config and logs (~/.spot-onboard)
pub fn base_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".spot-onboard"))
}
