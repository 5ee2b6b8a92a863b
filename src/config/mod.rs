//! # Configuration Management Module
//!
//! Centralized configuration for the training engine with validation,
//! defaults, and TOML persistence.
//!
//! ## Configuration Structure
//!
//! - [`AcademyConfig`] - Branding and welcome copy
//! - [`GamificationConfig`] - Level thresholds and titles, streak reward,
//!   playback cadence; this is the section the progression engine consumes
//! - [`LoggingConfig`] - Log level
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sellerdojo::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     println!("academy: {}", config.academy.name);
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [academy]
//! name = "Seller Dojo"
//! welcome_message = "Level up your marketplace game!"
//!
//! [gamification]
//! level_thresholds = [0, 100, 300, 600, 1000]
//! level_titles = [
//!     "Marketplace Newbie",
//!     "Marketplace Explorer",
//!     "Dashboard Guru",
//!     "Listing Legend",
//!     "Super Seller",
//! ]
//! streak_xp = 5
//! playback_tick_ms = 1000
//! playback_step = 10
//!
//! [logging]
//! level = "info"
//! ```
//!
//! All values are validated on load: thresholds must start at zero and rise
//! strictly, and the title table must name every tier.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::fs;

use crate::academy::playback::PlaybackSettings;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub academy: AcademyConfig,
    #[serde(default)]
    pub gamification: GamificationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Branding section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcademyConfig {
    pub name: String,
    pub welcome_message: String,
}

impl Default for AcademyConfig {
    fn default() -> Self {
        Self {
            name: "Seller Dojo".to_string(),
            welcome_message: "Level up your marketplace game!".to_string(),
        }
    }
}

/// Gamification settings consumed by the progression engine.
///
/// Levels are 0-based tiers internally; `level_titles[tier]` names the tier
/// and the UI shows `tier + 1`. The threshold table is ascending XP cutoffs,
/// open-ended past the last entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamificationConfig {
    pub level_thresholds: Vec<u32>,
    pub level_titles: Vec<String>,
    /// XP awarded for the first login of a day.
    pub streak_xp: u32,
    /// Simulated playback tick interval in milliseconds.
    pub playback_tick_ms: u64,
    /// Progress percentage added per playback tick.
    pub playback_step: u8,
}

impl Default for GamificationConfig {
    fn default() -> Self {
        Self {
            level_thresholds: vec![0, 100, 300, 600, 1000],
            level_titles: vec![
                "Marketplace Newbie".to_string(),
                "Marketplace Explorer".to_string(),
                "Dashboard Guru".to_string(),
                "Listing Legend".to_string(),
                "Super Seller".to_string(),
            ],
            streak_xp: 5,
            playback_tick_ms: 1000,
            playback_step: 10,
        }
    }
}

impl GamificationConfig {
    /// Title for a 0-based tier, clamped to the last configured title.
    pub fn level_title(&self, tier: u32) -> &str {
        let last = self.level_titles.len().saturating_sub(1);
        &self.level_titles[(tier as usize).min(last)]
    }

    /// Playback cadence as settings for the simulation task.
    pub fn playback(&self) -> PlaybackSettings {
        PlaybackSettings {
            tick: Duration::from_millis(self.playback_tick_ms),
            step: self.playback_step,
        }
    }
}

/// Logging section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load and validate configuration from a TOML file.
    pub async fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("failed to read config file {}: {}", path, e))?;
        let config: Config =
            toml::from_str(&contents).map_err(|e| anyhow!("invalid config file {}: {}", path, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Write a default configuration file.
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let contents = toml::to_string_pretty(&config)?;
        fs::write(path, contents)
            .await
            .map_err(|e| anyhow!("failed to write config file {}: {}", path, e))?;
        Ok(())
    }

    /// Validate all configuration values.
    pub fn validate(&self) -> Result<()> {
        let g = &self.gamification;
        if g.level_thresholds.is_empty() {
            return Err(anyhow!("gamification.level_thresholds must not be empty"));
        }
        if g.level_thresholds[0] != 0 {
            return Err(anyhow!("gamification.level_thresholds must start at 0"));
        }
        if !g.level_thresholds.windows(2).all(|w| w[0] < w[1]) {
            return Err(anyhow!(
                "gamification.level_thresholds must be strictly ascending"
            ));
        }
        if g.level_titles.len() != g.level_thresholds.len() {
            return Err(anyhow!(
                "gamification.level_titles must name every tier ({} titles for {} thresholds)",
                g.level_titles.len(),
                g.level_thresholds.len()
            ));
        }
        if g.playback_step == 0 || g.playback_step > 100 {
            return Err(anyhow!("gamification.playback_step must be in 1..=100"));
        }
        if g.playback_tick_ms == 0 {
            return Err(anyhow!("gamification.playback_tick_ms must be positive"));
        }
        match self.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            other => return Err(anyhow!("unknown logging.level: {}", other)),
        }
        Ok(())
    }
}
