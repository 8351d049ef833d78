//! Numeric configuration for scoring thresholds and kiosk timers.
//!
//! The timer values are carried for the hosting shell; the core never runs
//! timers itself.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::scoring::Thresholds;

fn default_supporting_threshold() -> f64 {
    0.4
}

fn default_optional_threshold() -> f64 {
    0.25
}

fn default_min_score_to_display() -> u32 {
    10
}

fn default_idle_timeout_ms() -> u64 {
    120_000
}

fn default_warning_ms() -> u64 {
    15_000
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigatorConfig {
    /// Fraction of the primary score a rank-2 offering needs to be shown
    /// as supporting.
    #[serde(default = "default_supporting_threshold")]
    pub supporting_threshold: f64,

    /// Fraction of the primary score a rank-3 offering needs to be shown
    /// as optional.
    #[serde(default = "default_optional_threshold")]
    pub optional_threshold: f64,

    /// Absolute score floor for supporting and optional tiers.
    #[serde(default = "default_min_score_to_display")]
    pub min_score_to_display: u32,

    /// Idle time before the hosting shell shows its attract warning.
    #[serde(default = "default_idle_timeout_ms")]
    pub idle_timeout_ms: u64,

    /// How long the warning stays up before the shell resets the session.
    #[serde(default = "default_warning_ms")]
    pub warning_ms: u64,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        NavigatorConfig {
            supporting_threshold: default_supporting_threshold(),
            optional_threshold: default_optional_threshold(),
            min_score_to_display: default_min_score_to_display(),
            idle_timeout_ms: default_idle_timeout_ms(),
            warning_ms: default_warning_ms(),
        }
    }
}

impl NavigatorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Loads from `path`, falling back to defaults if the file is missing.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Applies admin numeric overrides by camelCase key. Unknown keys are
    /// logged and skipped.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, f64>) {
        for (key, value) in overrides {
            match key.as_str() {
                "supportingThreshold" => self.supporting_threshold = *value,
                "optionalThreshold" => self.optional_threshold = *value,
                "minScoreToDisplay" => self.min_score_to_display = *value as u32,
                "idleTimeoutMs" => self.idle_timeout_ms = *value as u64,
                "warningMs" => self.warning_ms = *value as u64,
                _ => {
                    warn!("Config override for unknown key: {}", key);
                }
            }
        }
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            supporting: self.supporting_threshold,
            optional: self.optional_threshold,
            min_absolute: self.min_score_to_display,
        }
    }
}
