//! Configuration management
//!
//! Settings live in `settings.json` inside the data directory, next to the
//! stored user data:
//! ```json
//! {
//!   "simulation": { "authDelayMs": 500, "resetDelayMs": 1000, ... }
//! }
//! ```
//! The file is optional and, like the rest of the stored data, unparsable
//! content falls back to defaults instead of failing.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    simulation: SimulationSettings,
}

/// Artificial delays standing in for network latency
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSettings {
    /// Register/login round-trip delay
    #[serde(default = "default_auth_delay_ms")]
    pub auth_delay_ms: u64,
    /// Password-reset round-trip delay
    #[serde(default = "default_reset_delay_ms")]
    pub reset_delay_ms: u64,
    /// Quiet interval before a suggestion fetch is issued
    #[serde(default = "default_suggestion_debounce_ms")]
    pub suggestion_debounce_ms: u64,
    /// Suggestion fetch round-trip delay
    #[serde(default = "default_suggestion_fetch_delay_ms")]
    pub suggestion_fetch_delay_ms: u64,
    /// Review submission round-trip delay
    #[serde(default = "default_review_submit_delay_ms")]
    pub review_submit_delay_ms: u64,
}

fn default_auth_delay_ms() -> u64 {
    500
}

fn default_reset_delay_ms() -> u64 {
    1000
}

fn default_suggestion_debounce_ms() -> u64 {
    300
}

fn default_suggestion_fetch_delay_ms() -> u64 {
    400
}

fn default_review_submit_delay_ms() -> u64 {
    1000
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            auth_delay_ms: default_auth_delay_ms(),
            reset_delay_ms: default_reset_delay_ms(),
            suggestion_debounce_ms: default_suggestion_debounce_ms(),
            suggestion_fetch_delay_ms: default_suggestion_fetch_delay_ms(),
            review_submit_delay_ms: default_review_submit_delay_ms(),
        }
    }
}

/// TasteBook configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub simulation: SimulationSettings,
    /// When set, every simulated delay is zero regardless of settings
    pub zero_latency: bool,
}

impl Config {
    /// Load config from the data directory.
    ///
    /// Zero-latency mode can be enabled via the environment variable
    /// TASTEBOOK_ZERO_LATENCY (for CI/testing).
    pub fn load(data_dir: &Path) -> Result<Self> {
        let settings_path = data_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let zero_latency = matches!(
            std::env::var("TASTEBOOK_ZERO_LATENCY").ok().as_deref(),
            Some("true" | "1" | "yes" | "TRUE" | "YES")
        );

        Ok(Self {
            simulation: raw.simulation,
            zero_latency,
        })
    }

    /// A config with no artificial delays, independent of the environment.
    pub fn zero_latency() -> Self {
        Self {
            simulation: SimulationSettings::default(),
            zero_latency: true,
        }
    }

    pub fn auth_delay(&self) -> Duration {
        self.delay(self.simulation.auth_delay_ms)
    }

    pub fn reset_delay(&self) -> Duration {
        self.delay(self.simulation.reset_delay_ms)
    }

    pub fn suggestion_debounce(&self) -> Duration {
        self.delay(self.simulation.suggestion_debounce_ms)
    }

    pub fn suggestion_fetch_delay(&self) -> Duration {
        self.delay(self.simulation.suggestion_fetch_delay_ms)
    }

    pub fn review_submit_delay(&self) -> Duration {
        self.delay(self.simulation.review_submit_delay_ms)
    }

    fn delay(&self, ms: u64) -> Duration {
        if self.zero_latency {
            Duration::ZERO
        } else {
            Duration::from_millis(ms)
        }
    }
}
