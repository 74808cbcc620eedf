// ⚙️ Configuration - starting values for a bank's shared context
//
// JSON file, every key optional:
// {
//   "first_transaction_id": 100,
//   "interest_rate": 0.05,
//   "default_time_zone": { "name": "UTC", "offset_hours": 0, "offset_minutes": 0 }
// }

use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::context::{DEFAULT_FIRST_TRANSACTION_ID, DEFAULT_INTEREST_RATE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankConfig {
    /// First id the transaction sequence issues
    #[serde(default = "default_first_transaction_id")]
    pub first_transaction_id: u64,

    /// Shared interest rate (must be finite and >= 0)
    #[serde(default = "default_interest_rate")]
    pub interest_rate: f64,

    /// Zone for accounts opened without one
    #[serde(default)]
    pub default_time_zone: TimeZoneSettings,
}

/// Unvalidated time zone fields as they appear in the file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeZoneSettings {
    pub name: String,
    #[serde(default)]
    pub offset_hours: i32,
    #[serde(default)]
    pub offset_minutes: i32,
}

fn default_first_transaction_id() -> u64 {
    DEFAULT_FIRST_TRANSACTION_ID
}

fn default_interest_rate() -> f64 {
    DEFAULT_INTEREST_RATE
}

impl Default for TimeZoneSettings {
    fn default() -> Self {
        TimeZoneSettings {
            name: "UTC".to_string(),
            offset_hours: 0,
            offset_minutes: 0,
        }
    }
}

impl Default for BankConfig {
    fn default() -> Self {
        BankConfig {
            first_transaction_id: default_first_transaction_id(),
            interest_rate: default_interest_rate(),
            default_time_zone: TimeZoneSettings::default(),
        }
    }
}

impl BankConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse config JSON")
    }
}
