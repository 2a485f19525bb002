use std::path::PathBuf;

use cashflow_domain::Period;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stores user-configurable planner preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    /// Balances at or above zero but below this are shown as low.
    #[serde(default = "Config::default_low_balance_threshold")]
    pub low_balance_threshold: Decimal,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default)]
    pub plain_output: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_period: Option<Period>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom root for plan files. Defaults to the platform data dir.
    pub data_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            currency: Self::default_currency(),
            low_balance_threshold: Self::default_low_balance_threshold(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            plain_output: false,
            last_period: None,
            data_root: None,
        }
    }
}

impl Config {
    pub fn default_locale() -> String {
        "en-US".into()
    }

    pub fn default_currency() -> String {
        "USD".into()
    }

    pub fn default_low_balance_threshold() -> Decimal {
        Decimal::ONE_HUNDRED
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn resolve_data_root(&self) -> PathBuf {
        if let Some(path) = &self.data_root {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("cashflow-planner")
    }

    pub fn plans_dir(&self) -> PathBuf {
        self.resolve_data_root().join("plans")
    }
}
