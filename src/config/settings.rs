//! User settings for SpendWise
//!
//! Display preferences for the expense table and dashboard.

use serde::{Deserialize, Serialize};

use super::paths::SpendPaths;
use crate::error::SpendError;
use crate::listview::SortKey;
use crate::models::money::{self, Money};

/// User settings for SpendWise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Rows per page in the expense table
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Column the expense table is sorted by when none is given
    #[serde(default)]
    pub default_sort: SortKey,

    /// How many trailing days of the daily series the dashboard draws
    #[serde(default = "default_trend_window_days")]
    pub trend_window_days: usize,

    /// Budget assumed while the profile has none
    #[serde(
        default,
        with = "money::as_optional_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub fallback_budget: Option<Money>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_page_size() -> usize {
    10
}

fn default_trend_window_days() -> usize {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            page_size: default_page_size(),
            default_sort: SortKey::default(),
            trend_window_days: default_trend_window_days(),
            fallback_budget: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SpendPaths) -> Result<Self, SpendError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SpendError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SpendError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendPaths) -> Result<(), SpendError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SpendError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SpendError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.page_size, 10);
        assert_eq!(settings.default_sort, SortKey::Date);
        assert_eq!(settings.trend_window_days, 30);
        assert_eq!(settings.fallback_budget, None);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.page_size = 25;
        settings.default_sort = SortKey::Amount;
        settings.fallback_budget = Some(Money::from_cents(200000));

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.page_size, 25);
        assert_eq!(loaded.default_sort, SortKey::Amount);
        assert_eq!(loaded.fallback_budget, Some(Money::from_cents(200000)));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "€"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.page_size, 10);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ nope").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, SpendError::Config(_)));
    }
}
