//! Application preferences for budget-cli
//!
//! How the front end formats and seeds a session: currency symbol, date
//! format, how many upcoming payments to list, the income and categories a
//! new session starts with, and whether audit entries go to disk.

use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::models::{Money, UserSettings, DEFAULT_CATEGORIES};
use crate::reports::DEFAULT_UPCOMING_COUNT;

/// Preferences stored in `config.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format (strftime) for transaction listings
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Number of debts listed under upcoming payments
    #[serde(default = "default_upcoming_count")]
    pub upcoming_count: usize,

    /// Monthly income a new session starts with
    #[serde(default)]
    pub default_monthly_income: Money,

    /// Categories a new session starts with
    #[serde(default = "default_categories")]
    pub default_categories: Vec<String>,

    /// Append each session's audit entries to the audit log on exit
    #[serde(default)]
    pub audit_log_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_upcoming_count() -> usize {
    DEFAULT_UPCOMING_COUNT
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            upcoming_count: default_upcoming_count(),
            default_monthly_income: Money::zero(),
            default_categories: default_categories(),
            audit_log_enabled: false,
        }
    }
}

impl AppConfig {
    /// Settings a fresh session starts with
    pub fn initial_settings(&self) -> UserSettings {
        UserSettings::new(self.default_monthly_income, self.default_categories.clone())
    }

    /// Load preferences from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let config_path = paths.config_file();

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(|e| {
                BudgetError::Io(format!("Failed to read config file: {}", e))
            })?;

            let config: AppConfig = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse config file: {}", e))
            })?;

            Ok(config)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(AppConfig::default())
        }
    }

    /// Save preferences to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BudgetError::Config(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(paths.config_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.upcoming_count, 3);
        assert!(!config.audit_log_enabled);
        assert_eq!(config.initial_settings(), UserSettings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut config = AppConfig::default();
        config.currency_symbol = "€".into();
        config.default_monthly_income = Money::from_dollars(3200);
        config.default_categories = vec!["Rent".into(), "Food".into()];

        config.save(&paths).unwrap();
        assert!(paths.is_initialized());

        let loaded = AppConfig::load_or_create(&paths).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.initial_settings().monthly_income,
            Money::from_dollars(3200)
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.config_file(), r#"{"upcoming_count": 5}"#).unwrap();

        let loaded = AppConfig::load_or_create(&paths).unwrap();
        assert_eq!(loaded.upcoming_count, 5);
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.default_categories.len(), 5);
    }

    #[test]
    fn test_corrupt_config_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.config_file(), "not json").unwrap();

        let err = AppConfig::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, BudgetError::Config(_)));
    }
}
