//! Configuration module for budget-cli
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - Preferences persistence

pub mod paths;
pub mod settings;

pub use paths::BudgetPaths;
pub use settings::AppConfig;
