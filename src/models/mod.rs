//! Core data models for budget-cli
//!
//! This module contains the records the store owns: debts, expense
//! transactions and the user's settings, plus the money and ID value types
//! they are built from.

pub mod debt;
pub mod ids;
pub mod money;
pub mod settings;
pub mod transaction;

pub use debt::{Debt, DebtInput, DebtValidationError, DEFAULT_DEBT_TYPE};
pub use ids::{DebtId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use settings::{SettingsUpdate, UserSettings, DEFAULT_CATEGORIES};
pub use transaction::{ExpenseInput, ExpenseValidationError, Transaction};
