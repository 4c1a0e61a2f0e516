//! budget-cli - Debt tracking and expense logging from the terminal
//!
//! This library holds an in-memory budget session: debts, expense
//! transactions and the user's income and categories, plus the views built
//! from them (home overview, spending by category, debt-payment plan).
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Debts, transactions, settings and the money/ID value types
//! - `store`: The application state store and its change notifications
//! - `reports`: Pure computations over a store snapshot
//! - `audit`: Audit trail of every store change
//! - `display`: Text formatting of the views
//! - `export`: JSON/YAML snapshots and CSV listings
//! - `config`: Configuration and path management
//! - `cli`: The line-oriented command session
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```
//! use budget_cli::models::{ExpenseInput, Money};
//! use budget_cli::reports::total_spent;
//! use budget_cli::store::AppState;
//! use chrono::NaiveDate;
//!
//! let mut state = AppState::new();
//! let date = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
//! state.log_expense(ExpenseInput::on(date, Money::from_dollars(12), "Food"));
//! assert_eq!(total_spent(state.transactions()), Money::from_dollars(12));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod store;

pub use error::{BudgetError, BudgetResult};
