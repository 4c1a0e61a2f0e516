//! CLI command handlers
//!
//! Each module defines the clap subcommands for one area and the handler
//! that runs them against a [`Session`].

pub mod category;
pub mod debt;
pub mod demo;
pub mod expense;
pub mod export;
pub mod plan;
pub mod report;
pub mod session;
pub mod settings;

pub use category::{handle_category_command, CategoryCommands};
pub use debt::{handle_debt_command, DebtCommands};
pub use demo::{run_demo, sample_state};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use plan::{handle_plan_command, PlanCommands};
pub use report::{handle_audit, handle_home, handle_spending};
pub use session::{parse_date, parse_money, split_words, Flow, Session, SessionCommand};
pub use settings::{handle_settings_command, SettingsCommands};
