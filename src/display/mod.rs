//! Display formatting for terminal output
//!
//! Turns models and report figures into the text the session prints.
//! Every formatter takes the currency symbol from the user's preferences.

pub mod debt;
pub mod plan;
pub mod report;
pub mod settings;
pub mod transaction;

pub use debt::{format_debt_details, format_debt_list, format_debt_saved};
pub use plan::{format_plan, format_plan_totals};
pub use report::{format_home, format_spending};
pub use settings::{format_category_list, format_settings};
pub use transaction::{format_transaction_details, format_transaction_list};
