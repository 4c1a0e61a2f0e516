//! Expense commands
//!
//! Logging, editing and deleting expenses. The category must be one of the
//! configured categories; it is matched case-insensitively and stored with
//! the configured spelling.

use std::io::Write;

use chrono::NaiveTime;
use clap::Subcommand;

use crate::display::{format_transaction_details, format_transaction_list};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{ExpenseInput, Transaction};

use super::session::{parse_date, parse_money, Session};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Log a new expense
    #[command(alias = "add")]
    Log {
        /// Amount spent (e.g., "45.20")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category name
        category: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Optional description
        #[arg(short = 'n', long)]
        description: Option<String>,
    },

    /// Edit an expense
    Edit {
        /// Expense ID
        id: String,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New description
        #[arg(short = 'n', long, conflicts_with = "clear_description")]
        description: Option<String>,
        /// Remove the description
        #[arg(long)]
        clear_description: bool,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
    },

    /// Show expense details
    Show {
        /// Expense ID
        id: String,
    },

    /// List expenses
    List {
        /// Only this month's expenses
        #[arg(short, long)]
        month: bool,
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
        /// Show at most this many (the most recent)
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    session: &mut Session,
    cmd: ExpenseCommands,
    out: &mut dyn Write,
) -> BudgetResult<()> {
    match cmd {
        ExpenseCommands::Log {
            amount,
            category,
            date,
            description,
        } => {
            let date = match date {
                Some(date) => parse_date(&date)?,
                None => session.today(),
            };
            let mut input = ExpenseInput::on(
                date,
                parse_money(&amount)?,
                resolve_category(session, &category)?,
            );
            input.description = non_empty(description);
            validate(&input)?;

            let txn = session.state_mut().log_expense(input);
            writeln!(
                out,
                "Logged expense: {} {} ({})",
                txn.category,
                txn.amount.format_with_symbol(session.symbol()),
                txn.id
            )?;
        }

        ExpenseCommands::Edit {
            id,
            amount,
            category,
            date,
            description,
            clear_description,
        } => {
            let existing = session.resolve_transaction(&id)?;
            let mut input = existing.to_input();

            if let Some(amount) = amount {
                input.amount = parse_money(&amount)?;
            }
            if let Some(category) = category {
                input.category = resolve_category(session, &category)?;
            }
            if let Some(date) = date {
                input.date = parse_date(&date)?.and_time(NaiveTime::MIN);
            }
            if description.is_some() {
                input.description = non_empty(description);
            }
            if clear_description {
                input.description = None;
            }
            validate(&input)?;

            let updated = session.state_mut().edit_transaction(existing.id, input)?;
            writeln!(out, "Updated expense: {} ({})", updated, updated.id)?;
        }

        ExpenseCommands::Delete { id } => {
            let existing = session.resolve_transaction(&id)?;
            let removed = session.state_mut().delete_transaction(existing.id)?;
            writeln!(out, "Deleted expense: {} ({})", removed, removed.id)?;
        }

        ExpenseCommands::Show { id } => {
            let txn = session.resolve_transaction(&id)?;
            write!(
                out,
                "{}",
                format_transaction_details(&txn, &session.config().date_format, session.symbol())
            )?;
        }

        ExpenseCommands::List {
            month,
            category,
            limit,
        } => {
            let today = session.today();
            let mut selected: Vec<&Transaction> = session
                .state()
                .transactions()
                .iter()
                .filter(|t| !month || t.is_in_month_of(today))
                .filter(|t| {
                    category
                        .as_deref()
                        .map_or(true, |c| t.category.eq_ignore_ascii_case(c))
                })
                .collect();
            if let Some(limit) = limit {
                let start = selected.len().saturating_sub(limit);
                selected.drain(..start);
            }

            write!(
                out,
                "{}",
                format_transaction_list(&selected, &session.config().date_format, session.symbol())
            )?;
        }
    }

    Ok(())
}

/// The configured spelling of `category`, or a validation error
fn resolve_category(session: &Session, category: &str) -> BudgetResult<String> {
    let wanted = category.trim();
    session
        .state()
        .settings()
        .categories
        .iter()
        .find(|c| c.eq_ignore_ascii_case(wanted))
        .cloned()
        .ok_or_else(|| BudgetError::Validation(format!("Unknown category '{}'", wanted)))
}

fn non_empty(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}

fn validate(input: &ExpenseInput) -> BudgetResult<()> {
    input
        .validate()
        .map_err(|e| BudgetError::Validation(e.to_string()))
}
