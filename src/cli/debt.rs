//! Debt commands
//!
//! Implements the session commands for adding, editing, removing and
//! listing debts. Input is validated here before it reaches the store.

use std::io::Write;

use clap::Subcommand;

use crate::display::{format_debt_details, format_debt_list, format_debt_saved};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{DebtInput, DEFAULT_DEBT_TYPE};

use super::session::{parse_money, Session};

/// Debt subcommands
#[derive(Subcommand)]
pub enum DebtCommands {
    /// Add a new debt
    Add {
        /// Debt name
        name: String,
        /// Current balance (e.g., "2500" or "2500.00")
        #[arg(short, long, allow_hyphen_values = true)]
        balance: String,
        /// Annual interest rate in percent
        #[arg(short = 'r', long, allow_negative_numbers = true)]
        apr: f64,
        /// Minimum monthly payment
        #[arg(short, long, allow_hyphen_values = true)]
        minimum: String,
        /// Day of the month the payment is due (1-31)
        #[arg(short, long, allow_negative_numbers = true)]
        due_day: i32,
        /// Debt type
        #[arg(short = 't', long = "type", default_value = DEFAULT_DEBT_TYPE)]
        debt_type: String,
    },

    /// Edit an existing debt
    Edit {
        /// Debt name or ID
        debt: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New balance
        #[arg(short, long, allow_hyphen_values = true)]
        balance: Option<String>,
        /// New interest rate
        #[arg(short = 'r', long, allow_negative_numbers = true)]
        apr: Option<f64>,
        /// New minimum payment
        #[arg(short, long, allow_hyphen_values = true)]
        minimum: Option<String>,
        /// New due day
        #[arg(short, long, allow_negative_numbers = true)]
        due_day: Option<i32>,
        /// New debt type
        #[arg(short = 't', long = "type")]
        debt_type: Option<String>,
    },

    /// Remove a debt
    #[command(alias = "delete")]
    Remove {
        /// Debt name or ID
        debt: String,
    },

    /// List all debts
    List,

    /// Show debt details
    Show {
        /// Debt name or ID
        debt: String,
    },
}

/// Handle a debt command
pub fn handle_debt_command(
    session: &mut Session,
    cmd: DebtCommands,
    out: &mut dyn Write,
) -> BudgetResult<()> {
    match cmd {
        DebtCommands::Add {
            name,
            balance,
            apr,
            minimum,
            due_day,
            debt_type,
        } => {
            let input = DebtInput::new(
                name.trim(),
                parse_money(&balance)?,
                apr,
                parse_money(&minimum)?,
                due_day,
            )
            .with_type(debt_type.trim());
            validate(&input)?;

            let debt = session.state_mut().add_debt(input);
            write!(out, "{}", format_debt_saved("Added", &debt, session.symbol()))?;
        }

        DebtCommands::Edit {
            debt,
            name,
            balance,
            apr,
            minimum,
            due_day,
            debt_type,
        } => {
            let existing = session.resolve_debt(&debt)?;
            let mut input = existing.to_input();

            if let Some(name) = name {
                input.name = name.trim().to_string();
            }
            if let Some(balance) = balance {
                input.balance = parse_money(&balance)?;
            }
            if let Some(apr) = apr {
                input.interest_rate = apr;
            }
            if let Some(minimum) = minimum {
                input.minimum_payment = parse_money(&minimum)?;
            }
            if let Some(due_day) = due_day {
                input.due_day = due_day;
            }
            if let Some(debt_type) = debt_type {
                input.debt_type = debt_type.trim().to_string();
            }
            validate(&input)?;

            let updated = session.state_mut().edit_debt(existing.id, input)?;
            write!(
                out,
                "{}",
                format_debt_saved("Updated", &updated, session.symbol())
            )?;
        }

        DebtCommands::Remove { debt } => {
            let existing = session.resolve_debt(&debt)?;
            let removed = session.state_mut().remove_debt(existing.id)?;
            writeln!(out, "Removed debt: {} ({})", removed.name, removed.id)?;
        }

        DebtCommands::List => {
            write!(
                out,
                "{}",
                format_debt_list(session.state().debts(), session.symbol())
            )?;
        }

        DebtCommands::Show { debt } => {
            let debt = session.resolve_debt(&debt)?;
            write!(out, "{}", format_debt_details(&debt, session.symbol()))?;
        }
    }

    Ok(())
}

fn validate(input: &DebtInput) -> BudgetResult<()> {
    input
        .validate()
        .map_err(|e| BudgetError::Validation(e.to_string()))
}
