//! Settings commands

use std::io::Write;

use clap::Subcommand;

use crate::display::format_settings;
use crate::error::{BudgetError, BudgetResult};
use crate::models::SettingsUpdate;

use super::session::{parse_money, Session};

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show income and categories
    Show,

    /// Set the monthly income
    Income {
        /// Take-home income per month
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
}

/// Handle a settings command
pub fn handle_settings_command(
    session: &mut Session,
    cmd: SettingsCommands,
    out: &mut dyn Write,
) -> BudgetResult<()> {
    match cmd {
        SettingsCommands::Show => {
            write!(
                out,
                "{}",
                format_settings(session.state().settings(), session.symbol())
            )?;
        }

        SettingsCommands::Income { amount } => {
            let amount = parse_money(&amount)?;
            if amount.is_negative() {
                return Err(BudgetError::Validation(format!(
                    "Monthly income cannot be negative: {}",
                    amount
                )));
            }

            session
                .state_mut()
                .update_settings(SettingsUpdate::new().monthly_income(amount));
            writeln!(
                out,
                "Monthly income set to {}",
                amount.format_with_symbol(session.symbol())
            )?;
        }
    }

    Ok(())
}
