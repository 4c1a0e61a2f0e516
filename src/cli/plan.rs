//! Plan commands
//!
//! The plan lives in the session, not the store. Amounts are clamped rather
//! than rejected: money to debts into `[0, monthly income]`, payments to
//! zero or more.

use std::io::Write;

use clap::Subcommand;

use crate::display::{format_plan, format_plan_totals};
use crate::error::BudgetResult;

use super::session::{parse_money, Session};

/// Plan subcommands
#[derive(Subcommand)]
pub enum PlanCommands {
    /// Show the plan
    Show,

    /// Set how much of the monthly income goes to debts
    Total {
        /// Amount per month
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Set the planned payment for one debt
    Pay {
        /// Debt name or ID
        debt: String,
        /// Payment amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Put a debt back on its minimum payment
    Clear {
        /// Debt name or ID
        debt: String,
    },

    /// Start the plan over from the minimum payments
    Reset,
}

/// Handle a plan command
pub fn handle_plan_command(
    session: &mut Session,
    cmd: PlanCommands,
    out: &mut dyn Write,
) -> BudgetResult<()> {
    match cmd {
        PlanCommands::Show => {}

        PlanCommands::Total { amount } => {
            let amount = parse_money(&amount)?;
            let income = session.state().settings().monthly_income;
            let stored = session.plan_mut().set_money_to_debts(amount, income);
            writeln!(
                out,
                "Money to Debts: {}",
                stored.format_with_symbol(session.symbol())
            )?;
            return write_totals(session, out);
        }

        PlanCommands::Pay { debt, amount } => {
            let debt = session.resolve_debt(&debt)?;
            let amount = parse_money(&amount)?;
            let stored = session.plan_mut().set_payment(debt.id, amount);
            writeln!(
                out,
                "Pay {}: {}",
                debt.name,
                stored.format_with_symbol(session.symbol())
            )?;
            return write_totals(session, out);
        }

        PlanCommands::Clear { debt } => {
            let debt = session.resolve_debt(&debt)?;
            session.plan_mut().clear_payment(debt.id);
            writeln!(
                out,
                "Pay {}: {} (minimum)",
                debt.name,
                debt.minimum_payment.format_with_symbol(session.symbol())
            )?;
            return write_totals(session, out);
        }

        PlanCommands::Reset => session.reset_plan(),
    }

    let income = session.state().settings().monthly_income;
    let plan = session.plan_mut().clone();
    write!(
        out,
        "{}",
        format_plan(&plan, session.state().debts(), income, session.symbol())
    )?;
    Ok(())
}

fn write_totals(session: &mut Session, out: &mut dyn Write) -> BudgetResult<()> {
    let plan = session.plan_mut().clone();
    write!(
        out,
        "{}",
        format_plan_totals(&plan, session.state().debts(), session.symbol())
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::models::{DebtInput, Money, SettingsUpdate};
    use crate::store::AppState;
    use chrono::NaiveDate;

    fn session() -> Session {
        let mut state = AppState::new();
        state.update_settings(SettingsUpdate::new().monthly_income(Money::from_dollars(3000)));
        state.add_debt(DebtInput::new(
            "Visa",
            Money::from_dollars(1000),
            19.99,
            Money::from_dollars(25),
            15,
        ));
        state.add_debt(DebtInput::new(
            "Amex",
            Money::from_dollars(500),
            22.0,
            Money::from_dollars(25),
            3,
        ));
        Session::new(
            state,
            AppConfig::default(),
            NaiveDate::from_ymd_opt(2025, 11, 20).unwrap(),
        )
    }

    fn exec(session: &mut Session, line: &str) -> BudgetResult<String> {
        let mut out = Vec::new();
        session.execute_line(line, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_remaining_allocation() {
        let mut session = session();
        exec(&mut session, "plan total 100").unwrap();
        exec(&mut session, "plan pay Visa 40").unwrap();
        let output = exec(&mut session, "plan pay amex 40").unwrap();

        assert!(output.contains("Allocated: $80.00"));
        assert!(output.contains("Remaining allocation: $20.00"));
    }

    #[test]
    fn test_over_allocation() {
        let mut session = session();
        exec(&mut session, "plan total 100").unwrap();
        exec(&mut session, "plan pay Visa 70").unwrap();
        let output = exec(&mut session, "plan pay Amex 40").unwrap();

        assert!(output.contains("Over allocated by: $10.00"));
    }

    #[test]
    fn test_amounts_are_clamped() {
        let mut session = session();

        let output = exec(&mut session, "plan total 5000").unwrap();
        assert!(output.starts_with("Money to Debts: $3000.00"));

        let output = exec(&mut session, "plan total -20").unwrap();
        assert!(output.starts_with("Money to Debts: $0.00"));

        let output = exec(&mut session, "plan pay Visa -5").unwrap();
        assert!(output.starts_with("Pay Visa: $0.00"));
    }

    #[test]
    fn test_lowering_income_refits_money_to_debts() {
        let mut session = session();
        exec(&mut session, "plan total 2000").unwrap();
        exec(&mut session, "settings income 500").unwrap();

        let output = exec(&mut session, "plan show").unwrap();
        assert!(output.contains("Money to Debts: $500.00 (0 to $500.00)"));
        assert!(output.contains("Remaining allocation: $450.00"));
        assert_eq!(session.plan_mut().money_to_debts(), Money::from_dollars(500));
    }

    #[test]
    fn test_show_clear_and_reset() {
        let mut session = session();
        let output = exec(&mut session, "plan show").unwrap();
        assert!(output.contains("Money to Debts: $50.00"));
        assert!(output.contains("Remaining allocation: $0.00"));

        exec(&mut session, "plan pay Visa 100").unwrap();
        let output = exec(&mut session, "plan clear Visa").unwrap();
        assert!(output.contains("Pay Visa: $25.00 (minimum)"));
        assert!(output.contains("Remaining allocation: $0.00"));

        exec(&mut session, "plan total 10").unwrap();
        let output = exec(&mut session, "plan reset").unwrap();
        assert!(output.contains("Money to Debts: $50.00"));
    }

    #[test]
    fn test_unknown_debt() {
        let mut session = session();
        assert!(exec(&mut session, "plan pay Nope 10")
            .unwrap_err()
            .is_not_found());
    }
}
