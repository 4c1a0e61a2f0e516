//! Demo command
//!
//! Builds a small sample session and prints the home, plan and spending
//! views for it. Nothing is written to disk.

use std::io::Write;

use chrono::{Datelike, NaiveDate};

use crate::config::AppConfig;
use crate::error::BudgetResult;
use crate::models::{DebtInput, ExpenseInput, Money, SettingsUpdate};
use crate::store::AppState;

use super::plan::PlanCommands;
use super::session::{Session, SessionCommand};

/// A store with three debts, three expenses this month and an income
pub fn sample_state(config: &AppConfig, today: NaiveDate) -> AppState {
    let mut state = AppState::with_data(Vec::new(), Vec::new(), config.initial_settings());

    state.update_settings(SettingsUpdate::new().monthly_income(Money::from_dollars(3200)));

    state.add_debt(DebtInput::new(
        "Visa Card",
        Money::from_dollars(2500),
        19.99,
        Money::from_dollars(75),
        15,
    ));
    state.add_debt(
        DebtInput::new(
            "Student Loan",
            Money::from_dollars(12000),
            4.5,
            Money::from_dollars(150),
            1,
        )
        .with_type("Loan"),
    );
    state.add_debt(DebtInput::new(
        "MasterCard",
        Money::from_dollars(800),
        22.99,
        Money::from_dollars(45),
        27,
    ));

    let day = |d: u32| today.with_day(d.min(today.day())).unwrap_or(today);
    state.log_expense(
        ExpenseInput::on(day(1), Money::from_dollars(1200), "Rent").with_description("Monthly rent"),
    );
    state.log_expense(
        ExpenseInput::on(day(3), Money::from_dollars_cents(45, 20), "Food")
            .with_description("Groceries"),
    );
    state.log_expense(
        ExpenseInput::on(day(7), Money::from_dollars_cents(18, 50), "Entertainment")
            .with_description("Movie night"),
    );

    state
}

/// Print the sample session's views
pub fn run_demo(config: AppConfig, today: NaiveDate, out: &mut dyn Write) -> BudgetResult<()> {
    let state = sample_state(&config, today);
    let mut session = Session::new(state, config, today);

    session.execute(SessionCommand::Home, out)?;
    writeln!(out)?;
    session.execute(SessionCommand::Plan(PlanCommands::Show), out)?;
    writeln!(out)?;
    session.execute(SessionCommand::Spending, out)?;
    Ok(())
}
