//! Line-oriented command session
//!
//! A session owns one store for the lifetime of the process. Each input line
//! is split into words, parsed with clap and dispatched to the matching
//! handler. Command errors are printed and the session carries on; only a
//! failure to write output ends it early.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::audit::AuditTrail;
use crate::config::AppConfig;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Debt, Money, Transaction};
use crate::reports::AllocationPlan;
use crate::store::AppState;

use super::category::{handle_category_command, CategoryCommands};
use super::debt::{handle_debt_command, DebtCommands};
use super::expense::{handle_expense_command, ExpenseCommands};
use super::export::{handle_export_command, ExportCommands};
use super::plan::{handle_plan_command, PlanCommands};
use super::report::{handle_audit, handle_home, handle_spending};
use super::settings::{handle_settings_command, SettingsCommands};

#[derive(Parser)]
#[command(name = "budget", no_binary_name = true, disable_version_flag = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

/// Commands accepted inside a session
#[derive(Subcommand)]
pub enum SessionCommand {
    /// Debt management
    #[command(subcommand)]
    Debt(DebtCommands),

    /// Expense logging
    #[command(subcommand, alias = "txn")]
    Expense(ExpenseCommands),

    /// Expense categories
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Monthly income and categories
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Debt payment plan
    #[command(subcommand)]
    Plan(PlanCommands),

    /// Show the home overview
    Home,

    /// Show this month's spending
    Spending,

    /// Export the session
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show changes made in this session
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Whether the session keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One running session
pub struct Session {
    state: AppState,
    plan: Option<AllocationPlan>,
    config: AppConfig,
    today: NaiveDate,
    trail: AuditTrail,
}

impl Session {
    /// Start a session over `state`, recording every change in the audit trail
    pub fn new(mut state: AppState, config: AppConfig, today: NaiveDate) -> Self {
        let trail = AuditTrail::new();
        trail.attach(&mut state);

        Self {
            state,
            plan: None,
            config,
            today,
            trail,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn trail(&self) -> &AuditTrail {
        &self.trail
    }

    /// Currency symbol from the preferences
    pub fn symbol(&self) -> &str {
        &self.config.currency_symbol
    }

    /// The payment plan, built from the current debts on first use and kept
    /// within the current monthly income
    pub fn plan_mut(&mut self) -> &mut AllocationPlan {
        let income = self.state.settings().monthly_income;
        let plan = self
            .plan
            .get_or_insert_with(|| AllocationPlan::for_state(self.state.data()));
        plan.fit_to_income(income);
        plan
    }

    /// Throw away plan edits; the next plan command starts over
    pub fn reset_plan(&mut self) {
        self.plan = None;
    }

    /// Look up a debt by id or name
    pub fn resolve_debt(&self, identifier: &str) -> BudgetResult<Debt> {
        self.state
            .find_debt(identifier)
            .cloned()
            .ok_or_else(|| BudgetError::debt_not_found(identifier))
    }

    /// Look up a transaction by id
    pub fn resolve_transaction(&self, identifier: &str) -> BudgetResult<Transaction> {
        self.state
            .find_transaction(identifier)
            .cloned()
            .ok_or_else(|| BudgetError::transaction_not_found(identifier))
    }

    /// Read commands until end of input or `quit`
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> BudgetResult<()> {
        for line in input.lines() {
            let line = line?;
            match self.execute_line(&line, out) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(BudgetError::Io(e)) => return Err(BudgetError::Io(e)),
                Err(e) => writeln!(out, "Error: {}", e)?,
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Run a single command line
    pub fn execute_line(&mut self, line: &str, out: &mut dyn Write) -> BudgetResult<Flow> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let words = split_words(trimmed)?;
        let parsed = match SessionLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(err) => {
                // Covers `help` and `--help` as well as real usage errors
                write!(out, "{}", err.render())?;
                return Ok(Flow::Continue);
            }
        };

        self.execute(parsed.command, out)
    }

    /// Run an already parsed command
    pub fn execute(&mut self, command: SessionCommand, out: &mut dyn Write) -> BudgetResult<Flow> {
        match command {
            SessionCommand::Debt(cmd) => handle_debt_command(self, cmd, out)?,
            SessionCommand::Expense(cmd) => handle_expense_command(self, cmd, out)?,
            SessionCommand::Category(cmd) => handle_category_command(self, cmd, out)?,
            SessionCommand::Settings(cmd) => handle_settings_command(self, cmd, out)?,
            SessionCommand::Plan(cmd) => handle_plan_command(self, cmd, out)?,
            SessionCommand::Home => handle_home(self, out)?,
            SessionCommand::Spending => handle_spending(self, out)?,
            SessionCommand::Export(cmd) => handle_export_command(self, cmd, out)?,
            SessionCommand::Audit { limit } => handle_audit(self, limit, out)?,
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

/// Split a command line on whitespace; double quotes group words
pub fn split_words(line: &str) -> BudgetResult<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                in_word = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if in_quotes {
        return Err(BudgetError::Command("Unterminated quote".into()));
    }
    if in_word {
        words.push(current);
    }

    Ok(words)
}

/// Parse a user-entered amount
pub fn parse_money(s: &str) -> BudgetResult<Money> {
    Money::parse(s).map_err(|e| BudgetError::Validation(e.to_string()))
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> BudgetResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| BudgetError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SettingsUpdate;

    fn session() -> Session {
        let mut state = AppState::new();
        state.update_settings(SettingsUpdate::new().monthly_income(Money::from_dollars(3000)));
        Session::new(
            state,
            AppConfig::default(),
            NaiveDate::from_ymd_opt(2025, 11, 20).unwrap(),
        )
    }

    fn run(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        session.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_split_words() {
        assert_eq!(
            split_words(r#"debt add "Visa Card" --balance 2500"#).unwrap(),
            vec!["debt", "add", "Visa Card", "--balance", "2500"]
        );
        assert_eq!(split_words("  home  ").unwrap(), vec!["home"]);
        assert_eq!(split_words(r#"expense log 5 Food -n """#).unwrap().len(), 6);
        assert!(split_words(r#"debt add "Visa"#).is_err());
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_money("$12.50").unwrap(), Money::from_cents(1250));
        assert!(matches!(parse_money("abc"), Err(BudgetError::Validation(_))));
        assert_eq!(
            parse_date("2025-01-31").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
        );
        assert!(parse_date("31/01/2025").is_err());
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let mut session = session();
        let output = run(&mut session, "\n# nothing here\n   \n");
        assert!(output.is_empty());
        assert!(session.trail().is_empty());
    }

    #[test]
    fn test_errors_do_not_end_the_session() {
        let mut session = session();
        let output = run(
            &mut session,
            "debt remove Nope\ndebt add Visa --balance 100 --apr 10 --minimum 25 --due-day 15\n",
        );

        assert!(output.contains("Error: Debt not found: Nope"));
        assert!(output.contains("Added debt: Visa"));
        assert_eq!(session.state().debts().len(), 1);
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut session = session();
        run(
            &mut session,
            "quit\ndebt add Visa --balance 100 --apr 10 --minimum 25 --due-day 15\n",
        );
        assert!(session.state().debts().is_empty());
    }

    #[test]
    fn test_unknown_command_prints_usage() {
        let mut session = session();
        let output = run(&mut session, "frobnicate\n");
        assert!(output.contains("frobnicate"));
        assert!(!output.contains("Error: "));
    }

    #[test]
    fn test_plan_is_built_lazily_and_reset() {
        let mut session = session();
        run(
            &mut session,
            "debt add Visa --balance 100 --apr 10 --minimum 25 --due-day 15\n",
        );
        assert_eq!(session.plan_mut().money_to_debts(), Money::from_dollars(25));

        session.plan_mut().set_money_to_debts(Money::from_dollars(80), Money::from_dollars(3000));
        session.reset_plan();
        assert_eq!(session.plan_mut().money_to_debts(), Money::from_dollars(25));
    }
}
