//! Category commands
//!
//! Names are matched case-insensitively against the configured categories.
//! New names must be non-empty and not already in the list.

use std::io::Write;

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::{BudgetError, BudgetResult};

use super::session::Session;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories
    List,

    /// Add a category
    Add {
        /// Category name
        name: String,
    },

    /// Rename a category
    Rename {
        /// Current name
        old: String,
        /// New name
        new: String,
    },

    /// Remove a category
    #[command(alias = "delete")]
    Remove {
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(
    session: &mut Session,
    cmd: CategoryCommands,
    out: &mut dyn Write,
) -> BudgetResult<()> {
    match cmd {
        CategoryCommands::List => {
            write!(out, "{}", format_category_list(session.state().settings()))?;
        }

        CategoryCommands::Add { name } => {
            let name = new_name(session, &name)?;
            session.state_mut().add_category(name.clone());
            writeln!(out, "Added category: {}", name)?;
        }

        CategoryCommands::Rename { old, new } => {
            let old = existing_name(session, &old)?;
            let new = new_name(session, &new)?;
            session.state_mut().rename_category(&old, new.clone())?;
            writeln!(out, "Renamed category: {} -> {}", old, new)?;
        }

        CategoryCommands::Remove { name } => {
            let name = existing_name(session, &name)?;
            session.state_mut().remove_category(&name)?;
            writeln!(out, "Removed category: {}", name)?;
        }
    }

    Ok(())
}

/// The configured spelling of `name`
fn existing_name(session: &Session, name: &str) -> BudgetResult<String> {
    let wanted = name.trim();
    session
        .state()
        .settings()
        .categories
        .iter()
        .find(|c| c.eq_ignore_ascii_case(wanted))
        .cloned()
        .ok_or_else(|| BudgetError::category_not_found(wanted))
}

/// A trimmed name that isn't empty or taken
fn new_name(session: &Session, name: &str) -> BudgetResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(BudgetError::Validation("Category name cannot be empty".into()));
    }
    if existing_name(session, name).is_ok() {
        return Err(BudgetError::Validation(format!(
            "Category '{}' already exists",
            name
        )));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::models::{ExpenseInput, Money};
    use crate::store::AppState;
    use chrono::NaiveDate;

    fn session() -> Session {
        Session::new(
            AppState::new(),
            AppConfig::default(),
            NaiveDate::from_ymd_opt(2025, 11, 20).unwrap(),
        )
    }

    fn exec(session: &mut Session, line: &str) -> BudgetResult<String> {
        let mut out = Vec::new();
        session.execute_line(line, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn categories(session: &Session) -> Vec<String> {
        session.state().settings().categories.clone()
    }

    #[test]
    fn test_add_category() {
        let mut session = session();
        exec(&mut session, r#"category add "Health Care""#).unwrap();
        assert_eq!(categories(&session).last().unwrap(), "Health Care");

        let err = exec(&mut session, "category add food").unwrap_err();
        assert!(err.is_validation());
        let err = exec(&mut session, r#"category add " ""#).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(categories(&session).len(), 6);
    }

    #[test]
    fn test_rename_keeps_logged_expenses() {
        let mut session = session();
        let date = NaiveDate::from_ymd_opt(2025, 11, 2).unwrap();
        session
            .state_mut()
            .log_expense(ExpenseInput::on(date, Money::from_dollars(9), "Food"));

        let output = exec(&mut session, "category rename food Groceries").unwrap();
        assert_eq!(output, "Renamed category: Food -> Groceries\n");
        assert_eq!(categories(&session)[1], "Groceries");
        assert_eq!(session.state().transactions()[0].category, "Food");
    }

    #[test]
    fn test_remove_category() {
        let mut session = session();
        exec(&mut session, "category remove Other").unwrap();
        assert!(!categories(&session).contains(&"Other".to_string()));

        let err = exec(&mut session, "category remove Other").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_list() {
        let mut session = session();
        let output = exec(&mut session, "category list").unwrap();
        assert!(output.starts_with("  1. Rent\n  2. Food\n"));
    }
}
