//! Home, spending and audit commands

use std::io::Write;

use crate::display::{format_home, format_spending};
use crate::error::BudgetResult;
use crate::reports::{HomeOverview, SpendingSummary};

use super::session::Session;

/// Print the home overview
pub fn handle_home(session: &Session, out: &mut dyn Write) -> BudgetResult<()> {
    let overview = HomeOverview::generate(
        session.state().data(),
        session.today(),
        session.config().upcoming_count,
    );
    write!(out, "{}", format_home(&overview, session.symbol()))?;
    Ok(())
}

/// Print this month's spending
pub fn handle_spending(session: &Session, out: &mut dyn Write) -> BudgetResult<()> {
    let summary = SpendingSummary::generate(session.state().transactions(), session.today());
    write!(out, "{}", format_spending(&summary, session.symbol()))?;
    Ok(())
}

/// Print the most recent changes made in this session
pub fn handle_audit(session: &Session, limit: usize, out: &mut dyn Write) -> BudgetResult<()> {
    let entries = session.trail().recent(limit);
    if entries.is_empty() {
        writeln!(out, "No changes recorded yet.")?;
        return Ok(());
    }

    for entry in entries {
        writeln!(out, "{}", entry.format_human_readable())?;
    }
    Ok(())
}
