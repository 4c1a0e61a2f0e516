//! Debt totals and the upcoming-payments list

use crate::models::{Debt, Money};

/// Number of debts shown under "Upcoming Payments" by default
pub const DEFAULT_UPCOMING_COUNT: usize = 3;

/// Sum of all balances
pub fn total_debt(debts: &[Debt]) -> Money {
    debts.iter().map(|d| d.balance).sum()
}

/// Sum of all minimum payments
pub fn total_minimum_payments(debts: &[Debt]) -> Money {
    debts.iter().map(|d| d.minimum_payment).sum()
}

/// All debts ordered by due day; debts sharing a due day keep insertion order
pub fn debts_by_due_day(debts: &[Debt]) -> Vec<&Debt> {
    let mut sorted: Vec<&Debt> = debts.iter().collect();
    // sort_by_key is stable
    sorted.sort_by_key(|d| d.due_day);
    sorted
}

/// The first `count` debts by due day
pub fn upcoming_debts(debts: &[Debt], count: usize) -> Vec<&Debt> {
    let mut sorted = debts_by_due_day(debts);
    sorted.truncate(count);
    sorted
}
