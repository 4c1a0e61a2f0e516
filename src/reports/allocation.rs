//! Debt payment allocation
//!
//! The plan screen splits a chosen monthly amount across debts. The plan is
//! view state, not store state: it only remembers the amount put toward
//! debts and any payments the user overrode. Every figure is recomputed from
//! the debts passed in, so a debt added after the plan was built simply
//! shows its minimum payment, and a removed debt drops out of the totals.

use std::collections::HashMap;
use std::fmt;

use crate::models::{Debt, DebtId, Money};
use crate::store::BudgetData;

use super::debts::{debts_by_due_day, total_minimum_payments};

/// Whether the planned payments fit the money put toward debts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationStatus {
    /// Money left to allocate (zero counts as remaining)
    Remaining(Money),
    /// Payments exceed the money to debts by this much
    OverAllocated(Money),
}

impl AllocationStatus {
    /// Classify `money_to_debts - total_planned`
    pub fn from_remaining(remaining: Money) -> Self {
        if remaining.is_negative() {
            Self::OverAllocated(remaining.abs())
        } else {
            Self::Remaining(remaining)
        }
    }

    pub fn is_over_allocated(&self) -> bool {
        matches!(self, Self::OverAllocated(_))
    }

    /// Display label using the given currency symbol
    pub fn label(&self, symbol: &str) -> String {
        match self {
            Self::Remaining(amount) => {
                format!("Remaining allocation: {}", amount.format_with_symbol(symbol))
            }
            Self::OverAllocated(amount) => {
                format!("Over allocated by: {}", amount.format_with_symbol(symbol))
            }
        }
    }
}

impl fmt::Display for AllocationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label("$"))
    }
}

/// One debt's line in the plan
#[derive(Debug, Clone)]
pub struct AllocationRow<'a> {
    pub debt: &'a Debt,
    pub payment: Money,
    /// True when the payment was set explicitly rather than defaulted
    pub overridden: bool,
}

/// A monthly split of money across debts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllocationPlan {
    money_to_debts: Money,
    payments: HashMap<DebtId, Money>,
}

impl AllocationPlan {
    /// An empty plan: nothing put toward debts, every payment at its minimum
    pub fn new() -> Self {
        Self::default()
    }

    /// The plan as first shown for `data`
    ///
    /// Money to debts starts at the total of minimum payments, capped at the
    /// monthly income, and every debt pays its minimum.
    pub fn for_state(data: &BudgetData) -> Self {
        let mut plan = Self::new();
        plan.set_money_to_debts(
            total_minimum_payments(data.debts()),
            data.settings().monthly_income,
        );
        plan
    }

    pub fn money_to_debts(&self) -> Money {
        self.money_to_debts
    }

    /// Set the money put toward debts, clamped to `[0, monthly_income]`
    ///
    /// Returns the value actually stored.
    pub fn set_money_to_debts(&mut self, amount: Money, monthly_income: Money) -> Money {
        self.money_to_debts = amount.clamp_to(monthly_income);
        self.money_to_debts
    }

    /// Pull money to debts back into `[0, monthly_income]`
    ///
    /// Needed when the income drops below an amount chosen earlier.
    pub fn fit_to_income(&mut self, monthly_income: Money) {
        self.money_to_debts = self.money_to_debts.clamp_to(monthly_income);
    }

    /// Set one debt's planned payment; negative amounts become zero
    pub fn set_payment(&mut self, debt: DebtId, amount: Money) -> Money {
        let amount = amount.non_negative();
        self.payments.insert(debt, amount);
        amount
    }

    /// Forget an override so the debt falls back to its minimum payment
    pub fn clear_payment(&mut self, debt: DebtId) -> bool {
        self.payments.remove(&debt).is_some()
    }

    /// Planned payment for `debt`, defaulting to its minimum payment
    pub fn payment_for(&self, debt: &Debt) -> Money {
        self.payments
            .get(&debt.id)
            .copied()
            .unwrap_or(debt.minimum_payment)
    }

    /// Sum of planned payments over `debts`
    pub fn total_planned(&self, debts: &[Debt]) -> Money {
        debts.iter().map(|d| self.payment_for(d)).sum()
    }

    /// Money to debts minus the planned payments; negative when over
    pub fn remaining(&self, debts: &[Debt]) -> Money {
        self.money_to_debts - self.total_planned(debts)
    }

    pub fn status(&self, debts: &[Debt]) -> AllocationStatus {
        AllocationStatus::from_remaining(self.remaining(debts))
    }

    /// Plan lines ordered by due day
    pub fn rows<'a>(&self, debts: &'a [Debt]) -> Vec<AllocationRow<'a>> {
        debts_by_due_day(debts)
            .into_iter()
            .map(|debt| AllocationRow {
                debt,
                payment: self.payment_for(debt),
                overridden: self.payments.contains_key(&debt.id),
            })
            .collect()
    }
}
