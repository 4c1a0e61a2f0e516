//! Derived views for budget-cli
//!
//! Pure functions over the store's data: debt totals, the upcoming
//! payments list, monthly spending, and the debt payment allocation plan.
//! Nothing here is cached; every call recomputes from the data passed in.

pub mod allocation;
pub mod debts;
pub mod overview;
pub mod spending;

pub use allocation::{AllocationPlan, AllocationRow, AllocationStatus};
pub use debts::{
    debts_by_due_day, total_debt, total_minimum_payments, upcoming_debts, DEFAULT_UPCOMING_COUNT,
};
pub use overview::HomeOverview;
pub use spending::{
    current_month_transactions, spending_by_category, top_spending_category, total_spent,
    total_spent_this_month, CategoryTotal, SpendingSummary,
};
