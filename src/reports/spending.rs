//! Spending analysis
//!
//! Month filtering, per-category totals and the top spending category.
//! "This month" is the calendar month of the `today` passed in, compared on
//! (year, month) so December of last year never leaks into January.

use chrono::NaiveDate;

use crate::models::{Money, Transaction};

/// Amount spent in one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
    pub transaction_count: usize,
}

/// Transactions dated in the same calendar month as `today`
pub fn current_month_transactions(
    transactions: &[Transaction],
    today: NaiveDate,
) -> Vec<&Transaction> {
    transactions
        .iter()
        .filter(|t| t.is_in_month_of(today))
        .collect()
}

/// Sum of the given transactions' amounts
pub fn total_spent<'a, I>(transactions: I) -> Money
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions.into_iter().map(|t| t.amount).sum()
}

/// Sum of this month's amounts
pub fn total_spent_this_month(transactions: &[Transaction], today: NaiveDate) -> Money {
    total_spent(current_month_transactions(transactions, today))
}

/// Per-category totals, in order of each category's first appearance
pub fn spending_by_category<'a, I>(transactions: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for txn in transactions {
        match totals.iter_mut().find(|c| c.category == txn.category) {
            Some(entry) => {
                entry.total += txn.amount;
                entry.transaction_count += 1;
            }
            None => totals.push(CategoryTotal {
                category: txn.category.clone(),
                total: txn.amount,
                transaction_count: 1,
            }),
        }
    }
    totals
}

/// The category with the largest total this month
///
/// On a tie the category that appeared first this month wins. Returns `None`
/// when nothing was spent this month.
pub fn top_spending_category(
    transactions: &[Transaction],
    today: NaiveDate,
) -> Option<CategoryTotal> {
    let mut top: Option<CategoryTotal> = None;
    for entry in spending_by_category(current_month_transactions(transactions, today)) {
        let replace = top
            .as_ref()
            .map_or(true, |current| entry.total > current.total);
        if replace {
            top = Some(entry);
        }
    }
    top
}

/// Figures behind the spending screen
#[derive(Debug, Clone)]
pub struct SpendingSummary {
    /// The day "this month" is taken from
    pub today: NaiveDate,
    /// Every logged transaction
    pub total_all_time: Money,
    pub total_this_month: Money,
    pub transactions_this_month: usize,
    /// This month's spending per category, largest first; ties keep
    /// first-appearance order
    pub categories: Vec<CategoryTotal>,
}

impl SpendingSummary {
    pub fn generate(transactions: &[Transaction], today: NaiveDate) -> Self {
        let this_month = current_month_transactions(transactions, today);
        let mut categories = spending_by_category(this_month.iter().copied());
        categories.sort_by(|a, b| b.total.cmp(&a.total));

        Self {
            today,
            total_all_time: total_spent(transactions),
            total_this_month: total_spent(this_month.iter().copied()),
            transactions_this_month: this_month.len(),
            categories,
        }
    }

    /// Share of this month's spending that went to `entry`, in percent
    pub fn percentage(&self, entry: &CategoryTotal) -> f64 {
        if self.total_this_month.is_zero() {
            0.0
        } else {
            entry.total.cents() as f64 / self.total_this_month.cents() as f64 * 100.0
        }
    }
}
