//! Home overview
//!
//! The summary shown on the home screen: debt totals, income, the next
//! payments coming due and how this month's spending is going.

use chrono::NaiveDate;

use crate::models::{Debt, Money};
use crate::store::BudgetData;

use super::debts::{total_debt, total_minimum_payments, upcoming_debts};
use super::spending::{top_spending_category, total_spent_this_month, CategoryTotal};

/// Home screen figures
#[derive(Debug, Clone)]
pub struct HomeOverview {
    pub today: NaiveDate,
    pub total_debt: Money,
    pub monthly_income: Money,
    pub total_minimum_payments: Money,
    /// Next debts by due day
    pub upcoming: Vec<Debt>,
    pub spent_this_month: Money,
    /// `None` when nothing was logged this month
    pub top_category: Option<CategoryTotal>,
    /// All debts in insertion order
    pub debts: Vec<Debt>,
}

impl HomeOverview {
    pub fn generate(data: &BudgetData, today: NaiveDate, upcoming_count: usize) -> Self {
        let debts = data.debts();
        let transactions = data.transactions();

        Self {
            today,
            total_debt: total_debt(debts),
            monthly_income: data.settings().monthly_income,
            total_minimum_payments: total_minimum_payments(debts),
            upcoming: upcoming_debts(debts, upcoming_count)
                .into_iter()
                .cloned()
                .collect(),
            spent_this_month: total_spent_this_month(transactions, today),
            top_category: top_spending_category(transactions, today),
            debts: debts.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DebtInput, ExpenseInput, SettingsUpdate};
    use crate::store::AppState;

    #[test]
    fn test_overview() {
        let today = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
        let mut state = AppState::new();
        state.update_settings(SettingsUpdate::new().monthly_income(Money::from_dollars(3200)));
        for (name, balance, minimum, due) in [
            ("Visa Card", 2500, 75, 15),
            ("Student Loan", 12000, 150, 1),
            ("MasterCard", 800, 45, 27),
            ("Car Loan", 9000, 300, 20),
        ] {
            state.add_debt(DebtInput::new(
                name,
                Money::from_dollars(balance),
                10.0,
                Money::from_dollars(minimum),
                due,
            ));
        }
        state.log_expense(ExpenseInput::on(today, Money::from_cents(4520), "Food"));
        state.log_expense(ExpenseInput::on(today, Money::from_dollars(1200), "Rent"));
        state.log_expense(ExpenseInput::on(
            NaiveDate::from_ymd_opt(2025, 10, 30).unwrap(),
            Money::from_dollars(5000),
            "Other",
        ));

        let overview = HomeOverview::generate(state.data(), today, 3);

        assert_eq!(overview.total_debt, Money::from_dollars(24300));
        assert_eq!(overview.monthly_income, Money::from_dollars(3200));
        assert_eq!(overview.total_minimum_payments, Money::from_dollars(570));
        let upcoming: Vec<&str> = overview.upcoming.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(upcoming, vec!["Student Loan", "Visa Card", "Car Loan"]);
        assert_eq!(overview.spent_this_month, Money::from_cents(124520));
        assert_eq!(overview.top_category.unwrap().category, "Rent");
        assert_eq!(overview.debts.len(), 4);
    }

    #[test]
    fn test_empty_overview() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let state = AppState::new();
        let overview = HomeOverview::generate(state.data(), today, 3);

        assert!(overview.total_debt.is_zero());
        assert!(overview.upcoming.is_empty());
        assert!(overview.top_category.is_none());
    }
}
