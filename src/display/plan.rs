//! Payment plan formatting

use crate::models::{Debt, Money};
use crate::reports::{total_debt, total_minimum_payments, AllocationPlan};

use super::report::{separator, truncate};

/// Format the plan screen for the given debts and income
pub fn format_plan(
    plan: &AllocationPlan,
    debts: &[Debt],
    monthly_income: Money,
    symbol: &str,
) -> String {
    let mut output = String::from("Plan\n");
    output.push_str(&separator(60));
    output.push('\n');
    output.push_str(&format!(
        "Total Debt: {}   Monthly Income: {}   Min Payments: {}\n",
        total_debt(debts).format_with_symbol(symbol),
        monthly_income.format_with_symbol(symbol),
        total_minimum_payments(debts).format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Money to Debts: {} (0 to {})\n\n",
        plan.money_to_debts().format_with_symbol(symbol),
        monthly_income.format_with_symbol(symbol)
    ));

    if debts.is_empty() {
        output.push_str("No debts added yet. Use `debt add` to get started.\n");
        return output;
    }

    output.push_str(&format!(
        "{:<20} {:<12} {:>7} {:>12} {:>12}\n",
        "Debt", "Type", "Due Day", "Balance", "Pay"
    ));
    for row in plan.rows(debts) {
        let marker = if row.overridden { "" } else { " (min)" };
        output.push_str(&format!(
            "{:<20} {:<12} {:>7} {:>12} {:>12}{}\n",
            truncate(&row.debt.name, 20),
            truncate(&row.debt.debt_type, 12),
            row.debt.due_day,
            row.debt.balance.format_with_symbol(symbol),
            row.payment.format_with_symbol(symbol),
            marker
        ));
    }

    output.push('\n');
    output.push_str(&format_plan_totals(plan, debts, symbol));
    output
}

/// The allocated total and the remaining/over-allocated status line
pub fn format_plan_totals(plan: &AllocationPlan, debts: &[Debt], symbol: &str) -> String {
    format!(
        "Allocated: {}\n{}\n",
        plan.total_planned(debts).format_with_symbol(symbol),
        plan.status(debts).label(symbol)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DebtInput, SettingsUpdate};
    use crate::store::AppState;

    #[test]
    fn test_format_plan() {
        let mut state = AppState::new();
        state.update_settings(SettingsUpdate::new().monthly_income(Money::from_dollars(3000)));
        let visa = state.add_debt(DebtInput::new(
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

        let mut plan = AllocationPlan::for_state(state.data());
        plan.set_payment(visa.id, Money::from_dollars(100));
        let output = format_plan(&plan, state.debts(), Money::from_dollars(3000), "$");

        assert!(output.contains("Money to Debts: $225.00 (0 to $3000.00)"));
        assert!(output.contains("Allocated: $250.00"));
        assert!(output.contains("Over allocated by: $25.00"));
        let loan = output.find("Student Loan").unwrap();
        let card = output.find("Visa Card").unwrap();
        assert!(loan < card);
    }

    #[test]
    fn test_format_plan_without_debts() {
        let plan = AllocationPlan::new();
        let output = format_plan(&plan, &[], Money::zero(), "$");
        assert!(output.contains("No debts added yet"));
    }
}
