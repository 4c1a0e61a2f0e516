//! Debt display formatting
//!
//! Formats debts for terminal output in table and detail views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Debt;
use crate::reports::total_debt;

#[derive(Tabled)]
struct DebtRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    debt_type: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "APR")]
    apr: String,
    #[tabled(rename = "Minimum")]
    minimum: String,
    #[tabled(rename = "Due Day")]
    due_day: i32,
}

impl DebtRow {
    fn new(debt: &Debt, symbol: &str) -> Self {
        Self {
            id: debt.id.to_string(),
            name: debt.name.clone(),
            debt_type: debt.debt_type.clone(),
            balance: debt.balance.format_with_symbol(symbol),
            apr: format_apr(debt.interest_rate),
            minimum: debt.minimum_payment.format_with_symbol(symbol),
            due_day: debt.due_day,
        }
    }
}

/// Interest rate as shown to the user, e.g. `19.99%`
pub fn format_apr(rate: f64) -> String {
    format!("{:.2}%", rate)
}

/// Format debts as a table followed by the total balance
pub fn format_debt_list(debts: &[Debt], symbol: &str) -> String {
    if debts.is_empty() {
        return "No debts added yet. Use `debt add` to get started.\n".to_string();
    }

    let rows: Vec<DebtRow> = debts.iter().map(|d| DebtRow::new(d, symbol)).collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());

    format!(
        "{}\nTotal Debt: {}\n",
        table,
        total_debt(debts).format_with_symbol(symbol)
    )
}

/// Format a single debt's details
pub fn format_debt_details(debt: &Debt, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Debt: {}\n", debt.name));
    output.push_str(&format!("  ID:              {}\n", debt.id));
    output.push_str(&format!("  Type:            {}\n", debt.debt_type));
    output.push_str(&format!(
        "  Balance:         {}\n",
        debt.balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  APR:             {}\n",
        format_apr(debt.interest_rate)
    ));
    output.push_str(&format!(
        "  Minimum Payment: {}\n",
        debt.minimum_payment.format_with_symbol(symbol)
    ));
    output.push_str(&format!("  Due Day:         {}\n", debt.due_day));

    output
}

/// One line per debt, used by the home screen's "Your Debts" section
pub fn format_debt_summary_line(debt: &Debt, symbol: &str) -> String {
    format!(
        "{}  Balance: {}  Min: {} • APR: {}",
        debt.name,
        debt.balance.format_with_symbol(symbol),
        debt.minimum_payment.format_with_symbol(symbol),
        format_apr(debt.interest_rate)
    )
}

/// Short confirmation after a debt is saved
pub fn format_debt_saved(verb: &str, debt: &Debt, symbol: &str) -> String {
    format!(
        "{} debt: {} ({}) balance {}, due day {}\n",
        verb,
        debt.name,
        debt.id,
        debt.balance.format_with_symbol(symbol),
        debt.due_day
    )
}
