//! Transaction display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Transaction;
use crate::reports::total_spent;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format transactions as a table, in the order given
pub fn format_transaction_list(
    transactions: &[&Transaction],
    date_format: &str,
    symbol: &str,
) -> String {
    if transactions.is_empty() {
        return "No expenses logged yet.\n".to_string();
    }

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|txn| TransactionRow {
            id: txn.id.to_string(),
            date: txn.date.format(date_format).to_string(),
            category: txn.category.clone(),
            description: txn.description.clone().unwrap_or_default(),
            amount: txn.amount.format_with_symbol(symbol),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());

    format!(
        "{}\nTotal: {}\n",
        table,
        total_spent(transactions.iter().copied()).format_with_symbol(symbol)
    )
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, date_format: &str, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format(date_format)));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(symbol)
    ));
    if let Some(description) = &txn.description {
        output.push_str(&format!("Description: {}\n", description));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseInput, Money};
    use chrono::NaiveDate;

    fn groceries() -> Transaction {
        let date = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
        Transaction::new(
            ExpenseInput::on(date, Money::from_dollars_cents(45, 20), "Food")
                .with_description("Groceries"),
        )
    }

    #[test]
    fn test_format_transaction_list() {
        let txn = groceries();
        let rent = Transaction::new(ExpenseInput::on(
            NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
            Money::from_dollars(1200),
            "Rent",
        ));

        let output = format_transaction_list(&[&txn, &rent], "%d/%m/%Y", "$");
        assert!(output.contains("03/11/2025"));
        assert!(output.contains("Groceries"));
        assert!(output.contains("$45.20"));
        assert!(output.contains("Total: $1245.20"));
    }

    #[test]
    fn test_format_empty_list() {
        assert!(format_transaction_list(&[], "%Y-%m-%d", "$").contains("No expenses"));
    }

    #[test]
    fn test_format_transaction_details() {
        let output = format_transaction_details(&groceries(), "%Y-%m-%d", "$");
        assert!(output.contains("Date:        2025-11-03"));
        assert!(output.contains("Category:    Food"));
        assert!(output.contains("Description: Groceries"));
    }
}
