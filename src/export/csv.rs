//! CSV export for spreadsheets
//!
//! Amounts are written as plain decimals (`2500.00`) without a currency
//! symbol so spreadsheet tools read them as numbers.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Debt, Transaction};

const DEBT_HEADER: [&str; 7] = ["ID", "Name", "Type", "Balance", "APR", "Minimum", "Due Day"];
const TRANSACTION_HEADER: [&str; 5] = ["ID", "Date", "Category", "Description", "Amount"];

fn export_error(e: csv::Error) -> BudgetError {
    BudgetError::Export(e.to_string())
}

/// Write debts in insertion order
pub fn export_debts_csv<W: Write>(debts: &[Debt], writer: W) -> BudgetResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(DEBT_HEADER).map_err(export_error)?;

    for debt in debts {
        wtr.write_record([
            debt.id.to_string(),
            debt.name.clone(),
            debt.debt_type.clone(),
            debt.balance.format_with_symbol(""),
            format!("{:.2}", debt.interest_rate),
            debt.minimum_payment.format_with_symbol(""),
            debt.due_day.to_string(),
        ])
        .map_err(export_error)?;
    }

    wtr.flush().map_err(|e| BudgetError::Export(e.to_string()))
}

/// Write transactions in insertion order
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> BudgetResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(TRANSACTION_HEADER).map_err(export_error)?;

    for txn in transactions {
        wtr.write_record([
            txn.id.to_string(),
            txn.date.format("%Y-%m-%d").to_string(),
            txn.category.clone(),
            txn.description.clone().unwrap_or_default(),
            txn.amount.format_with_symbol(""),
        ])
        .map_err(export_error)?;
    }

    wtr.flush().map_err(|e| BudgetError::Export(e.to_string()))
}
