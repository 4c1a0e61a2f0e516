//! Report formatting for terminal output
//!
//! Renders the home overview and the spending summary, plus a few helpers
//! shared by the other screens.

use crate::models::Money;
use crate::reports::{HomeOverview, SpendingSummary};

use super::debt::format_debt_summary_line;

const REPORT_WIDTH: usize = 50;
const BAR_WIDTH: usize = 20;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct > 0.0 && pct < 0.1 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate to `max_len` characters, ending in an ellipsis when cut
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

fn heading(output: &mut String, title: &str) {
    output.push('\n');
    output.push_str(title);
    output.push('\n');
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');
}

fn labeled(output: &mut String, label: &str, amount: Money, symbol: &str) {
    output.push_str(&format!(
        "  {:<18}{:>14}\n",
        format!("{}:", label),
        amount.format_with_symbol(symbol)
    ));
}

/// Format the home screen
pub fn format_home(overview: &HomeOverview, symbol: &str) -> String {
    let mut output = format!("Home ({})\n", overview.today.format("%Y-%m-%d"));

    heading(&mut output, "Overview");
    labeled(&mut output, "Total Debt", overview.total_debt, symbol);
    labeled(&mut output, "Monthly Income", overview.monthly_income, symbol);
    labeled(
        &mut output,
        "Min Payments",
        overview.total_minimum_payments,
        symbol,
    );

    if !overview.upcoming.is_empty() {
        heading(&mut output, "Upcoming Payments");
        for debt in &overview.upcoming {
            output.push_str(&format!(
                "  {:<20} Due day: {:<3} {:>12}\n",
                truncate(&debt.name, 20),
                debt.due_day,
                debt.minimum_payment.format_with_symbol(symbol)
            ));
        }
    }

    heading(&mut output, "Spending This Month");
    output.push_str(&format!(
        "  Total: {}\n",
        overview.spent_this_month.format_with_symbol(symbol)
    ));
    match &overview.top_category {
        Some(top) => output.push_str(&format!(
            "  Top category: {} ({})\n",
            top.category,
            top.total.format_with_symbol(symbol)
        )),
        None => output.push_str("  No spending logged yet.\n"),
    }

    heading(&mut output, "Your Debts");
    if overview.debts.is_empty() {
        output.push_str("  No debts added yet. Use `debt add` to get started.\n");
    } else {
        for debt in &overview.debts {
            output.push_str(&format!("  {}\n", format_debt_summary_line(debt, symbol)));
        }
    }

    output
}

/// Format the spending screen's totals and category breakdown
pub fn format_spending(summary: &SpendingSummary, symbol: &str) -> String {
    let mut output = format!("Spending ({})\n", summary.today.format("%B %Y"));

    heading(&mut output, "Overview");
    labeled(&mut output, "Total Expenses", summary.total_all_time, symbol);
    labeled(&mut output, "This Month", summary.total_this_month, symbol);
    output.push_str(&format!(
        "  {:<18}{:>14}\n",
        "Transactions:", summary.transactions_this_month
    ));

    heading(&mut output, "By Category");
    if summary.categories.is_empty() {
        output.push_str("  No spending logged yet.\n");
        return output;
    }

    let max = summary
        .categories
        .first()
        .map(|c| c.total.as_f64())
        .unwrap_or(0.0);
    for entry in &summary.categories {
        output.push_str(&format!(
            "  {:<16} {:>12} {:>5} {}\n",
            truncate(&entry.category, 16),
            entry.total.format_with_symbol(symbol),
            format_percentage(summary.percentage(entry)),
            format_bar(entry.total.as_f64(), max, BAR_WIDTH)
        ));
    }

    output
}
