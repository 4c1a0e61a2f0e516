//! Transaction model
//!
//! A single logged expense. Amounts are positive magnitudes; the sign is not
//! constrained by the model.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::ids::TransactionId;
use super::money::Money;

/// A logged expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Local calendar date and time of the expense
    pub date: NaiveDateTime,

    /// Amount spent
    pub amount: Money,

    /// Category label, normally one of the settings categories
    pub category: String,

    /// Optional note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Field values for logging or rewriting an expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseInput {
    pub date: NaiveDateTime,
    pub amount: Money,
    pub category: String,
    pub description: Option<String>,
}

impl ExpenseInput {
    /// Create expense input without a description
    pub fn new(date: NaiveDateTime, amount: Money, category: impl Into<String>) -> Self {
        Self {
            date,
            amount,
            category: category.into(),
            description: None,
        }
    }

    /// Create expense input dated at the start of `date`
    pub fn on(date: NaiveDate, amount: Money, category: impl Into<String>) -> Self {
        Self::new(date.and_time(NaiveTime::MIN), amount, category)
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check the fields the way the entry form does
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }
        Ok(())
    }
}

impl Transaction {
    /// Create a transaction with a freshly generated identifier
    pub fn new(input: ExpenseInput) -> Self {
        Self {
            id: TransactionId::new(),
            date: input.date,
            amount: input.amount,
            category: input.category,
            description: input.description,
        }
    }

    /// Overwrite every field except the identifier
    pub fn apply(&mut self, input: ExpenseInput) {
        self.date = input.date;
        self.amount = input.amount;
        self.category = input.category;
        self.description = input.description;
    }

    /// The current fields as input, for partial edits
    pub fn to_input(&self) -> ExpenseInput {
        ExpenseInput {
            date: self.date,
            amount: self.amount,
            category: self.category.clone(),
            description: self.description.clone(),
        }
    }

    /// Check whether the transaction falls in the same calendar month as `day`
    pub fn is_in_month_of(&self, day: NaiveDate) -> bool {
        self.date.year() == day.year() && self.date.month() == day.month()
    }
}

impl PartialEq for Transaction {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Transaction {}

impl Hash for Transaction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount
        )
    }
}

/// Validation errors for expense input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyCategory,
    NegativeAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "An expense needs a category"),
            Self::NegativeAmount(amount) => {
                write!(f, "Expense amount cannot be negative: {}", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
