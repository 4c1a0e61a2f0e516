//! User settings model
//!
//! Monthly income and the ordered list of expense categories. There is one
//! instance per session, owned by the store.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Categories offered to a fresh session
pub const DEFAULT_CATEGORIES: [&str; 5] = [
    "Rent",
    "Food",
    "Transportation",
    "Entertainment",
    "Other",
];

/// Income and category preferences
///
/// Category order is display order. Duplicate labels are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Take-home income per month
    pub monthly_income: Money,

    /// Expense category labels
    pub categories: Vec<String>,
}

impl UserSettings {
    pub fn new(monthly_income: Money, categories: Vec<String>) -> Self {
        Self {
            monthly_income,
            categories,
        }
    }

    /// Check whether `category` is one of the configured labels
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Position of the first label equal to `category`
    pub fn category_position(&self, category: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == category)
    }
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            monthly_income: Money::zero(),
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// A partial overwrite of [`UserSettings`]; `None` fields are left alone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub monthly_income: Option<Money>,
    pub categories: Option<Vec<String>>,
}

impl SettingsUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the monthly income
    pub fn monthly_income(mut self, income: Money) -> Self {
        self.monthly_income = Some(income);
        self
    }

    /// Replace the category list
    pub fn categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    /// Apply the update to `settings`
    pub fn apply_to(self, settings: &mut UserSettings) {
        if let Some(income) = self.monthly_income {
            settings.monthly_income = income;
        }
        if let Some(categories) = self.categories {
            settings.categories = categories;
        }
    }
}
