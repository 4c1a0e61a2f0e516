//! Application state store
//!
//! `AppState` is the single owner of the session's debts, transactions and
//! settings. Every mutation goes through one of its operations, and every
//! successful mutation is delivered to the subscribed observers before the
//! operation returns.
//!
//! The store trusts its input. Range and sign checks (`DebtInput::validate`,
//! `ExpenseInput::validate`) belong to whoever collects the input; the store
//! will happily hold a negative balance or a due day of 40.
//!
//! # Example
//!
//! ```
//! use budget_cli::models::{DebtInput, Money};
//! use budget_cli::store::AppState;
//!
//! let mut state = AppState::new();
//! let debt = state.add_debt(DebtInput::new(
//!     "Visa Card",
//!     Money::from_dollars(2500),
//!     19.99,
//!     Money::from_dollars(75),
//!     15,
//! ));
//! assert_eq!(state.debts().len(), 1);
//! assert!(state.remove_debt(debt.id).is_ok());
//! ```

mod change;

pub use change::{Change, SubscriptionId};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{
    Debt, DebtId, DebtInput, ExpenseInput, SettingsUpdate, Transaction, TransactionId,
    UserSettings,
};

type Observer = Box<dyn FnMut(&Change, &BudgetData)>;

/// Read-only view of the session's collections
///
/// Observers and the report functions receive this; only `AppState` can
/// mutate it.
#[derive(Debug, Clone, Default)]
pub struct BudgetData {
    debts: Vec<Debt>,
    transactions: Vec<Transaction>,
    settings: UserSettings,
}

impl BudgetData {
    /// Debts in insertion order
    pub fn debts(&self) -> &[Debt] {
        &self.debts
    }

    /// Transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    /// Find a debt by full UUID, short display ID, or name (case-insensitive)
    pub fn find_debt(&self, identifier: &str) -> Option<&Debt> {
        let identifier = identifier.trim();
        self.debts
            .iter()
            .find(|d| d.id.matches(identifier))
            .or_else(|| {
                self.debts
                    .iter()
                    .find(|d| d.name.eq_ignore_ascii_case(identifier))
            })
    }

    /// Find a transaction by full UUID or short display ID
    pub fn find_transaction(&self, identifier: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id.matches(identifier))
    }

    pub fn debt(&self, id: DebtId) -> Option<&Debt> {
        self.debts.iter().find(|d| d.id == id)
    }

    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }
}

/// The session store
pub struct AppState {
    data: BudgetData,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl AppState {
    /// Create an empty store with default settings
    pub fn new() -> Self {
        Self::with_data(Vec::new(), Vec::new(), UserSettings::default())
    }

    /// Create a store holding existing records, e.g. from a snapshot
    pub fn with_data(
        debts: Vec<Debt>,
        transactions: Vec<Transaction>,
        settings: UserSettings,
    ) -> Self {
        Self {
            data: BudgetData {
                debts,
                transactions,
                settings,
            },
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Read-only view of all collections
    pub fn data(&self) -> &BudgetData {
        &self.data
    }

    pub fn debts(&self) -> &[Debt] {
        self.data.debts()
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.data.transactions()
    }

    pub fn settings(&self) -> &UserSettings {
        self.data.settings()
    }

    /// See [`BudgetData::find_debt`]
    pub fn find_debt(&self, identifier: &str) -> Option<&Debt> {
        self.data.find_debt(identifier)
    }

    /// See [`BudgetData::find_transaction`]
    pub fn find_transaction(&self, identifier: &str) -> Option<&Transaction> {
        self.data.find_transaction(identifier)
    }

    // --- Observers ---

    /// Register an observer; it is called after every successful mutation,
    /// in subscription order
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&Change, &BudgetData) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&mut self, change: Change) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&change, &self.data);
        }
    }

    // --- Debts ---

    /// Append a new debt with a fresh identifier. No validation.
    pub fn add_debt(&mut self, input: DebtInput) -> Debt {
        let debt = Debt::new(input);
        self.data.debts.push(debt.clone());
        self.notify(Change::DebtAdded(debt.clone()));
        debt
    }

    /// Rewrite every field of a debt except its identifier
    pub fn edit_debt(&mut self, id: DebtId, input: DebtInput) -> BudgetResult<Debt> {
        let debt = self
            .data
            .debts
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| BudgetError::debt_not_found(id.to_string()))?;

        let before = debt.clone();
        debt.apply(input);
        let after = debt.clone();

        self.notify(Change::DebtUpdated {
            before,
            after: after.clone(),
        });
        Ok(after)
    }

    /// Remove a debt, returning it
    pub fn remove_debt(&mut self, id: DebtId) -> BudgetResult<Debt> {
        let index = self
            .data
            .debts
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| BudgetError::debt_not_found(id.to_string()))?;

        let debt = self.data.debts.remove(index);
        self.notify(Change::DebtRemoved(debt.clone()));
        Ok(debt)
    }

    // --- Transactions ---

    /// Append a new expense with a fresh identifier. No validation.
    pub fn log_expense(&mut self, input: ExpenseInput) -> Transaction {
        let txn = Transaction::new(input);
        self.data.transactions.push(txn.clone());
        self.notify(Change::TransactionLogged(txn.clone()));
        txn
    }

    /// Rewrite every field of a transaction except its identifier
    ///
    /// An unknown identifier leaves the collection untouched and returns
    /// `NotFound`.
    pub fn edit_transaction(
        &mut self,
        id: TransactionId,
        input: ExpenseInput,
    ) -> BudgetResult<Transaction> {
        let txn = self
            .data
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| BudgetError::transaction_not_found(id.to_string()))?;

        let before = txn.clone();
        txn.apply(input);
        let after = txn.clone();

        self.notify(Change::TransactionEdited {
            before,
            after: after.clone(),
        });
        Ok(after)
    }

    /// Remove a transaction, returning it
    pub fn delete_transaction(&mut self, id: TransactionId) -> BudgetResult<Transaction> {
        let index = self
            .data
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| BudgetError::transaction_not_found(id.to_string()))?;

        let txn = self.data.transactions.remove(index);
        self.notify(Change::TransactionDeleted(txn.clone()));
        Ok(txn)
    }

    // --- Settings ---

    /// Overwrite the given settings fields
    ///
    /// Observers are notified even when the values did not change.
    pub fn update_settings(&mut self, update: SettingsUpdate) -> &UserSettings {
        let before = self.data.settings.clone();
        update.apply_to(&mut self.data.settings);
        let after = self.data.settings.clone();

        self.notify(Change::SettingsUpdated { before, after });
        &self.data.settings
    }

    /// Append a category label
    pub fn add_category(&mut self, name: impl Into<String>) -> &UserSettings {
        let mut categories = self.data.settings.categories.clone();
        categories.push(name.into());
        self.update_settings(SettingsUpdate::new().categories(categories))
    }

    /// Rename the first category labelled `old`
    ///
    /// Transactions already filed under `old` keep their label.
    pub fn rename_category(&mut self, old: &str, new: impl Into<String>) -> BudgetResult<()> {
        let index = self
            .data
            .settings
            .category_position(old)
            .ok_or_else(|| BudgetError::category_not_found(old))?;

        let mut categories = self.data.settings.categories.clone();
        categories[index] = new.into();
        self.update_settings(SettingsUpdate::new().categories(categories));
        Ok(())
    }

    /// Remove the first category labelled `name`
    pub fn remove_category(&mut self, name: &str) -> BudgetResult<()> {
        let index = self
            .data
            .settings
            .category_position(name)
            .ok_or_else(|| BudgetError::category_not_found(name))?;

        let mut categories = self.data.settings.categories.clone();
        categories.remove(index);
        self.update_settings(SettingsUpdate::new().categories(categories));
        Ok(())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("data", &self.data)
            .field("observers", &self.observers.len())
            .finish()
    }
}
