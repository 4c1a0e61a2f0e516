//! Change notifications emitted by the store

use std::fmt;

use crate::models::{Debt, Transaction, UserSettings};

/// One applied mutation, carrying the affected records
///
/// Updates carry both the state before and after so observers (the audit
/// trail in particular) never have to look the old value up.
#[derive(Debug, Clone)]
pub enum Change {
    DebtAdded(Debt),
    DebtUpdated { before: Debt, after: Debt },
    DebtRemoved(Debt),
    TransactionLogged(Transaction),
    TransactionEdited { before: Transaction, after: Transaction },
    TransactionDeleted(Transaction),
    SettingsUpdated { before: UserSettings, after: UserSettings },
}

impl Change {
    /// Short label for the kind of change
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DebtAdded(_) => "debt added",
            Self::DebtUpdated { .. } => "debt updated",
            Self::DebtRemoved(_) => "debt removed",
            Self::TransactionLogged(_) => "expense logged",
            Self::TransactionEdited { .. } => "expense edited",
            Self::TransactionDeleted(_) => "expense deleted",
            Self::SettingsUpdated { .. } => "settings updated",
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DebtAdded(debt) | Self::DebtRemoved(debt) => {
                write!(f, "{}: {} ({})", self.kind(), debt.name, debt.id)
            }
            Self::DebtUpdated { after, .. } => {
                write!(f, "{}: {} ({})", self.kind(), after.name, after.id)
            }
            Self::TransactionLogged(txn) | Self::TransactionDeleted(txn) => {
                write!(f, "{}: {} ({})", self.kind(), txn, txn.id)
            }
            Self::TransactionEdited { after, .. } => {
                write!(f, "{}: {} ({})", self.kind(), after, after.id)
            }
            Self::SettingsUpdated { .. } => write!(f, "{}", self.kind()),
        }
    }
}

/// Handle returned by `AppState::subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub(crate) u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}
