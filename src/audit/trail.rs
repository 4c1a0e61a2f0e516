//! Turns store changes into audit entries

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use crate::store::{AppState, Change, SubscriptionId};

use super::diff::generate_diff;
use super::entry::{AuditEntry, EntityType};

/// Entity id used for the single settings record
pub const SETTINGS_ENTITY_ID: &str = "settings";

impl AuditEntry {
    /// Build the audit entry describing one store change
    pub fn from_change(change: &Change) -> Self {
        match change {
            Change::DebtAdded(debt) => AuditEntry::create(
                EntityType::Debt,
                debt.id.to_string(),
                Some(debt.name.clone()),
                debt,
            ),
            Change::DebtUpdated { before, after } => AuditEntry::update(
                EntityType::Debt,
                after.id.to_string(),
                Some(after.name.clone()),
                before,
                after,
                diff_of(before, after),
            ),
            Change::DebtRemoved(debt) => AuditEntry::delete(
                EntityType::Debt,
                debt.id.to_string(),
                Some(debt.name.clone()),
                debt,
            ),
            Change::TransactionLogged(txn) => AuditEntry::create(
                EntityType::Transaction,
                txn.id.to_string(),
                Some(txn.to_string()),
                txn,
            ),
            Change::TransactionEdited { before, after } => AuditEntry::update(
                EntityType::Transaction,
                after.id.to_string(),
                Some(after.to_string()),
                before,
                after,
                diff_of(before, after),
            ),
            Change::TransactionDeleted(txn) => AuditEntry::delete(
                EntityType::Transaction,
                txn.id.to_string(),
                Some(txn.to_string()),
                txn,
            ),
            Change::SettingsUpdated { before, after } => AuditEntry::update(
                EntityType::Settings,
                SETTINGS_ENTITY_ID,
                None,
                before,
                after,
                diff_of(before, after),
            ),
        }
    }
}

fn diff_of<T: Serialize>(before: &T, after: &T) -> Option<String> {
    let before = serde_json::to_value(before).ok()?;
    let after = serde_json::to_value(after).ok()?;
    generate_diff(&before, &after)
}

/// In-memory audit trail fed by a store subscription
///
/// Clones share the same entries, so the session can keep one handle while
/// the store owns the observer closure.
#[derive(Debug, Clone, Default)]
pub struct AuditTrail {
    entries: Rc<RefCell<Vec<AuditEntry>>>,
}

impl AuditTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to `state` so every applied change is recorded
    pub fn attach(&self, state: &mut AppState) -> SubscriptionId {
        let trail = self.clone();
        state.subscribe(move |change, _| trail.record(change))
    }

    pub fn record(&self, change: &Change) {
        self.entries.borrow_mut().push(AuditEntry::from_change(change));
    }

    /// Entries recorded so far, oldest first
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries.borrow().clone()
    }

    /// The last `count` entries, oldest first
    pub fn recent(&self, count: usize) -> Vec<AuditEntry> {
        let entries = self.entries.borrow();
        let start = entries.len().saturating_sub(count);
        entries[start..].to_vec()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::{DebtInput, ExpenseInput, Money, SettingsUpdate};
    use chrono::NaiveDate;

    fn visa() -> DebtInput {
        DebtInput::new(
            "Visa Card",
            Money::from_dollars(2500),
            19.99,
            Money::from_dollars(75),
            15,
        )
    }

    #[test]
    fn test_records_create_update_delete() {
        let mut state = AppState::new();
        let trail = AuditTrail::new();
        trail.attach(&mut state);

        let debt = state.add_debt(visa());
        let mut edit = debt.to_input();
        edit.balance = Money::from_dollars(2400);
        state.edit_debt(debt.id, edit).unwrap();
        state.remove_debt(debt.id).unwrap();

        let entries = trail.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_type, EntityType::Debt);
        assert_eq!(entries[0].entity_id, debt.id.to_string());
        assert_eq!(entries[0].entity_name.as_deref(), Some("Visa Card"));

        assert_eq!(entries[1].operation, Operation::Update);
        assert_eq!(
            entries[1].diff_summary.as_deref(),
            Some("balance: 250000 -> 240000")
        );

        assert_eq!(entries[2].operation, Operation::Delete);
        assert!(entries[2].after.is_none());
    }

    #[test]
    fn test_records_expenses_and_settings() {
        let mut state = AppState::new();
        let trail = AuditTrail::new();
        trail.attach(&mut state);

        let date = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
        let txn = state.log_expense(ExpenseInput::on(date, Money::from_dollars(12), "Food"));
        state.update_settings(SettingsUpdate::new().monthly_income(Money::from_dollars(3200)));

        let entries = trail.entries();
        assert_eq!(entries[0].entity_type, EntityType::Transaction);
        assert_eq!(entries[0].entity_id, txn.id.to_string());
        assert_eq!(
            entries[0].entity_name.as_deref(),
            Some("2025-11-03 Food $12.00")
        );
        assert_eq!(entries[1].entity_type, EntityType::Settings);
        assert_eq!(entries[1].entity_id, SETTINGS_ENTITY_ID);
        assert_eq!(
            entries[1].diff_summary.as_deref(),
            Some("monthly_income: 0 -> 320000")
        );
    }

    #[test]
    fn test_failed_operations_leave_no_entry() {
        let mut state = AppState::new();
        let trail = AuditTrail::new();
        trail.attach(&mut state);

        let debt = state.add_debt(visa());
        state.remove_debt(debt.id).unwrap();
        assert!(state.remove_debt(debt.id).is_err());

        assert_eq!(trail.len(), 2);
    }

    #[test]
    fn test_detached_trail_stops_recording() {
        let mut state = AppState::new();
        let trail = AuditTrail::new();
        let sub = trail.attach(&mut state);

        state.add_debt(visa());
        assert!(state.unsubscribe(sub));
        state.add_debt(visa());

        assert_eq!(trail.len(), 1);
        assert_eq!(trail.recent(5).len(), 1);
        assert!(AuditTrail::new().is_empty());
    }
}
