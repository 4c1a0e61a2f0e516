//! JSON snapshots
//!
//! A snapshot is the whole session (settings, debts and transactions) with a
//! schema version, so a later session can be seeded from it.

use std::collections::HashSet;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Debt, Money, Transaction, UserSettings};
use crate::reports::total_debt;
use crate::store::{AppState, BudgetData};

/// Current snapshot schema version
pub const SNAPSHOT_SCHEMA_VERSION: &str = "1.0.0";

/// Everything a session holds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that wrote the snapshot
    pub app_version: String,

    pub settings: UserSettings,

    #[serde(default)]
    pub debts: Vec<Debt>,

    #[serde(default)]
    pub transactions: Vec<Transaction>,

    #[serde(default)]
    pub metadata: SnapshotMetadata,
}

/// Summary figures, informational only
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    pub debt_count: usize,
    pub transaction_count: usize,
    pub category_count: usize,
    pub total_debt: Money,

    /// Date of the earliest transaction
    pub earliest_transaction: Option<String>,

    /// Date of the latest transaction
    pub latest_transaction: Option<String>,
}

impl Snapshot {
    /// Capture the current session
    pub fn from_data(data: &BudgetData) -> Self {
        let transactions = data.transactions();
        let dates = || transactions.iter().map(|t| t.date.date());

        let metadata = SnapshotMetadata {
            debt_count: data.debts().len(),
            transaction_count: transactions.len(),
            category_count: data.settings().categories.len(),
            total_debt: total_debt(data.debts()),
            earliest_transaction: dates().min().map(|d| d.to_string()),
            latest_transaction: dates().max().map(|d| d.to_string()),
        };

        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            settings: data.settings().clone(),
            debts: data.debts().to_vec(),
            transactions: transactions.to_vec(),
            metadata,
        }
    }

    /// Check the schema version and that no identifier repeats
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != SNAPSHOT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                SNAPSHOT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let mut debt_ids = HashSet::new();
        for debt in &self.debts {
            if !debt_ids.insert(debt.id) {
                return Err(format!("Duplicate debt id {}", debt.id));
            }
        }

        let mut transaction_ids = HashSet::new();
        for txn in &self.transactions {
            if !transaction_ids.insert(txn.id) {
                return Err(format!("Duplicate transaction id {}", txn.id));
            }
        }

        Ok(())
    }

    /// A fresh store holding the snapshot's records
    pub fn into_state(self) -> AppState {
        AppState::with_data(self.debts, self.transactions, self.settings)
    }
}

/// Write the session as JSON
pub fn export_json<W: Write + ?Sized>(data: &BudgetData, writer: &mut W, pretty: bool) -> BudgetResult<()> {
    let snapshot = Snapshot::from_data(data);

    if pretty {
        serde_json::to_writer_pretty(writer, &snapshot)
    } else {
        serde_json::to_writer(writer, &snapshot)
    }
    .map_err(|e| BudgetError::Export(e.to_string()))
}

/// Parse and validate a JSON snapshot
pub fn import_json(json_str: &str) -> BudgetResult<Snapshot> {
    let snapshot: Snapshot =
        serde_json::from_str(json_str).map_err(|e| BudgetError::Import(e.to_string()))?;

    snapshot.validate().map_err(BudgetError::Import)?;

    Ok(snapshot)
}
