//! Export module for budget-cli
//!
//! - JSON and YAML snapshots of the whole session, which can seed a later
//!   session
//! - CSV listings of debts and transactions for spreadsheets

pub mod csv;
pub mod json;
pub mod yaml;

use std::path::Path;

use crate::error::{BudgetError, BudgetResult};

pub use csv::{export_debts_csv, export_transactions_csv};
pub use json::{export_json, import_json, Snapshot, SnapshotMetadata, SNAPSHOT_SCHEMA_VERSION};
pub use yaml::{export_yaml, import_yaml};

/// Read a snapshot file; `.yaml`/`.yml` files are parsed as YAML, anything
/// else as JSON
pub fn load_snapshot(path: &Path) -> BudgetResult<Snapshot> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        BudgetError::Import(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    if is_yaml {
        import_yaml(&contents)
    } else {
        import_json(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DebtInput, Money};
    use crate::store::AppState;
    use tempfile::TempDir;

    #[test]
    fn test_load_snapshot_by_extension() {
        let temp_dir = TempDir::new().unwrap();
        let mut state = AppState::new();
        state.add_debt(DebtInput::new(
            "Visa Card",
            Money::from_dollars(2500),
            19.99,
            Money::from_dollars(75),
            15,
        ));

        let json_path = temp_dir.path().join("seed.json");
        let mut json = Vec::new();
        export_json(state.data(), &mut json, false).unwrap();
        std::fs::write(&json_path, json).unwrap();

        let yaml_path = temp_dir.path().join("seed.YML");
        let mut yaml = Vec::new();
        export_yaml(state.data(), &mut yaml).unwrap();
        std::fs::write(&yaml_path, yaml).unwrap();

        assert_eq!(load_snapshot(&json_path).unwrap().debts.len(), 1);
        assert_eq!(load_snapshot(&yaml_path).unwrap().debts.len(), 1);
    }

    #[test]
    fn test_missing_file_is_import_error() {
        let err = load_snapshot(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, BudgetError::Import(_)));
    }
}
