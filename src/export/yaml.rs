//! YAML snapshots
//!
//! Same content as the JSON snapshot, with a comment header for people
//! reading the file.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::store::BudgetData;

use super::json::Snapshot;

/// Write the session as YAML
pub fn export_yaml<W: Write + ?Sized>(data: &BudgetData, writer: &mut W) -> BudgetResult<()> {
    let snapshot = Snapshot::from_data(data);

    write_header(writer, &snapshot).map_err(|e| BudgetError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &snapshot).map_err(|e| BudgetError::Export(e.to_string()))
}

fn write_header<W: Write + ?Sized>(writer: &mut W, snapshot: &Snapshot) -> std::io::Result<()> {
    writeln!(writer, "# budget-cli snapshot")?;
    writeln!(writer, "# Generated: {}", snapshot.exported_at)?;
    writeln!(writer, "# App Version: {}", snapshot.app_version)?;
    writeln!(writer, "#")?;
    writeln!(writer, "# Seed a session from this file with `budget session --seed`.")?;
    writeln!(writer)
}

/// Parse and validate a YAML snapshot
pub fn import_yaml(yaml_str: &str) -> BudgetResult<Snapshot> {
    let snapshot: Snapshot =
        serde_yaml::from_str(yaml_str).map_err(|e| BudgetError::Import(e.to_string()))?;

    snapshot.validate().map_err(BudgetError::Import)?;

    Ok(snapshot)
}
