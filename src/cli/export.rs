//! Export commands
//!
//! Each export writes to `--output FILE` when given, otherwise to the
//! session output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_debts_csv, export_json, export_transactions_csv, export_yaml};

use super::session::Session;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Snapshot of the whole session as JSON
    Json {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Compact output on one line
        #[arg(long)]
        compact: bool,
    },

    /// Snapshot of the whole session as YAML
    Yaml {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Debts as CSV
    #[command(name = "debts-csv")]
    DebtsCsv {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Transactions as CSV
    #[command(name = "transactions-csv")]
    TransactionsCsv {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle an export command
pub fn handle_export_command(
    session: &mut Session,
    cmd: ExportCommands,
    out: &mut dyn Write,
) -> BudgetResult<()> {
    let data = session.state().data();

    match cmd {
        ExportCommands::Json { output, compact } => {
            write_to(output.as_deref(), out, "Snapshot", |w| {
                export_json(data, w, !compact)?;
                writeln!(w)?;
                Ok(())
            })
        }
        ExportCommands::Yaml { output } => {
            write_to(output.as_deref(), out, "Snapshot", |w| export_yaml(data, w))
        }
        ExportCommands::DebtsCsv { output } => write_to(output.as_deref(), out, "Debts", |w| {
            export_debts_csv(data.debts(), w)
        }),
        ExportCommands::TransactionsCsv { output } => {
            write_to(output.as_deref(), out, "Transactions", |w| {
                export_transactions_csv(data.transactions(), w)
            })
        }
    }
}

/// Run `export` against a file or the session output
fn write_to<F>(path: Option<&Path>, out: &mut dyn Write, what: &str, export: F) -> BudgetResult<()>
where
    F: FnOnce(&mut dyn Write) -> BudgetResult<()>,
{
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                BudgetError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export(&mut writer)?;
            writer
                .flush()
                .map_err(|e| BudgetError::Export(format!("Failed to write {}: {}", path.display(), e)))?;
            writeln!(out, "{} exported to: {}", what, path.display())?;
        }
        None => export(out)?,
    }
    Ok(())
}
