use std::io;
use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use budget_cli::audit::AuditLogger;
use budget_cli::cli::{parse_date, run_demo, Session};
use budget_cli::config::{AppConfig, BudgetPaths};
use budget_cli::export::load_snapshot;
use budget_cli::store::AppState;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Debt tracking, expense logging and debt-payoff planning",
    long_about = "budget-cli keeps track of your debts and expenses for one session \
                  and helps you plan how much of your income goes to each debt. \
                  Commands are read line by line from standard input."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a command session reading from standard input
    Session {
        /// Start from a JSON or YAML snapshot
        #[arg(short, long)]
        seed: Option<PathBuf>,
        /// Treat this date (YYYY-MM-DD) as today
        #[arg(long)]
        today: Option<String>,
        /// Append the session's changes to the audit log on exit
        #[arg(long)]
        audit_log: bool,
    },

    /// Print the views for a sample session
    Demo {
        /// Treat this date (YYYY-MM-DD) as today
        #[arg(long)]
        today: Option<String>,
    },

    /// Write the default configuration file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let config = AppConfig::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Session {
            seed,
            today,
            audit_log,
        }) => {
            let today = resolve_today(today.as_deref())?;
            let state = match seed {
                Some(path) => load_snapshot(&path)?.into_state(),
                None => AppState::with_data(Vec::new(), Vec::new(), config.initial_settings()),
            };
            let write_audit = audit_log || config.audit_log_enabled;

            let mut session = Session::new(state, config, today);
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            session.run(stdin.lock(), &mut stdout)?;

            if write_audit {
                let logger = AuditLogger::new(paths.audit_log());
                logger.log_batch(&session.trail().entries())?;
            }
        }
        Some(Commands::Demo { today }) => {
            let today = resolve_today(today.as_deref())?;
            run_demo(config, today, &mut io::stdout())?;
        }
        Some(Commands::Init) => {
            println!("Initializing budget-cli at: {}", paths.base_dir().display());
            config.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Default categories: {}", config.default_categories.join(", "));
            println!();
            println!("Run 'budget session' to start entering commands.");
        }
        Some(Commands::Config) => {
            println!("budget-cli Configuration");
            println!("========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Config file:      {}", paths.config_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Exports:          {}", paths.exports_dir().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Preferences:");
            println!("  Currency symbol:  {}", config.currency_symbol);
            println!("  Date format:      {}", config.date_format);
            println!("  Upcoming count:   {}", config.upcoming_count);
            println!(
                "  Monthly income:   {}",
                config
                    .default_monthly_income
                    .format_with_symbol(&config.currency_symbol)
            );
            println!("  Categories:       {}", config.default_categories.join(", "));
            println!("  Audit log:        {}", config.audit_log_enabled);
        }
        None => {
            println!("budget-cli - Debt tracking and expense logging");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget demo' to see a sample session.");
        }
    }

    Ok(())
}

fn resolve_today(today: Option<&str>) -> Result<NaiveDate> {
    match today {
        Some(date) => Ok(parse_date(date)?),
        None => Ok(Local::now().date_naive()),
    }
}
