//! Audit trail for budget-cli
//!
//! Every applied store change becomes an [`AuditEntry`] carrying the record
//! before and after, plus a one-line diff summary. [`AuditTrail`] collects
//! entries for the running session by subscribing to the store, and
//! [`AuditLogger`] appends them to the JSONL audit log.
//!
//! # Example
//!
//! ```
//! use budget_cli::audit::{AuditTrail, Operation};
//! use budget_cli::models::{DebtInput, Money};
//! use budget_cli::store::AppState;
//!
//! let mut state = AppState::new();
//! let trail = AuditTrail::new();
//! trail.attach(&mut state);
//!
//! state.add_debt(DebtInput::new(
//!     "Visa Card",
//!     Money::from_dollars(2500),
//!     19.99,
//!     Money::from_dollars(75),
//!     15,
//! ));
//! assert_eq!(trail.entries()[0].operation, Operation::Create);
//! ```

mod diff;
mod entry;
mod logger;
mod trail;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
pub use trail::{AuditTrail, SETTINGS_ENTITY_ID};
