//! Audit logging for SpendWise
//!
//! Every change to stored data is appended to `audit.log` as one JSON
//! line: what happened, to which record, and the record before and after.
//!
//! ```rust,ignore
//! let logger = AuditLogger::new(paths.audit_log());
//! let diff = generate_diff(&before_json, &after_json);
//! logger.log(&AuditEntry::update(EntityType::Expense, id, None, &before, &after, diff))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
