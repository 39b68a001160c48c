//! Expense table presentation
//!
//! Sorting, pagination, single-record editing and deletion over a snapshot
//! of records. Like the analytics, everything here is a pure function of
//! its inputs (the edit session only holds the draft being worked on).

pub mod edit;
pub mod paginate;
pub mod sort;

pub use edit::{
    commit_edit, BeginEditOutcome, CommitOutcome, CommitResult, EditSession, EditState,
};
pub use paginate::{clamp_page, paginate, Page, PageInfo};
pub use sort::{sort_records, SortKey};

use crate::models::{ExpenseId, ExpenseRecord};

/// Return `records` without the record whose id is `id`
///
/// Deleting an id that is not there is a no-op.
pub fn delete_record(id: impl Into<ExpenseId>, records: &[ExpenseRecord]) -> Vec<ExpenseRecord> {
    let id = id.into();
    records.iter().filter(|r| r.id != id).cloned().collect()
}
