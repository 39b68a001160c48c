//! In-place editing of a single expense
//!
//! At most one record is in edit at a time. The session is a two-state
//! machine and every transition is defined from both states:
//!
//! | state      | begin                     | cancel         | commit                 |
//! |------------|---------------------------|----------------|------------------------|
//! | `Idle`     | → `Editing`               | no-op          | `NothingToCommit`      |
//! | `Editing`  | → `Editing`, old discarded| → `Idle`       | merge, → `Idle`        |

use crate::models::{ExpenseId, ExpenseRecord};

/// Current state of an [`EditSession`]
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing {
        id: ExpenseId,
        draft: ExpenseRecord,
    },
}

/// What happened when an edit was started
#[derive(Debug, Clone, PartialEq)]
pub enum BeginEditOutcome {
    /// No edit was in progress
    Started,
    /// An edit was already in progress; its unsaved draft was dropped
    Replaced { discarded: ExpenseRecord },
}

/// What happened when an edit was merged back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The record with the draft's id was replaced
    Applied { id: ExpenseId },
    /// No record with that id exists any more; nothing was changed
    LostUpdate { id: ExpenseId },
    /// The session was idle
    NothingToCommit,
}

impl CommitOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    pub fn is_lost_update(&self) -> bool {
        matches!(self, Self::LostUpdate { .. })
    }
}

/// Result of merging an edit into a collection
#[derive(Debug, Clone, PartialEq)]
pub struct CommitResult {
    pub records: Vec<ExpenseRecord>,
    pub outcome: CommitOutcome,
}

/// Replace the record whose id matches `edited` with `edited`
///
/// The edited copy is never inserted: if its id is gone from `records`
/// the collection comes back unchanged and the outcome is `LostUpdate`.
pub fn commit_edit(edited: &ExpenseRecord, records: &[ExpenseRecord]) -> CommitResult {
    let mut applied = false;
    let records: Vec<ExpenseRecord> = records
        .iter()
        .map(|record| {
            if record.id == edited.id {
                applied = true;
                edited.clone()
            } else {
                record.clone()
            }
        })
        .collect();

    let outcome = if applied {
        CommitOutcome::Applied {
            id: edited.id.clone(),
        }
    } else {
        CommitOutcome::LostUpdate {
            id: edited.id.clone(),
        }
    };

    CommitResult { records, outcome }
}

/// Tracks the one record currently being edited
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    state: EditState,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing { .. })
    }

    /// Id of the record in edit, if any
    pub fn editing_id(&self) -> Option<&ExpenseId> {
        match &self.state {
            EditState::Editing { id, .. } => Some(id),
            EditState::Idle => None,
        }
    }

    /// The in-progress draft, if any
    pub fn draft(&self) -> Option<&ExpenseRecord> {
        match &self.state {
            EditState::Editing { draft, .. } => Some(draft),
            EditState::Idle => None,
        }
    }

    /// Start editing a copy of `record`
    ///
    /// Any draft already in progress is dropped and handed back so the
    /// caller can warn about the lost changes.
    pub fn begin_edit(&mut self, record: &ExpenseRecord) -> BeginEditOutcome {
        let previous = std::mem::replace(
            &mut self.state,
            EditState::Editing {
                id: record.id.clone(),
                draft: record.clone(),
            },
        );

        match previous {
            EditState::Idle => BeginEditOutcome::Started,
            EditState::Editing { draft, .. } => BeginEditOutcome::Replaced { discarded: draft },
        }
    }

    /// Change the draft in place; returns false when idle
    ///
    /// The id is pinned to the record the edit started from.
    pub fn update_draft<F>(&mut self, change: F) -> bool
    where
        F: FnOnce(&mut ExpenseRecord),
    {
        match &mut self.state {
            EditState::Editing { id, draft } => {
                change(draft);
                draft.id = id.clone();
                true
            }
            EditState::Idle => false,
        }
    }

    /// Drop the current draft; returns it if there was one
    pub fn cancel_edit(&mut self) -> Option<ExpenseRecord> {
        match std::mem::take(&mut self.state) {
            EditState::Editing { draft, .. } => Some(draft),
            EditState::Idle => None,
        }
    }

    /// Merge the draft into `records` and return to idle
    ///
    /// From idle this is a no-op that hands back an unchanged copy.
    pub fn commit(&mut self, records: &[ExpenseRecord]) -> CommitResult {
        match std::mem::take(&mut self.state) {
            EditState::Editing { draft, .. } => commit_edit(&draft, records),
            EditState::Idle => CommitResult {
                records: records.to_vec(),
                outcome: CommitOutcome::NothingToCommit,
            },
        }
    }
}
