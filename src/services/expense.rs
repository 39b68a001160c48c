//! Expense service
//!
//! Create, list, edit and delete expenses against the local store. Each
//! mutation persists the new collection before it is audited.

use chrono::{Local, NaiveDate};

use crate::audit::EntityType;
use crate::error::{SpendError, SpendResult};
use crate::listview::{
    delete_record, paginate, sort_records, CommitOutcome, EditSession, PageInfo, SortKey,
};
use crate::models::{CategoryChoice, ExpenseId, ExpenseRecord, Money, DATE_FORMAT};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

/// Input for logging a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub amount: Money,
    pub category: CategoryChoice,
    pub description: Option<String>,
    pub name: Option<String>,
    /// Defaults to today
    pub date: Option<NaiveDate>,
}

/// Fields to change on an existing expense; `None` leaves a field alone
#[derive(Debug, Clone, Default)]
pub struct ExpenseChanges {
    pub amount: Option<Money>,
    pub category: Option<CategoryChoice>,
    pub description: Option<String>,
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
}

impl ExpenseChanges {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.name.is_none()
            && self.date.is_none()
    }
}

/// One page of the sorted expense table
#[derive(Debug, Clone)]
pub struct ExpenseListing {
    pub records: Vec<ExpenseRecord>,
    pub info: PageInfo,
    pub sort: SortKey,
    /// Entries in the store that could not be read
    pub malformed_count: usize,
}

/// Result of an edit
#[derive(Debug, Clone)]
pub struct EditReport {
    /// The record as it was when the edit began
    pub before: ExpenseRecord,
    /// The draft that was committed
    pub after: ExpenseRecord,
    pub outcome: CommitOutcome,
}

/// Result of a delete
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Deleted(ExpenseRecord),
    /// Nothing had that id; the store is unchanged
    NotPresent,
}

fn audit_label(record: &ExpenseRecord) -> Option<String> {
    let label = record.display_label();
    if label.is_empty() {
        Some(record.category.clone())
    } else {
        Some(format!("{} ({})", label, record.category))
    }
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Log a new expense (`POST expenses`)
    pub fn create(&self, input: CreateExpenseInput) -> SpendResult<ExpenseRecord> {
        if input.amount.is_negative() {
            return Err(SpendError::Validation(format!(
                "Expense amount cannot be negative: {}",
                input.amount
            )));
        }

        let category = input.category.resolve()?;
        let date = input.date.unwrap_or_else(|| Local::now().date_naive());

        let mut record = ExpenseRecord::new(ExpenseId::generate(), input.amount, category, date);
        record.description = non_blank(input.description);
        record.name = non_blank(input.name);

        self.storage.expenses.insert(record.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_create(
            EntityType::Expense,
            record.id.to_string(),
            audit_label(&record),
            &record,
        )?;

        Ok(record)
    }

    pub fn get(&self, id: &ExpenseId) -> SpendResult<Option<ExpenseRecord>> {
        self.storage.expenses.get(id)
    }

    /// Find an expense by full id or by a unique id prefix
    pub fn find(&self, identifier: &str) -> SpendResult<ExpenseRecord> {
        let identifier = identifier.trim();
        if let Some(record) = self.storage.expenses.get(&ExpenseId::from(identifier))? {
            return Ok(record);
        }

        let mut matches: Vec<_> = self
            .storage
            .expenses
            .get_all()?
            .into_iter()
            .filter(|r| !identifier.is_empty() && r.id.as_str().starts_with(identifier))
            .collect();

        match matches.len() {
            1 => Ok(matches.remove(0)),
            0 => Err(SpendError::expense_not_found(identifier)),
            n => Err(SpendError::Validation(format!(
                "Id prefix '{}' matches {} expenses",
                identifier, n
            ))),
        }
    }

    /// Sorted page of the expense table
    pub fn list(&self, sort: SortKey, page: usize, page_size: usize) -> SpendResult<ExpenseListing> {
        let snapshot = self.storage.expenses.snapshot()?;
        let sorted = sort_records(&snapshot.records, sort);
        let page = paginate(&sorted, page, page_size);

        Ok(ExpenseListing {
            records: page.items.to_vec(),
            info: page.info,
            sort,
            malformed_count: snapshot.malformed.len(),
        })
    }

    /// Edit an expense in place (`PUT expenses/{id}`)
    ///
    /// The draft is committed against a fresh read of the store, so a
    /// record deleted in the meantime comes back as a lost update and
    /// nothing is written.
    pub fn edit(&self, identifier: &str, changes: ExpenseChanges) -> SpendResult<EditReport> {
        if changes.is_empty() {
            return Err(SpendError::Validation("No changes given".into()));
        }
        if let Some(amount) = changes.amount {
            if amount.is_negative() {
                return Err(SpendError::Validation(format!(
                    "Expense amount cannot be negative: {}",
                    amount
                )));
            }
        }
        let category = changes.category.as_ref().map(|c| c.resolve()).transpose()?;

        let before = self.find(identifier)?;

        let mut session = EditSession::new();
        session.begin_edit(&before);
        session.update_draft(|draft| {
            if let Some(amount) = changes.amount {
                draft.amount = amount;
            }
            if let Some(category) = category {
                draft.category = category;
            }
            if let Some(description) = changes.description {
                draft.description = non_blank(Some(description));
            }
            if let Some(name) = changes.name {
                draft.name = non_blank(Some(name));
            }
            if let Some(date) = changes.date {
                draft.date = Some(date.format(DATE_FORMAT).to_string());
            }
        });
        let after = session
            .draft()
            .cloned()
            .ok_or_else(|| SpendError::Storage("Edit session lost its draft".into()))?;

        self.storage.expenses.load()?;
        let current = self.storage.expenses.get_all()?;
        let result = session.commit(&current);

        match &result.outcome {
            CommitOutcome::Applied { id } => {
                self.storage.expenses.replace_all(result.records)?;
                self.storage.expenses.save()?;
                self.storage.log_update(
                    EntityType::Expense,
                    id.to_string(),
                    audit_label(&after),
                    &before,
                    &after,
                )?;
            }
            CommitOutcome::LostUpdate { id } => {
                self.storage.log_lost_update(
                    EntityType::Expense,
                    id.to_string(),
                    audit_label(&after),
                    &after,
                )?;
            }
            CommitOutcome::NothingToCommit => {}
        }

        Ok(EditReport {
            before,
            after,
            outcome: result.outcome,
        })
    }

    /// Remove an expense (`DELETE expenses/{id}`)
    ///
    /// Deleting an id that is not stored is not an error.
    pub fn delete(&self, id: &ExpenseId) -> SpendResult<DeleteOutcome> {
        let records = self.storage.expenses.get_all()?;
        let Some(existing) = records.iter().find(|r| &r.id == id).cloned() else {
            return Ok(DeleteOutcome::NotPresent);
        };

        let remaining = delete_record(id.clone(), &records);
        self.storage.expenses.replace_all(remaining)?;
        self.storage.expenses.save()?;

        self.storage.log_delete(
            EntityType::Expense,
            id.to_string(),
            audit_label(&existing),
            &existing,
        )?;

        Ok(DeleteOutcome::Deleted(existing))
    }

    pub fn count(&self) -> SpendResult<usize> {
        self.storage.expenses.count()
    }
}
