//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json. The file is
//! either `{"expenses": [...]}` as written here or a bare array as
//! returned by `GET expenses`, so an API dump can be dropped in as is.
//!
//! Entries that fail ingest are reported but never lost: they are kept
//! verbatim and written back after the valid records on every save.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{SpendError, SpendResult};
use crate::models::{ExpenseId, ExpenseRecord, MalformedRecord, Snapshot};

use super::file_io::{read_json, write_json_atomic};
use super::lock_poisoned;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ExpenseFile {
    Wrapped {
        #[serde(default)]
        expenses: Vec<Value>,
    },
    Bare(Vec<Value>),
}

impl Default for ExpenseFile {
    fn default() -> Self {
        Self::Bare(Vec::new())
    }
}

impl ExpenseFile {
    fn into_entries(self) -> Vec<Value> {
        match self {
            Self::Wrapped { expenses } | Self::Bare(expenses) => expenses,
        }
    }
}

#[derive(Serialize)]
struct ExpenseFileOut<'a> {
    expenses: &'a [Value],
}

#[derive(Debug, Default)]
struct ExpenseData {
    records: Vec<ExpenseRecord>,
    malformed: Vec<MalformedRecord>,
    /// Raw JSON of the malformed entries, same order as `malformed`
    rejected: Vec<Value>,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<ExpenseData>,
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(ExpenseData::default()),
        }
    }

    /// Load expenses from disk
    pub fn load(&self) -> SpendResult<()> {
        let entries = read_json::<ExpenseFile, _>(&self.path)?.into_entries();
        let raw = entries.clone();
        let snapshot = Snapshot::from_values(entries);

        let rejected = snapshot
            .malformed
            .iter()
            .filter_map(|m| raw.get(m.index).cloned())
            .collect();

        let mut data = self.write()?;

        *data = ExpenseData {
            records: snapshot.records,
            malformed: snapshot.malformed,
            rejected,
        };

        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> SpendResult<()> {
        let data = self.read()?;

        let mut expenses = data
            .records
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        expenses.extend(data.rejected.iter().cloned());

        write_json_atomic(&self.path, &ExpenseFileOut { expenses: &expenses })
    }

    /// Current records and ingest rejects as one snapshot
    pub fn snapshot(&self) -> SpendResult<Snapshot> {
        let data = self.read()?;

        Ok(Snapshot {
            records: data.records.clone(),
            malformed: data.malformed.clone(),
        })
    }

    /// All valid records in stored order
    pub fn get_all(&self) -> SpendResult<Vec<ExpenseRecord>> {
        Ok(self.read()?.records.clone())
    }

    /// Get an expense by id
    pub fn get(&self, id: &ExpenseId) -> SpendResult<Option<ExpenseRecord>> {
        Ok(self.read()?.records.iter().find(|r| &r.id == id).cloned())
    }

    /// Append a new record (`POST expenses`)
    pub fn insert(&self, record: ExpenseRecord) -> SpendResult<()> {
        record.validate()?;

        let mut data = self.write()?;

        if data.records.iter().any(|r| r.id == record.id) {
            return Err(SpendError::Storage(format!(
                "Expense id already in use: {}",
                record.id
            )));
        }

        data.records.push(record);
        Ok(())
    }

    /// Swap in a whole new collection, as produced by commit or delete
    pub fn replace_all(&self, records: Vec<ExpenseRecord>) -> SpendResult<()> {
        self.write()?.records = records;
        Ok(())
    }

    pub fn count(&self) -> SpendResult<usize> {
        Ok(self.read()?.records.len())
    }

    fn read(&self) -> SpendResult<RwLockReadGuard<'_, ExpenseData>> {
        self.data.read().map_err(|e| lock_poisoned("expense", e))
    }

    fn write(&self) -> SpendResult<RwLockWriteGuard<'_, ExpenseData>> {
        self.data.write().map_err(|e| lock_poisoned("expense", e))
    }
}
