//! Record snapshots
//!
//! A snapshot is the full, immutable collection of expenses handed to the
//! engines for one computation. Ingesting raw JSON never fails as a whole:
//! entries that cannot become an [`ExpenseRecord`] are set aside as
//! [`MalformedRecord`]s and the rest go through.

use serde_json::Value;

use super::expense::ExpenseRecord;

/// An input entry rejected during ingest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecord {
    /// Position of the entry in the input array
    pub index: usize,
    /// The entry's id, if one could be read
    pub id: Option<String>,
    /// Why the entry was rejected
    pub reason: String,
}

/// Valid records in input order plus whatever was rejected
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub records: Vec<ExpenseRecord>,
    pub malformed: Vec<MalformedRecord>,
}

impl Snapshot {
    /// Ingest raw JSON entries as returned by `GET expenses`
    pub fn from_values(values: Vec<Value>) -> Self {
        let mut snapshot = Self::default();
        for (index, value) in values.into_iter().enumerate() {
            let id = value.get("id").and_then(|id| match id {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            });

            let parsed = serde_json::from_value::<ExpenseRecord>(value)
                .map_err(|e| e.to_string())
                .and_then(|r| r.validate().map(|()| r).map_err(|e| e.to_string()));

            match parsed {
                Ok(record) => snapshot.records.push(record),
                Err(reason) => snapshot.malformed.push(MalformedRecord { index, id, reason }),
            }
        }
        snapshot
    }

    /// Records whose date can be placed on the calendar
    pub fn dated(&self) -> impl Iterator<Item = &ExpenseRecord> {
        self.records.iter().filter(|r| r.calendar_date().is_some())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
