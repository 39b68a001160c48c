//! JSON Export functionality
//!
//! Exports every stored expense and the budget profile with schema
//! versioning.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{SpendError, SpendResult};
use crate::models::money::{self, Money};
use crate::models::{BudgetProfile, ExpenseRecord};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full database export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub profile: BudgetProfile,

    /// Valid expenses in stored order
    pub expenses: Vec<ExpenseRecord>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,

    /// Stored entries left out because they could not be read
    pub skipped_count: usize,

    #[serde(with = "money::as_decimal")]
    pub total_spent: Money,

    pub earliest_expense: Option<NaiveDate>,

    pub latest_expense: Option<NaiveDate>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> SpendResult<Self> {
        let snapshot = storage.expenses.snapshot()?;
        let profile = storage.profile.get()?;

        let dates = || snapshot.dated().filter_map(|r| r.calendar_date());
        let metadata = ExportMetadata {
            expense_count: snapshot.len(),
            skipped_count: snapshot.malformed.len(),
            total_spent: snapshot.records.iter().map(|r| r.amount).sum(),
            earliest_expense: dates().min(),
            latest_expense: dates().max(),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            profile,
            expenses: snapshot.records,
            metadata,
        })
    }
}

/// Export the full database to JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: &mut W, pretty: bool) -> SpendResult<()> {
    let export = FullExport::from_storage(storage)?;

    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    };
    written.map_err(|e| SpendError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| SpendError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SpendPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_full_export() {
        let (_temp, storage) = create_test_storage();
        for (id, cents, day) in [("a", 1000, 3), ("b", 2550, 1)] {
            storage
                .expenses
                .insert(ExpenseRecord::new(
                    id,
                    Money::from_cents(cents),
                    "Food",
                    NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
                ))
                .unwrap();
        }

        let export = FullExport::from_storage(&storage).unwrap();
        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.expense_count, 2);
        assert_eq!(export.metadata.total_spent, Money::from_cents(3550));
        assert_eq!(
            export.metadata.earliest_expense,
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert_eq!(
            export.metadata.latest_expense,
            NaiveDate::from_ymd_opt(2024, 3, 3)
        );
    }

    #[test]
    fn test_json_round_trip() {
        let (_temp, storage) = create_test_storage();
        storage
            .expenses
            .insert(ExpenseRecord::new(
                "a",
                Money::from_cents(1234),
                "Bills",
                NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            ))
            .unwrap();

        let mut buffer = Vec::new();
        export_full_json(&storage, &mut buffer, true).unwrap();

        let parsed: FullExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.expenses.len(), 1);
        assert_eq!(parsed.expenses[0].amount, Money::from_cents(1234));
    }
}
