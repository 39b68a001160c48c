//! Storage layer for SpendWise
//!
//! JSON files with atomic writes, one repository per file, and the audit
//! log every mutation goes through.

pub mod expenses;
pub mod file_io;
pub mod profile;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use profile::ProfileRepository;

use serde::Serialize;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::paths::SpendPaths;
use crate::error::{SpendError, SpendResult};

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: SpendPaths,
    pub expenses: ExpenseRepository,
    pub profile: ProfileRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, creating its directories
    pub fn new(paths: SpendPaths) -> SpendResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            profile: ProfileRepository::new(paths.profile_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &SpendPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&self) -> SpendResult<()> {
        self.expenses.load()?;
        self.profile.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> SpendResult<()> {
        self.expenses.save()?;
        self.profile.save()?;
        Ok(())
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> SpendResult<()> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record an update with a field diff of before and after
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> SpendResult<()> {
        let diff = generate_diff(&serde_json::to_value(before)?, &serde_json::to_value(after)?);
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff,
        ))
    }

    pub fn log_lost_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        attempted: &T,
    ) -> SpendResult<()> {
        self.audit.log(&AuditEntry::lost_update(
            entity_type,
            entity_id,
            entity_name,
            attempted,
        ))
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> SpendResult<()> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }
}

/// Error for a repository whose lock was poisoned by a panicking writer
pub(crate) fn lock_poisoned(store: &str, err: impl std::fmt::Display) -> SpendError {
    SpendError::Storage(format!("The {} store is unusable after a failed write: {}", store, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        storage.load_all().unwrap();
        assert_eq!(storage.expenses.count().unwrap(), 0);
    }

    #[test]
    fn test_log_update_records_diff() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(SpendPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();

        storage
            .log_update(
                EntityType::Profile,
                "profile",
                None,
                &json!({"budget": 100}),
                &json!({"budget": 250}),
            )
            .unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries[0].operation, Operation::Update);
        assert_eq!(entries[0].diff_summary.as_deref(), Some("budget: 100 -> 250"));
    }
}
