//! Budget service
//!
//! Reads and updates the monthly budget held on the profile.

use crate::audit::EntityType;
use crate::error::SpendResult;
use crate::models::{BudgetProfile, Money};
use crate::storage::Storage;

const PROFILE_ENTITY_ID: &str = "profile";

/// Service for the monthly budget
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// The stored profile (`GET profile`)
    pub fn profile(&self) -> SpendResult<BudgetProfile> {
        self.storage.profile.get()
    }

    /// Budget to compute utilization against
    ///
    /// The profile's own budget wins; `fallback` applies only while none is set.
    pub fn effective_budget(&self, fallback: Option<Money>) -> SpendResult<Option<Money>> {
        Ok(self.storage.profile.get()?.budget.or(fallback))
    }

    /// Set the monthly budget (`PUT update-budget`)
    pub fn set_budget(&self, amount: Money) -> SpendResult<BudgetProfile> {
        let before = self.storage.profile.get()?;

        let mut after = before.clone();
        after.set_budget(amount)?;

        self.storage.profile.update(after.clone())?;
        self.storage.profile.save()?;

        let name = (!after.username.is_empty()).then(|| after.username.clone());
        self.storage
            .log_update(EntityType::Profile, PROFILE_ENTITY_ID, name, &before, &after)?;

        Ok(after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
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
    fn test_set_budget_persists_and_audits() {
        let (_temp, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let profile = service.set_budget(Money::from_cents(180000)).unwrap();
        assert_eq!(profile.budget, Some(Money::from_cents(180000)));

        storage.profile.load().unwrap();
        assert_eq!(service.profile().unwrap().budget, Some(Money::from_cents(180000)));

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries[0].operation, Operation::Update);
        assert_eq!(entries[0].entity_type, EntityType::Profile);
        assert_eq!(entries[0].diff_summary.as_deref(), Some("budget: null -> 1800.0"));
    }

    #[test]
    fn test_negative_budget_rejected() {
        let (_temp, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        assert!(service
            .set_budget(Money::from_cents(-1))
            .unwrap_err()
            .is_validation());
        assert_eq!(service.profile().unwrap().budget, None);
        assert!(storage.audit().read_all().unwrap().is_empty());
    }

    #[test]
    fn test_effective_budget_prefers_profile() {
        let (_temp, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        let fallback = Some(Money::from_cents(200000));

        assert_eq!(service.effective_budget(fallback).unwrap(), fallback);
        assert_eq!(service.effective_budget(None).unwrap(), None);

        service.set_budget(Money::from_cents(50000)).unwrap();
        assert_eq!(
            service.effective_budget(fallback).unwrap(),
            Some(Money::from_cents(50000))
        );
    }
}
