//! Profile repository for JSON storage
//!
//! Holds the single budget profile in profile.json.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::SpendResult;
use crate::models::BudgetProfile;

use super::file_io::{read_json, write_json_atomic};
use super::lock_poisoned;

/// Repository for the budget profile
pub struct ProfileRepository {
    path: PathBuf,
    data: RwLock<BudgetProfile>,
}

impl ProfileRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BudgetProfile::default()),
        }
    }

    /// Load the profile from disk (an empty profile if none exists yet)
    pub fn load(&self) -> SpendResult<()> {
        let profile: BudgetProfile = read_json(&self.path)?;

        *self.write()? = profile;
        Ok(())
    }

    /// Save the profile to disk
    pub fn save(&self) -> SpendResult<()> {
        write_json_atomic(&self.path, &*self.read()?)
    }

    pub fn get(&self) -> SpendResult<BudgetProfile> {
        Ok(self.read()?.clone())
    }

    pub fn update(&self, profile: BudgetProfile) -> SpendResult<()> {
        *self.write()? = profile;
        Ok(())
    }

    fn read(&self) -> SpendResult<RwLockReadGuard<'_, BudgetProfile>> {
        self.data.read().map_err(|e| lock_poisoned("profile", e))
    }

    fn write(&self) -> SpendResult<RwLockWriteGuard<'_, BudgetProfile>> {
        self.data.write().map_err(|e| lock_poisoned("profile", e))
    }
}
