//! Report service
//!
//! Feeds the stored snapshot and budget into the dashboard aggregations.

use chrono::NaiveDate;

use super::budget::BudgetService;
use crate::error::SpendResult;
use crate::models::{Money, Snapshot};
use crate::reports::DashboardReport;
use crate::storage::Storage;

/// Service for building reports from the store
pub struct ReportService<'a> {
    storage: &'a Storage,
}

impl<'a> ReportService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// The stored records and ingest rejects
    pub fn snapshot(&self) -> SpendResult<Snapshot> {
        self.storage.expenses.snapshot()
    }

    /// Dashboard anchored on `today`
    ///
    /// `fallback_budget` is used only while the profile has no budget.
    pub fn dashboard(
        &self,
        today: NaiveDate,
        fallback_budget: Option<Money>,
    ) -> SpendResult<DashboardReport> {
        let snapshot = self.snapshot()?;
        let budget = BudgetService::new(self.storage).effective_budget(fallback_budget)?;
        Ok(DashboardReport::generate(&snapshot.records, today, budget))
    }
}
