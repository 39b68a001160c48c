//! Daily spending series
//!
//! Totals per calendar day, oldest first. Only days that have records
//! appear; the series is never gap-filled. How many trailing days to show
//! is up to the caller.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{ExpenseRecord, Money};

/// Total spending on one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    #[serde(with = "crate::models::money::as_decimal")]
    pub amount: Money,
}

/// Sum expenses per calendar day, sorted ascending by date
///
/// Records without a usable date are skipped.
pub fn daily_series(records: &[ExpenseRecord]) -> Vec<DailyTotal> {
    let mut by_day: BTreeMap<NaiveDate, Money> = BTreeMap::new();

    for record in records {
        if let Some(date) = record.calendar_date() {
            *by_day.entry(date).or_default() += record.amount;
        }
    }

    by_day
        .into_iter()
        .map(|(date, amount)| DailyTotal { date, amount })
        .collect()
}

/// The trailing `days` buckets of a series (display windowing)
pub fn trailing(series: &[DailyTotal], days: usize) -> &[DailyTotal] {
    let start = series.len().saturating_sub(days);
    &series[start..]
}
