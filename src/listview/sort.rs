//! Sorting for the expense table

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::SpendError;
use crate::models::ExpenseRecord;

/// Column the expense table is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most recent first
    #[default]
    Date,
    /// Largest first
    Amount,
    /// A to Z
    Category,
    /// A to Z, unnamed first
    Name,
}

impl SortKey {
    /// Ordering of two records under this key
    pub fn compare(&self, a: &ExpenseRecord, b: &ExpenseRecord) -> Ordering {
        match self {
            // Newest first; records without a usable date go last
            Self::Date => match (a.calendar_date(), b.calendar_date()) {
                (Some(x), Some(y)) => y.cmp(&x),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            Self::Amount => b.amount.cmp(&a.amount),
            Self::Category => a.category.cmp(&b.category),
            Self::Name => a.sort_name().cmp(b.sort_name()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date => write!(f, "date"),
            Self::Amount => write!(f, "amount"),
            Self::Category => write!(f, "category"),
            Self::Name => write!(f, "name"),
        }
    }
}

impl FromStr for SortKey {
    type Err = SpendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "amount" => Ok(Self::Amount),
            "category" => Ok(Self::Category),
            "name" => Ok(Self::Name),
            other => Err(SpendError::Validation(format!(
                "Unknown sort key '{}'. Use date, amount, category or name",
                other
            ))),
        }
    }
}

/// Return a copy of `records` ordered by `key`
///
/// The sort is stable: records that compare equal keep their input order,
/// so the same snapshot always paginates the same way.
pub fn sort_records(records: &[ExpenseRecord], key: SortKey) -> Vec<ExpenseRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}
