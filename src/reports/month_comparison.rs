//! Month-over-month comparison
//!
//! "This month" runs from the 1st of `today`'s month through `today`
//! inclusive; "last month" is the whole previous calendar month. The two
//! windows therefore differ in length for most of the month.

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;
use std::fmt;

use crate::models::{ExpenseRecord, Money};

/// Direction of a month-over-month change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increase,
    Decrease,
}

/// How this month's spending compares to last month's
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MonthTrend {
    /// Signed change relative to last month, in percent, one decimal
    Change {
        percent: f64,
        direction: TrendDirection,
    },
    /// Nothing was spent last month, so there is no baseline to compare to
    InsufficientHistory,
}

impl MonthTrend {
    /// Compare two monthly totals
    pub fn between(current: Money, previous: Money) -> Self {
        if !previous.is_positive() {
            return Self::InsufficientHistory;
        }

        let current = current.cents() as f64;
        let previous = previous.cents() as f64;
        let percent = round_one_decimal((current - previous) / previous * 100.0);

        let direction = if percent >= 0.0 {
            TrendDirection::Increase
        } else {
            TrendDirection::Decrease
        };

        Self::Change { percent, direction }
    }

    /// The percentage, if there was a baseline
    pub fn percent(&self) -> Option<f64> {
        match self {
            Self::Change { percent, .. } => Some(*percent),
            Self::InsufficientHistory => None,
        }
    }
}

impl fmt::Display for MonthTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Change {
                percent,
                direction: TrendDirection::Increase,
            } => write!(f, "{:.1}% more than last month", percent.abs()),
            Self::Change {
                percent,
                direction: TrendDirection::Decrease,
            } => write!(f, "{:.1}% less than last month", percent.abs()),
            Self::InsufficientHistory => write!(f, "New spending trend"),
        }
    }
}

/// Current vs. previous calendar month totals
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthComparison {
    #[serde(with = "crate::models::money::as_decimal")]
    pub current_month_total: Money,
    #[serde(with = "crate::models::money::as_decimal")]
    pub previous_month_total: Money,
    pub trend: MonthTrend,
}

/// An inclusive range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// 1st of `today`'s month through `today`
    pub fn month_to_date(today: NaiveDate) -> Self {
        Self {
            start: first_of_month(today),
            end: today,
        }
    }

    /// The full calendar month before `today`'s month
    pub fn previous_month(today: NaiveDate) -> Self {
        let this_month = first_of_month(today);
        let start = this_month
            .checked_sub_months(Months::new(1))
            .unwrap_or(NaiveDate::MIN);
        let end = this_month.pred_opt().unwrap_or(NaiveDate::MIN);
        Self { start, end }
    }
}

/// Compare spending so far this month with all of last month
///
/// Records without a usable date are left out of both totals.
pub fn month_comparison(records: &[ExpenseRecord], today: NaiveDate) -> MonthComparison {
    let current = DateWindow::month_to_date(today);
    let previous = DateWindow::previous_month(today);

    let mut current_month_total = Money::zero();
    let mut previous_month_total = Money::zero();

    for record in records {
        let Some(date) = record.calendar_date() else {
            continue;
        };
        if current.contains(date) {
            current_month_total += record.amount;
        } else if previous.contains(date) {
            previous_month_total += record.amount;
        }
    }

    MonthComparison {
        current_month_total,
        previous_month_total,
        trend: MonthTrend::between(current_month_total, previous_month_total),
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
