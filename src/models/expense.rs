//! Expense record model
//!
//! The single entity both engines work on. Records arrive from the store
//! as JSON; the date stays in its wire form and is parsed on demand, so a
//! record with a missing or garbled date can still take part in
//! category totals.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::money::{self, Money};
use crate::error::{SpendError, SpendResult};

/// Wire format for expense dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single logged expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Identifier assigned by the store
    pub id: ExpenseId,

    /// Amount spent (never negative)
    #[serde(with = "money::as_decimal")]
    pub amount: Money,

    /// Category label, compared verbatim
    #[serde(default)]
    pub category: String,

    /// Optional free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional display name, also a sort key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// ISO-8601 date (`YYYY-MM-DD`), possibly with a time part
    #[serde(default)]
    pub date: Option<String>,
}

impl ExpenseRecord {
    /// Create a record dated on a calendar day
    pub fn new(
        id: impl Into<ExpenseId>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            category: category.into(),
            description: None,
            name: None,
            date: Some(date.format(DATE_FORMAT).to_string()),
        }
    }

    /// Builder-style setter for the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder-style setter for the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The record's calendar date, or `None` if missing or unparseable
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_calendar_date)
    }

    /// Name used for sorting and display (empty when unset)
    pub fn sort_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Name and description joined for table display
    pub fn display_label(&self) -> String {
        match (self.name.as_deref(), self.description.as_deref()) {
            (Some(n), Some(d)) if !n.is_empty() && !d.is_empty() => format!("{} - {}", n, d),
            (Some(n), _) if !n.is_empty() => n.to_string(),
            (_, Some(d)) => d.to_string(),
            _ => String::new(),
        }
    }

    /// Validate the record's invariants
    pub fn validate(&self) -> SpendResult<()> {
        if self.id.as_str().trim().is_empty() {
            return Err(SpendError::Validation("Expense id cannot be empty".into()));
        }
        if self.amount.is_negative() {
            return Err(SpendError::Validation(format!(
                "Expense amount cannot be negative: {}",
                self.amount
            )));
        }
        if self.amount > Money::MAX_EXPENSE {
            return Err(SpendError::Validation(format!(
                "Expense amount {} exceeds the maximum of {}",
                self.amount,
                Money::MAX_EXPENSE
            )));
        }
        Ok(())
    }
}

/// Parse a wire date into a calendar date
///
/// Accepts `YYYY-MM-DD` and ISO date-times (`YYYY-MM-DDTHH:MM:SS[.fff]`),
/// keeping only the calendar day. No timezone conversion is applied.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    // RFC 3339 with an offset: the calendar day as written
    chrono::DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}
