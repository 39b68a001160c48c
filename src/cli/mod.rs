//! CLI command handlers
//!
//! Bridges the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod export;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use report::{handle_report_command, ReportCommands};

use chrono::NaiveDate;

use crate::error::{SpendError, SpendResult};
use crate::models::{Money, DATE_FORMAT};

/// Parse a `YYYY-MM-DD` argument
pub(crate) fn parse_date(s: &str) -> SpendResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| SpendError::Validation(format!("Invalid date: {}. Use YYYY-MM-DD", s)))
}

/// Parse a non-negative amount argument such as `12.50`
pub(crate) fn parse_amount(s: &str) -> SpendResult<Money> {
    let amount =
        Money::parse(s).map_err(|e| SpendError::Validation(format!("Invalid amount: {}", e)))?;
    if amount.is_negative() {
        return Err(SpendError::Validation(format!(
            "Amount cannot be negative: {}",
            s
        )));
    }
    Ok(amount)
}
