//! Core data models for SpendWise
//!
//! Expense records, the user's budget profile, category choices and the
//! snapshot wrapper used to hand records to the engines.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod profile;
pub mod snapshot;

pub use category::{CategoryChoice, PresetCategory};
pub use expense::{parse_calendar_date, ExpenseRecord, DATE_FORMAT};
pub use ids::ExpenseId;
pub use money::Money;
pub use profile::BudgetProfile;
pub use snapshot::{MalformedRecord, Snapshot};
