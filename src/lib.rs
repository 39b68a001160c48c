//! SpendWise - expense tracking with spending analytics
//!
//! This library provides the core of the SpendWise expense tracker: two
//! pure engines over a snapshot of expense records, and the shell that
//! feeds them from a local JSON store.
//!
//! # Architecture
//!
//! - `models`: Expense records, money, categories, the budget profile
//! - `reports`: Aggregations for the dashboard (daily series, category
//!   breakdown, month-over-month trend, budget utilization)
//! - `listview`: Sorting, pagination, in-place editing and deletion
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `storage`: JSON file storage layer
//! - `audit`: Audit logging system
//! - `services`: Business logic layer
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers for the `spendwise` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use spendwise::models::Snapshot;
//! use spendwise::reports::DashboardReport;
//!
//! let snapshot = Snapshot::from_values(serde_json::from_str(&body)?);
//! let report = DashboardReport::generate(&snapshot.records, today, profile.budget);
//! println!("{}", report.month.trend);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod listview;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SpendError, SpendResult};
