//! Service layer for SpendWise
//!
//! Business logic on top of the storage layer: validation, persistence
//! and audit logging around the pure engines.

pub mod budget;
pub mod expense;
pub mod report;

pub use budget::BudgetService;
pub use expense::{
    CreateExpenseInput, DeleteOutcome, EditReport, ExpenseChanges, ExpenseListing, ExpenseService,
};
pub use report::ReportService;
