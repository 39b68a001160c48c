//! Display formatting for terminal output

pub mod expense;
pub mod report;

pub use expense::{format_expense_details, format_expense_table, format_page_footer};
pub use report::{format_category_table, format_daily_series};
