//! Expense analytics
//!
//! Pure functions over a snapshot of [`ExpenseRecord`](crate::models::ExpenseRecord)s:
//! daily series, category breakdown, month-over-month comparison and
//! budget utilization, plus the dashboard report that combines them.
//! Nothing here does I/O or keeps state between calls.

pub mod budget;
pub mod categories;
pub mod daily;
pub mod dashboard;
pub mod month_comparison;

pub use budget::{budget_utilization, Utilization};
pub use categories::{category_breakdown, top_categories, CategoryTotal};
pub use daily::{daily_series, DailyTotal};
pub use dashboard::DashboardReport;
pub use month_comparison::{month_comparison, DateWindow, MonthComparison, MonthTrend, TrendDirection};
