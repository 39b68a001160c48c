//! Dashboard Report
//!
//! Bundles every summary the dashboard shows for one snapshot: this
//! month's total and trend, budget utilization, the daily series and the
//! category breakdown.

use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

use super::budget::{budget_utilization, Utilization};
use super::categories::{category_breakdown, top_categories, CategoryTotal};
use super::daily::{daily_series, trailing, DailyTotal};
use super::month_comparison::{month_comparison, MonthComparison};
use crate::display::report::{format_bar, format_percentage, separator};
use crate::error::SpendResult;
use crate::models::{ExpenseRecord, Money};

/// Dashboard Report
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    /// Day the month windows are anchored on
    pub today: NaiveDate,
    /// Monthly budget used for utilization, if known
    #[serde(with = "crate::models::money::as_optional_decimal")]
    pub monthly_budget: Option<Money>,
    pub month: MonthComparison,
    pub utilization: Utilization,
    pub daily: Vec<DailyTotal>,
    pub categories: Vec<CategoryTotal>,
    /// Number of records in the snapshot
    pub record_count: usize,
    /// Sum over all records
    #[serde(with = "crate::models::money::as_decimal")]
    pub total_spent: Money,
}

impl DashboardReport {
    /// Generate the dashboard for a snapshot
    pub fn generate(
        records: &[ExpenseRecord],
        today: NaiveDate,
        monthly_budget: Option<Money>,
    ) -> Self {
        let month = month_comparison(records, today);
        let utilization = budget_utilization(month.current_month_total, monthly_budget);

        Self {
            today,
            monthly_budget,
            month,
            utilization,
            daily: daily_series(records),
            categories: category_breakdown(records),
            record_count: records.len(),
            total_spent: records.iter().map(|r| r.amount).sum(),
        }
    }

    /// Largest categories first
    pub fn top_categories(&self, limit: usize) -> Vec<&CategoryTotal> {
        top_categories(&self.categories, limit)
    }

    /// Format the report for terminal display
    ///
    /// `trend_days` limits how many trailing days of the series are drawn.
    pub fn format_terminal(&self, currency: &str, trend_days: usize) -> String {
        let mut output = String::new();

        output.push_str(&format!("Dashboard as of {}\n", self.today));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        output.push_str(&format!(
            "Spent this month:  {}\n",
            self.month.current_month_total.format_with_symbol(currency)
        ));
        output.push_str(&format!("                   {}\n", self.month.trend));
        output.push_str(&format!(
            "Last month:        {}\n",
            self.month.previous_month_total.format_with_symbol(currency)
        ));

        match self.monthly_budget {
            Some(budget) => output.push_str(&format!(
                "Monthly budget:    {} ({})\n",
                budget.format_with_symbol(currency),
                self.utilization
            )),
            None => output.push_str(&format!("Monthly budget:    ({})\n", self.utilization)),
        }
        output.push_str(&format!("Expenses logged:   {}\n", self.record_count));

        // Daily series
        output.push_str(&format!("\nSpending by day (last {} days with spending)\n", trend_days));
        output.push_str(&separator(60));
        output.push('\n');
        let window = trailing(&self.daily, trend_days);
        if window.is_empty() {
            output.push_str("No data available\n");
        } else {
            let max = window.iter().map(|d| d.amount).max().unwrap_or_default();
            for day in window {
                output.push_str(&format!(
                    "{} {:>12} {}\n",
                    day.date.format("%m/%d"),
                    day.amount.format_with_symbol(currency),
                    format_bar(day.amount.to_decimal(), max.to_decimal(), 30)
                ));
            }
        }

        // Categories
        output.push_str("\nSpending by category\n");
        output.push_str(&separator(60));
        output.push('\n');
        if self.categories.is_empty() {
            output.push_str("No data available\n");
        } else {
            for category in self.top_categories(self.categories.len()) {
                let label = if category.category.is_empty() {
                    "(uncategorized)"
                } else {
                    category.category.as_str()
                };
                output.push_str(&format!(
                    "{:<24} {:>12} {:>6} {:>8}\n",
                    label,
                    category.total.format_with_symbol(currency),
                    category.count,
                    format_percentage(category.share_of(self.total_spent))
                ));
            }
        }

        output
    }

    /// Export the summary, daily and category tables to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> SpendResult<()> {
        let mut csv = csv::Writer::from_writer(writer);

        write_row(&mut csv, ["Section", "Key", "Amount", "Count", "Percentage"])?;

        let trend_percent = self
            .month
            .trend
            .percent()
            .map(|p| format!("{:.1}", p))
            .unwrap_or_default();
        write_row(
            &mut csv,
            [
                "month",
                "current",
                &decimal(self.month.current_month_total),
                "",
                &trend_percent,
            ],
        )?;
        write_row(
            &mut csv,
            [
                "month",
                "previous",
                &decimal(self.month.previous_month_total),
                "",
                "",
            ],
        )?;

        let budget = self.monthly_budget.map(decimal).unwrap_or_default();
        let used = self
            .utilization
            .percent()
            .map(|p| format!("{:.1}", p))
            .unwrap_or_default();
        write_row(&mut csv, ["budget", "utilization", &budget, "", &used])?;

        for day in &self.daily {
            write_row(
                &mut csv,
                ["daily", &day.date.to_string(), &decimal(day.amount), "", ""],
            )?;
        }

        for category in &self.categories {
            write_row(
                &mut csv,
                [
                    "category",
                    &category.category,
                    &decimal(category.total),
                    &category.count.to_string(),
                    &format!("{:.2}", category.share_of(self.total_spent)),
                ],
            )?;
        }

        csv.flush()?;
        Ok(())
    }
}

fn write_row<W: Write>(csv: &mut csv::Writer<W>, fields: [&str; 5]) -> SpendResult<()> {
    csv.write_record(fields)?;
    Ok(())
}

fn decimal(amount: Money) -> String {
    format!("{:.2}", amount.to_decimal())
}
