//! Report formatting for terminal output
//!
//! Shared helpers used by the dashboard plus the stand-alone daily and
//! category views.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Money;
use crate::reports::{CategoryTotal, DailyTotal};

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to at most `max_len` characters with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Share")]
    share: String,
}

/// Category breakdown as a table, largest first
pub fn format_category_table(categories: &[&CategoryTotal], currency: &str) -> String {
    if categories.is_empty() {
        return "No data available\n".to_string();
    }

    let grand_total: Money = categories.iter().map(|c| c.total).sum();
    let rows = categories.iter().map(|c| CategoryRow {
        category: if c.category.is_empty() {
            "(uncategorized)".to_string()
        } else {
            truncate(&c.category, 30)
        },
        total: c.total.format_with_symbol(currency),
        count: c.count,
        share: format_percentage(c.share_of(grand_total)),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));

    format!("{}\n\nTotal: {}\n", table, grand_total.format_with_symbol(currency))
}

/// Daily totals with a bar per day
pub fn format_daily_series(days: &[DailyTotal], currency: &str) -> String {
    if days.is_empty() {
        return "No data available\n".to_string();
    }

    let max = days.iter().map(|d| d.amount).max().unwrap_or_default();
    let mut output = String::new();
    for day in days {
        output.push_str(&format!(
            "{} {:>12} {}\n",
            day.date,
            day.amount.format_with_symbol(currency),
            format_bar(day.amount.to_decimal(), max.to_decimal(), 30)
        ));
    }
    output
}
