//! Expense display formatting
//!
//! The paged expense table and the single-expense detail view.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::report::truncate;
use crate::listview::{PageInfo, SortKey};
use crate::models::ExpenseRecord;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl ExpenseRow {
    fn new(record: &ExpenseRecord, currency: &str) -> Self {
        Self {
            id: record.id.short().to_string(),
            date: record
                .calendar_date()
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
            category: truncate(&record.category, 20),
            name: truncate(&record.display_label(), 32),
            amount: record.amount.format_with_symbol(currency),
        }
    }
}

/// Footer line under a page of the table
pub fn format_page_footer(info: &PageInfo) -> String {
    let mut footer = format!(
        "Page {} of {} ({} expenses)",
        info.current_page,
        info.total_pages.max(1),
        info.total_items
    );
    if info.has_previous {
        footer.push_str("  [--page ");
        footer.push_str(&(info.current_page - 1).to_string());
        footer.push_str(" for previous]");
    }
    if info.has_next {
        footer.push_str("  [--page ");
        footer.push_str(&(info.current_page + 1).to_string());
        footer.push_str(" for next]");
    }
    footer
}

/// Format one page of expenses as a table with its footer
pub fn format_expense_table(
    records: &[ExpenseRecord],
    info: &PageInfo,
    sort: SortKey,
    currency: &str,
) -> String {
    if info.total_items == 0 {
        return "No expenses found.\n".to_string();
    }
    if records.is_empty() {
        return format!("No expenses on this page.\n{}\n", format_page_footer(info));
    }

    let mut table = Table::new(records.iter().map(|r| ExpenseRow::new(r, currency)));
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(4)).with(Alignment::right()));

    format!(
        "{}\n\nSorted by {}. {}\n",
        table,
        sort,
        format_page_footer(info)
    )
}

/// Format expense details for display
pub fn format_expense_details(record: &ExpenseRecord, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", record.id));
    output.push_str(&format!(
        "Date:        {}\n",
        record.date.as_deref().unwrap_or("(none)")
    ));
    output.push_str(&format!(
        "Amount:      {}\n",
        record.amount.format_with_symbol(currency)
    ));
    output.push_str(&format!("Category:    {}\n", record.category));

    if let Some(name) = &record.name {
        output.push_str(&format!("Name:        {}\n", name));
    }
    if let Some(description) = &record.description {
        output.push_str(&format!("Description: {}\n", description));
    }

    output
}
