//! CSV Export functionality
//!
//! Writes the stored expenses, one row each, in the table's sort order.

use std::io::Write;

use crate::error::SpendResult;
use crate::listview::{sort_records, SortKey};
use crate::models::ExpenseRecord;
use crate::storage::Storage;

const HEADER: [&str; 6] = ["ID", "Date", "Category", "Name", "Description", "Amount"];

/// Write `records` as CSV in the order given
pub fn write_expenses_csv<W: Write>(records: &[ExpenseRecord], writer: W) -> SpendResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(HEADER)?;

    for record in records {
        let amount = format!("{:.2}", record.amount.to_decimal());
        csv.write_record([
            record.id.as_str(),
            record.date.as_deref().unwrap_or(""),
            record.category.as_str(),
            record.name.as_deref().unwrap_or(""),
            record.description.as_deref().unwrap_or(""),
            amount.as_str(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Export every stored expense to CSV, sorted by `sort`
pub fn export_expenses_csv<W: Write>(storage: &Storage, sort: SortKey, writer: W) -> SpendResult<()> {
    let records = sort_records(&storage.expenses.get_all()?, sort);
    write_expenses_csv(&records, writer)
}
