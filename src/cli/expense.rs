//! CLI commands for expenses
//!
//! Add, list, show, edit and delete expenses from the command line.

use clap::Subcommand;

use super::{parse_amount, parse_date};
use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::{SpendError, SpendResult};
use crate::listview::{clamp_page, CommitOutcome, SortKey};
use crate::models::{CategoryChoice, ExpenseId, PresetCategory};
use crate::services::{CreateExpenseInput, DeleteOutcome, ExpenseChanges, ExpenseService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Log a new expense
    Add {
        /// Amount spent (e.g. 12.50)
        amount: String,

        /// Preset category (food, transport, shopping, entertainment, health, bills)
        #[arg(short, long, conflicts_with = "custom", required_unless_present = "custom")]
        category: Option<String>,

        /// Free-text category instead of a preset
        #[arg(long)]
        custom: Option<String>,

        /// Description
        #[arg(short = 'D', long)]
        description: Option<String>,

        /// Display name
        #[arg(short, long)]
        name: Option<String>,

        /// Date (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses one page at a time
    #[command(alias = "ls")]
    List {
        /// Column to sort by
        #[arg(short, long, value_enum)]
        sort: Option<SortKey>,

        /// Page number (starting at 1)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Rows per page
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Show one expense
    Show {
        /// Expense ID (or a unique prefix)
        id: String,
    },

    /// Change fields of an expense
    Edit {
        /// Expense ID (or a unique prefix)
        id: String,

        /// New amount
        #[arg(short, long)]
        amount: Option<String>,

        /// Preset category
        #[arg(short, long, conflicts_with = "custom")]
        category: Option<String>,

        /// Free-text category
        #[arg(long)]
        custom: Option<String>,

        /// Description (empty string clears it)
        #[arg(short = 'D', long)]
        description: Option<String>,

        /// Display name (empty string clears it)
        #[arg(short, long)]
        name: Option<String>,

        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID (or a unique prefix)
        id: String,
    },

    /// List the preset categories
    Categories,
}

/// Handle expense commands
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> SpendResult<()> {
    let service = ExpenseService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            custom,
            description,
            name,
            date,
        } => {
            let category = category_choice(category, custom)?.ok_or_else(|| {
                SpendError::Validation("Pick a category with --category or --custom".into())
            })?;

            let record = service.create(CreateExpenseInput {
                amount: parse_amount(&amount)?,
                category,
                description,
                name,
                date: date.as_deref().map(parse_date).transpose()?,
            })?;

            println!(
                "Logged {} for {} on {}",
                record.amount.format_with_symbol(currency),
                record.category,
                record.date.as_deref().unwrap_or("-")
            );
            println!("  ID: {}", record.id);
        }

        ExpenseCommands::List {
            sort,
            page,
            page_size,
        } => {
            let sort = sort.unwrap_or(settings.default_sort);
            let page_size = page_size.unwrap_or(settings.page_size).max(1);
            let listing = service.list(sort, page, page_size)?;

            print!(
                "{}",
                format_expense_table(&listing.records, &listing.info, sort, currency)
            );
            if listing.records.is_empty() && listing.info.total_items > 0 {
                println!(
                    "Last page is {}.",
                    clamp_page(page, listing.info.total_items, page_size)
                );
            }
            if listing.malformed_count > 0 {
                println!(
                    "Note: {} stored entries could not be read and are not shown.",
                    listing.malformed_count
                );
            }
        }

        ExpenseCommands::Show { id } => {
            let record = service.find(&id)?;
            print!("{}", format_expense_details(&record, currency));
        }

        ExpenseCommands::Edit {
            id,
            amount,
            category,
            custom,
            description,
            name,
            date,
        } => {
            let changes = ExpenseChanges {
                amount: amount.as_deref().map(parse_amount).transpose()?,
                category: category_choice(category, custom)?,
                description,
                name,
                date: date.as_deref().map(parse_date).transpose()?,
            };

            let report = service.edit(&id, changes)?;
            match report.outcome {
                CommitOutcome::Applied { id } => {
                    println!("Updated expense {}", id);
                    print!("{}", format_expense_details(&report.after, currency));
                }
                CommitOutcome::LostUpdate { id } => {
                    println!(
                        "Expense {} was removed before the edit could be saved; nothing changed.",
                        id
                    );
                }
                CommitOutcome::NothingToCommit => println!("Nothing to update."),
            }
        }

        ExpenseCommands::Delete { id } => {
            let target = match service.find(&id) {
                Ok(record) => record.id,
                Err(e) if e.is_not_found() => ExpenseId::from(id.trim()),
                Err(e) => return Err(e),
            };

            match service.delete(&target)? {
                DeleteOutcome::Deleted(record) => println!(
                    "Deleted expense {} ({} for {})",
                    record.id,
                    record.amount.format_with_symbol(currency),
                    record.category
                ),
                DeleteOutcome::NotPresent => {
                    println!("No expense with ID '{}'; nothing removed.", target)
                }
            }
        }

        ExpenseCommands::Categories => {
            for preset in PresetCategory::ALL {
                println!("{} {}", preset.icon(), preset.label());
            }
            println!("Anything else: --custom \"<text>\"");
        }
    }

    Ok(())
}

fn category_choice(
    category: Option<String>,
    custom: Option<String>,
) -> SpendResult<Option<CategoryChoice>> {
    match (category, custom) {
        (Some(preset), _) => Ok(Some(CategoryChoice::Preset(preset.parse()?))),
        (None, Some(text)) => Ok(Some(CategoryChoice::Custom(text))),
        (None, None) => Ok(None),
    }
}
