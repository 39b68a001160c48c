//! CLI commands for the monthly budget

use chrono::Local;
use clap::Subcommand;

use super::parse_amount;
use crate::config::settings::Settings;
use crate::error::SpendResult;
use crate::reports::{budget_utilization, month_comparison};
use crate::services::{BudgetService, ReportService};
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Show the monthly budget and how much of it is used
    Show,

    /// Set the monthly budget
    Set {
        /// Amount per month (e.g. 2000)
        amount: String,
    },
}

/// Handle budget commands
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> SpendResult<()> {
    let service = BudgetService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Show => {
            let profile = service.profile()?;
            let budget = service.effective_budget(settings.fallback_budget)?;

            match (profile.budget, budget) {
                (Some(own), _) => println!("Monthly budget: {}", own.format_with_symbol(currency)),
                (None, Some(fallback)) => println!(
                    "Monthly budget: {} (default, none set)",
                    fallback.format_with_symbol(currency)
                ),
                (None, None) => println!("Monthly budget: not set"),
            }

            let snapshot = ReportService::new(storage).snapshot()?;
            let month = month_comparison(&snapshot.records, Local::now().date_naive());
            println!(
                "Spent this month: {} ({})",
                month.current_month_total.format_with_symbol(currency),
                budget_utilization(month.current_month_total, budget)
            );
        }

        BudgetCommands::Set { amount } => {
            let profile = service.set_budget(parse_amount(&amount)?)?;
            if let Some(budget) = profile.budget {
                println!("Monthly budget set to {}", budget.format_with_symbol(currency));
            }
        }
    }

    Ok(())
}
