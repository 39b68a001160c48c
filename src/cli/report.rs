//! CLI commands for reports
//!
//! The dashboard plus its daily and category views on their own.

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use super::parse_date;
use crate::config::settings::Settings;
use crate::display::{format_category_table, format_daily_series};
use crate::error::{SpendError, SpendResult};
use crate::reports::daily::{daily_series, trailing};
use crate::reports::{category_breakdown, top_categories};
use crate::services::ReportService;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Month totals, trend, budget use, daily and category breakdowns
    #[command(alias = "dash")]
    Dashboard {
        /// Anchor the month windows on this date (YYYY-MM-DD, default today)
        #[arg(long)]
        today: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Spending per day
    Daily {
        /// Show only the last N days that have spending
        #[arg(short, long)]
        days: Option<usize>,
    },

    /// Spending per category
    Categories {
        /// Show top N categories only
        #[arg(long)]
        top: Option<usize>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> SpendResult<()> {
    match cmd {
        ReportCommands::Dashboard { today, output } => {
            let today = match today {
                Some(s) => parse_date(&s)?,
                None => Local::now().date_naive(),
            };
            handle_dashboard(storage, settings, today, output)
        }
        ReportCommands::Daily { days } => {
            let snapshot = ReportService::new(storage).snapshot()?;
            let series = daily_series(&snapshot.records);
            let window = match days {
                Some(days) => trailing(&series, days),
                None => &series[..],
            };
            print!("{}", format_daily_series(window, &settings.currency_symbol));
            Ok(())
        }
        ReportCommands::Categories { top } => {
            let snapshot = ReportService::new(storage).snapshot()?;
            let breakdown = category_breakdown(&snapshot.records);
            let shown = top_categories(&breakdown, top.unwrap_or(breakdown.len()));
            print!("{}", format_category_table(&shown, &settings.currency_symbol));
            Ok(())
        }
    }
}

fn handle_dashboard(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    output: Option<PathBuf>,
) -> SpendResult<()> {
    let report = ReportService::new(storage).dashboard(today, settings.fallback_budget)?;

    if let Some(path) = output {
        let file = File::create(&path).map_err(|e| {
            SpendError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        report.export_csv(BufWriter::new(file))?;
        println!("Dashboard exported to: {}", path.display());
    } else {
        print!(
            "{}",
            report.format_terminal(&settings.currency_symbol, settings.trend_window_days)
        );
    }

    Ok(())
}
