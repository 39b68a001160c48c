use anyhow::Result;
use clap::{Parser, Subcommand};

use spendwise::cli::{
    handle_budget_command, handle_expense_command, handle_export_command, handle_report_command,
    BudgetCommands, ExpenseCommands, ExportCommands, ReportCommands,
};
use spendwise::config::{paths::SpendPaths, settings::Settings};
use spendwise::storage::Storage;

#[derive(Parser)]
#[command(
    name = "spendwise",
    author = "Kaylee Beyene",
    version,
    about = "Terminal expense tracker with spending analytics",
    long_about = "SpendWise logs your expenses and turns them into a dashboard: \
                  this month against last month, how much of your monthly budget \
                  is used, and where the money went by day and by category."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Dashboard and spending reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Export data
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show recent changes from the audit log
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Initialize the data directory with default settings
    Init {
        /// Name stored on the profile
        #[arg(long)]
        username: Option<String>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SpendPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, &settings, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, cmd)?,
        Some(Commands::Export(cmd)) => handle_export_command(&storage, cmd)?,
        Some(Commands::Audit { limit }) => {
            let entries = storage.audit().read_recent(limit)?;
            if entries.is_empty() {
                println!("No changes recorded yet.");
            }
            for entry in entries.iter().rev() {
                println!("{}", entry.format_human_readable());
            }
        }
        Some(Commands::Init { username }) => {
            println!("Initializing SpendWise at: {}", paths.base_dir().display());
            settings.save(&paths)?;

            if let Some(username) = username {
                let mut profile = storage.profile.get()?;
                profile.username = username;
                storage.profile.update(profile)?;
            }
            storage.save_all()?;

            println!("Initialization complete!");
            println!();
            println!("Log your first expense with:");
            println!("  spendwise expense add 12.50 --category food");
        }
        Some(Commands::Config) => {
            println!("SpendWise Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Page size:         {}", settings.page_size);
            println!("  Default sort:      {}", settings.default_sort);
            println!("  Trend window days: {}", settings.trend_window_days);
            match settings.fallback_budget {
                Some(budget) => println!(
                    "  Fallback budget:   {}",
                    budget.format_with_symbol(&settings.currency_symbol)
                ),
                None => println!("  Fallback budget:   (none)"),
            }
        }
        None => {
            println!("SpendWise - expense tracking with spending analytics");
            println!();
            println!("Run 'spendwise --help' for usage information.");
            println!("Run 'spendwise report dashboard' to see this month at a glance.");
        }
    }

    Ok(())
}
