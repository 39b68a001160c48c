//! CLI commands for data export

use clap::Subcommand;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{SpendError, SpendResult};
use crate::export::{export_expenses_csv, export_full_json, export_full_yaml};
use crate::listview::SortKey;
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Expenses as CSV
    Csv {
        /// Output file path (default stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Row order
        #[arg(short, long, value_enum, default_value_t)]
        sort: SortKey,
    },

    /// Expenses and profile as versioned JSON
    Json {
        /// Output file path (default stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Expenses and profile as YAML
    Yaml {
        /// Output file path (default stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> SpendResult<()> {
    let output = match &cmd {
        ExportCommands::Csv { output, .. }
        | ExportCommands::Json { output, .. }
        | ExportCommands::Yaml { output } => output.clone(),
    };
    let mut writer = open_output(output.as_deref())?;

    match cmd {
        ExportCommands::Csv { sort, .. } => export_expenses_csv(storage, sort, &mut writer)?,
        ExportCommands::Json { pretty, .. } => export_full_json(storage, &mut writer, pretty)?,
        ExportCommands::Yaml { .. } => export_full_yaml(storage, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| SpendError::Export(format!("Failed to flush output: {}", e)))?;

    if let Some(path) = output {
        eprintln!("Exported to: {}", path.display());
    }

    Ok(())
}

fn open_output(path: Option<&Path>) -> SpendResult<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                SpendError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
