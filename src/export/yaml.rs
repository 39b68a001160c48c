//! YAML Export functionality
//!
//! The same content as the JSON export, for reading by eye.

use std::io::Write;

use crate::error::{SpendError, SpendResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export the full database to YAML format
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> SpendResult<()> {
    let export = FullExport::from_storage(storage)?;

    writeln!(writer, "# SpendWise export")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|_| writeln!(writer, "# App Version: {}", export.app_version))
        .and_then(|_| writeln!(writer))
        .map_err(|e| SpendError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| SpendError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SpendPaths;
    use crate::models::{ExpenseRecord, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_yaml_export() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(SpendPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        storage
            .expenses
            .insert(ExpenseRecord::new(
                "a",
                Money::from_cents(999),
                "Health",
                NaiveDate::from_ymd_opt(2024, 5, 5).unwrap(),
            ))
            .unwrap();

        let mut buffer = Vec::new();
        export_full_yaml(&storage, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.starts_with("# SpendWise export"));
        assert!(output.contains("category: Health"));

        let yaml = output.lines().filter(|l| !l.starts_with('#')).collect::<Vec<_>>().join("\n");
        let parsed: FullExport = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.expenses[0].amount, Money::from_cents(999));
    }
}
