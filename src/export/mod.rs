//! Export module for SpendWise
//!
//! - CSV: expenses as a spreadsheet-friendly table
//! - JSON: versioned full export of expenses and profile
//! - YAML: the same full export, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_expenses_csv, write_expenses_csv};
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
