//! Find the tables an osquery SQL query reads and the platforms it can run on.
#![warn(missing_docs)]

/// Osquery table catalog and the table-to-platform dictionary built from it.
pub mod catalog;
/// Platform compatibility resolution and per-query reports.
pub mod compat;
/// Crate error type.
pub mod error;
/// Report rendering for the CLI.
pub mod output;
/// SQL parsing, syntax tree ingestion and table extraction.
pub mod parser;

pub use catalog::{OsqueryTable, PlatformDictionary, TableCatalog};
pub use compat::analysis::{analyze_query, QueryReport, TableSupport};
pub use compat::resolver::{list_compatible_platforms, resolve, Compatibility};
pub use error::{Error, Result};
pub use parser::table_extractor::{extract_tables, parse_sql_tables, TableExtraction};

/// Returned by [`parse_sql_tables`] when the query does not parse, and passed
/// through unchanged by [`list_compatible_platforms`].
pub const INVALID_QUERY: &str = "Invalid query";

/// Returned by [`list_compatible_platforms`] when no platform supports every table.
pub const NO_COMPATIBLE_PLATFORM: &str = "None";
