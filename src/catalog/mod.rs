/// Osquery tables compiled into the crate.
mod builtin;
/// Table name to supported-platform lookup built from a catalog.
pub mod dictionary;
/// Osquery table catalog: bundled, or loaded from JSON.
pub mod table_catalog;

pub use dictionary::PlatformDictionary;
pub use table_catalog::{OsqueryTable, TableCatalog};
