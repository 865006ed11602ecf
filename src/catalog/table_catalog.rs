use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::builtin::BUILTIN_TABLES;
use crate::error::{Error, Result};

/// One osquery table as declared by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsqueryTable {
    /// Table name as used in SQL.
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Platform identifiers the table is available on (`darwin`, `linux`, ...).
    pub platforms: Vec<String>,
    /// Whether the table is backed by the osquery events framework.
    #[serde(default)]
    pub evented: bool,
}

impl OsqueryTable {
    /// Create a table entry with no description.
    pub fn new<I, S>(name: impl Into<String>, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: String::new(),
            platforms: platforms.into_iter().map(Into::into).collect(),
            evented: false,
        }
    }

    /// True when the table lists `platform`.
    pub fn supports(&self, platform: &str) -> bool {
        self.platforms.iter().any(|p| p == platform)
    }
}

/// Catalog of known osquery tables. Table names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TableCatalog {
    tables: Vec<OsqueryTable>,
}

impl TableCatalog {
    /// Build a catalog, rejecting empty and duplicate table names.
    pub fn from_tables(tables: Vec<OsqueryTable>) -> Result<Self> {
        {
            let mut seen = HashSet::with_capacity(tables.len());
            for (index, table) in tables.iter().enumerate() {
                if table.name.trim().is_empty() {
                    return Err(Error::EmptyTableName { index });
                }
                if !seen.insert(table.name.as_str()) {
                    return Err(Error::DuplicateTable(table.name.clone()));
                }
            }
        }
        Ok(Self { tables })
    }

    /// Parse a catalog from a JSON array of tables.
    pub fn from_json(json: &str) -> Result<Self> {
        let tables: Vec<OsqueryTable> = serde_json::from_str(json)?;
        Self::from_tables(tables)
    }

    /// Read a JSON catalog from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The catalog bundled with the crate.
    pub fn builtin() -> Self {
        let tables = BUILTIN_TABLES
            .iter()
            .map(|table| OsqueryTable {
                name: table.name.to_string(),
                description: table.description.to_string(),
                platforms: table.platforms.iter().map(ToString::to_string).collect(),
                evented: table.evented,
            })
            .collect();
        Self { tables }
    }

    /// Look up a table by its exact name.
    pub fn get(&self, name: &str) -> Option<&OsqueryTable> {
        self.tables.iter().find(|table| table.name == name)
    }

    /// Iterate over the tables in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &OsqueryTable> {
        self.tables.iter()
    }

    /// Number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// True when the catalog has no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Every platform mentioned by at least one table.
    pub fn platforms(&self) -> BTreeSet<&str> {
        self.tables
            .iter()
            .flat_map(|table| table.platforms.iter().map(String::as_str))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json_fills_optional_fields_with_defaults() {
        let catalog = TableCatalog::from_json(
            r#"[
  {"name": "users", "platforms": ["darwin", "linux"]},
  {"name": "process_events", "platforms": ["linux"], "evented": true, "description": "Process starts"}
]"#,
        )
        .expect("catalog json should parse");

        assert_eq!(catalog.len(), 2);
        let users = catalog.get("users").expect("users should be present");
        assert!(users.description.is_empty());
        assert!(!users.evented);
        assert!(users.supports("linux"));
        assert!(!users.supports("windows"));
        assert!(catalog.get("process_events").is_some_and(|t| t.evented));
    }

    #[test]
    fn from_tables_rejects_duplicate_names() {
        let err = TableCatalog::from_tables(vec![
            OsqueryTable::new("users", ["darwin"]),
            OsqueryTable::new("users", ["linux"]),
        ])
        .expect_err("duplicate names should be rejected");
        assert!(matches!(err, Error::DuplicateTable(ref name) if name == "users"));
    }

    #[test]
    fn from_tables_rejects_empty_names() {
        let err = TableCatalog::from_tables(vec![
            OsqueryTable::new("users", ["darwin"]),
            OsqueryTable::new("  ", ["linux"]),
        ])
        .expect_err("empty names should be rejected");
        assert!(matches!(err, Error::EmptyTableName { index: 1 }));
    }

    #[test]
    fn from_json_rejects_missing_platforms() {
        let err = TableCatalog::from_json(r#"[{"name": "users"}]"#)
            .expect_err("platforms are required");
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn builtin_catalog_has_unique_names() {
        let builtin = TableCatalog::builtin();
        let revalidated = TableCatalog::from_tables(builtin.iter().cloned().collect())
            .expect("builtin catalog should be valid");
        assert_eq!(revalidated, builtin);
    }

    #[test]
    fn builtin_catalog_covers_the_four_osquery_platforms() {
        let catalog = TableCatalog::builtin();
        assert_eq!(
            catalog.platforms().into_iter().collect::<Vec<_>>(),
            vec!["darwin", "freebsd", "linux", "windows"]
        );
        assert!(catalog.iter().all(|table| !table.platforms.is_empty()));
    }

    #[test]
    fn catalog_serializes_as_plain_array() {
        let catalog =
            TableCatalog::from_tables(vec![OsqueryTable::new("users", ["darwin"])]).unwrap();
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(
            json,
            r#"[{"name":"users","description":"","platforms":["darwin"],"evented":false}]"#
        );
        assert_eq!(TableCatalog::from_json(&json).unwrap(), catalog);
    }
}
