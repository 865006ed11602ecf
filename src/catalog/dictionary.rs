use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use crate::catalog::table_catalog::TableCatalog;
use crate::parser::names::table_lookup_candidates;

static BUILTIN: LazyLock<PlatformDictionary> =
    LazyLock::new(|| PlatformDictionary::from_catalog(&TableCatalog::builtin()));

/// Read-only lookup from table name to the platforms it supports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformDictionary {
    platforms: HashMap<String, BTreeSet<String>>,
}

impl PlatformDictionary {
    /// Build the dictionary from a catalog.
    pub fn from_catalog(catalog: &TableCatalog) -> Self {
        let platforms = catalog
            .iter()
            .map(|table| {
                (
                    table.name.clone(),
                    table.platforms.iter().cloned().collect(),
                )
            })
            .collect();
        Self { platforms }
    }

    /// Dictionary of the bundled catalog, built on first use and shared
    /// for the rest of the process.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Platforms supported by `table`.
    ///
    /// Tries the name as given, then case-insensitively, then without a
    /// `main.` qualifier. Other schema qualifiers never match a catalog table.
    pub fn platforms_for(&self, table: &str) -> Option<&BTreeSet<String>> {
        table_lookup_candidates(table)
            .iter()
            .find_map(|candidate| self.platforms.get(candidate))
    }

    /// True when `table` resolves to a known table.
    pub fn contains(&self, table: &str) -> bool {
        self.platforms_for(table).is_some()
    }

    /// Number of tables.
    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    /// True when no table is known.
    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}

impl FromIterator<(String, BTreeSet<String>)> for PlatformDictionary {
    fn from_iter<T: IntoIterator<Item = (String, BTreeSet<String>)>>(iter: T) -> Self {
        Self {
            platforms: iter.into_iter().collect(),
        }
    }
}
