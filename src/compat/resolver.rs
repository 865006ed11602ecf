use std::collections::BTreeSet;

use serde::Serialize;

use crate::catalog::PlatformDictionary;
use crate::parser::table_extractor::TableExtraction;
use crate::{INVALID_QUERY, NO_COMPATIBLE_PLATFORM};

/// Platforms a query can run on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "platforms", rename_all = "snake_case")]
pub enum Compatibility {
    /// Platforms common to every referenced table, sorted.
    Platforms(Vec<String>),
    /// No platform supports every referenced table.
    NoCommonPlatform,
    /// The query did not parse.
    InvalidQuery,
}

impl Compatibility {
    /// Compatible platforms, empty unless [`Compatibility::Platforms`].
    pub fn platforms(&self) -> &[String] {
        match self {
            Compatibility::Platforms(platforms) => platforms,
            Compatibility::NoCommonPlatform | Compatibility::InvalidQuery => &[],
        }
    }

    /// True when at least one platform can run the query.
    pub fn is_compatible(&self) -> bool {
        matches!(self, Compatibility::Platforms(_))
    }

    /// Boundary form: the platform list, `["None"]` or `["Invalid query"]`.
    pub fn into_sentinel_list(self) -> Vec<String> {
        match self {
            Compatibility::Platforms(platforms) => platforms,
            Compatibility::NoCommonPlatform => vec![NO_COMPATIBLE_PLATFORM.to_string()],
            Compatibility::InvalidQuery => vec![INVALID_QUERY.to_string()],
        }
    }
}

/// Intersect the platform sets of `tables`.
///
/// An unknown table contributes no platform. An empty table list has no
/// common platform.
pub fn resolve<S: AsRef<str>>(tables: &[S], dictionary: &PlatformDictionary) -> Compatibility {
    let mut common: Option<BTreeSet<&str>> = None;

    for table in tables {
        let table = table.as_ref();
        let supported: BTreeSet<&str> = match dictionary.platforms_for(table) {
            Some(platforms) => platforms.iter().map(String::as_str).collect(),
            None => {
                tracing::debug!(table = %table, "table not found in platform dictionary");
                BTreeSet::new()
            }
        };

        let narrowed = match common {
            None => supported,
            Some(current) => current.intersection(&supported).copied().collect(),
        };
        if narrowed.is_empty() {
            return Compatibility::NoCommonPlatform;
        }
        common = Some(narrowed);
    }

    match common {
        Some(platforms) => {
            Compatibility::Platforms(platforms.into_iter().map(ToString::to_string).collect())
        }
        None => Compatibility::NoCommonPlatform,
    }
}

/// Resolve the outcome of table extraction; an invalid query stays invalid.
pub fn resolve_extraction(
    extraction: &TableExtraction,
    dictionary: &PlatformDictionary,
) -> Compatibility {
    match extraction {
        TableExtraction::Tables { tables } => resolve(tables.as_slice(), dictionary),
        TableExtraction::Invalid { .. } => Compatibility::InvalidQuery,
    }
}

/// Sentinel-based resolution against `dictionary`.
///
/// A list starting with `"Invalid query"` is returned unchanged. Otherwise the
/// result is the sorted platform list, or `["None"]`.
pub fn list_compatible_platforms_with(
    table_names: &[String],
    dictionary: &PlatformDictionary,
) -> Vec<String> {
    if table_names.first().is_some_and(|first| first == INVALID_QUERY) {
        return table_names.to_vec();
    }
    resolve(table_names, dictionary).into_sentinel_list()
}

/// [`list_compatible_platforms_with`] against the bundled osquery catalog.
pub fn list_compatible_platforms(table_names: &[String]) -> Vec<String> {
    list_compatible_platforms_with(table_names, PlatformDictionary::builtin())
}
