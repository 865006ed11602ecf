/// Return the identifier without its surrounding quotes.
///
/// SQLite accepts `"name"`, `` `name` `` and `[name]` as quoted identifiers.
pub fn unquote_identifier(ident: &str) -> &str {
    let quoted = |open: char, close: char| {
        ident
            .strip_prefix(open)
            .and_then(|s| s.strip_suffix(close))
    };
    quoted('"', '"')
        .or_else(|| quoted('`', '`'))
        .or_else(|| quoted('[', ']'))
        .unwrap_or(ident)
}

/// Normalize an identifier for case-insensitive matching.
///
/// Trims whitespace, removes surrounding quotes on a single identifier,
/// and lowercases the result.
pub fn normalize_identifier(ident: &str) -> String {
    unquote_identifier(ident.trim()).to_ascii_lowercase()
}

/// Split a possibly schema-qualified name into its dot-separated parts.
///
/// Dots inside quoted identifiers do not split, e.g. `"my.schema"."table.name"`.
pub fn split_qualified_name(name: &str) -> Vec<&str> {
    let mut closing: Option<char> = None;
    let mut start = 0usize;
    let mut parts = Vec::new();

    for (idx, ch) in name.char_indices() {
        match (closing, ch) {
            (Some(close), c) if c == close => closing = None,
            (Some(_), _) => {}
            (None, '"') => closing = Some('"'),
            (None, '`') => closing = Some('`'),
            (None, '[') => closing = Some(']'),
            (None, '.') => {
                parts.push(name[start..idx].trim());
                start = idx + 1;
            }
            (None, _) => {}
        }
    }
    parts.push(name[start..].trim());
    parts
}

/// Render a relation name the way it is reported to callers: each part
/// unquoted, parts joined with `.`.
///
/// Examples:
/// - `"users"` -> `users`
/// - `main.[users]` -> `main.users`
pub fn display_relation_name(name: &str) -> String {
    split_qualified_name(name.trim())
        .into_iter()
        .map(unquote_identifier)
        .collect::<Vec<_>>()
        .join(".")
}

/// Normalize an object name to its terminal relation identifier.
///
/// Examples:
/// - `"main.users"` -> `"users"`
/// - `"\"main\".\"Users\""` -> `"users"`
pub fn normalize_relation_name(name: &str) -> String {
    split_qualified_name(name.trim())
        .last()
        .map(|relation| normalize_identifier(relation))
        .unwrap_or_default()
}

/// Schema every osquery table lives in.
pub const MAIN_SCHEMA: &str = "main";

/// Build lookup keys for table resolution.
///
/// Ordered from most specific to least specific: the name as given, its
/// lowercase form, then the lowercase relation of a `main.`-qualified name.
/// Any other qualifier (`temp.users`, `other.users`) only matches exactly.
pub fn table_lookup_candidates(name: &str) -> Vec<String> {
    let mut candidates = vec![name.to_string(), normalize_identifier(name)];
    if let [schema, _relation] = split_qualified_name(name.trim()).as_slice() {
        if normalize_identifier(schema) == MAIN_SCHEMA {
            candidates.push(normalize_relation_name(name));
        }
    }

    let mut deduped: Vec<String> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !candidate.is_empty() && !deduped.contains(&candidate) {
            deduped.push(candidate);
        }
    }
    deduped
}
