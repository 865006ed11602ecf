/// Per-query report combining extraction and per-table platform support.
pub mod analysis;
/// Platform intersection across the tables referenced by a query.
pub mod resolver;
