/// Renders query reports as text, JSON or markdown.
pub mod formatter;
/// Builds a markdown platform-support report for one query.
pub mod report;
