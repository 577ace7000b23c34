//! Table output formatting
//!
//! Commands render their display structs (`From<Model>` conversions living
//! next to each command) through one table shape, so every listing in the
//! tool lines up the same way.

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Printed instead of an empty table; Graph returns an empty `value` array
/// rather than an error when a filter matches nothing
const EMPTY_MESSAGE: &str = "No matching resources found in this tenant.";

/// Render display rows as a rounded table with a centered header row
pub fn format_table<T: Tabled>(rows: &[T]) -> String {
    if rows.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}
