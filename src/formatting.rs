//! Display-string helpers for the console view
//!
//! Pure string production; the view decides where the text goes.

use chrono::NaiveDate;

use crate::table::Row;

/// Format a date for the date column, `Wed 10/2` style.
///
/// An absent date renders as an empty cell.
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%a %-m/%-d").to_string(),
        None => String::new(),
    }
}

/// Render rows as a text table, one line per row.
///
/// The id column is omitted: ids stay inside the rows for round-tripping
/// edits, the user never sees them. Rows are numbered from 1 so commands
/// can refer to them.
pub fn render_table(rows: &[Row]) -> String {
    if rows.is_empty() {
        return "No to-do items".to_string();
    }

    let mut result = format!("{} item(s):\n", rows.len());
    for (index, row) in rows.iter().enumerate() {
        let mark = if row.done { "[x]" } else { "[ ]" };
        result.push_str(&format!(
            "{:>3}  {} {:<10} {}\n",
            index + 1,
            mark,
            format_date(row.date),
            row.description
        ));
    }
    result
}
