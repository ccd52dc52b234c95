//! Fixed-width text-table rendering for task listings.

use crate::task::domain::{Task, TaskStatus};

/// Width of the rule separating the header from the rows.
const RULE_WIDTH: usize = 80;
/// Column width for the title and description cells.
const CELL_WIDTH: usize = 30;
/// Characters kept before the ellipsis when a cell overflows.
const TRUNCATED_LEN: usize = 27;

/// Renders tasks as a fixed-width table with `ID`, `Status`, `Title`, and
/// `Description` columns.
pub fn table(tasks: &[Task]) -> String {
    let mut out = format!(
        "{:<36} {:<10} {:<30} {}",
        "ID", "Status", "Title", "Description"
    );
    out.push('\n');
    out.push_str(&"-".repeat(RULE_WIDTH));
    for task in tasks {
        let title = truncate(task.title().as_str());
        let description = truncate(task.description().unwrap_or_default());
        out.push('\n');
        // Identifiers are 36 characters, so the ID column never overflows.
        out.push_str(&format!(
            "{:<36} {:<10} {title:<30} {description}",
            task.id().to_string(),
            status_badge(task.status()),
        ));
    }
    out
}

/// Maps a status to its display badge.
const fn status_badge(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Incomplete => "TODO",
        TaskStatus::Complete => "DONE",
    }
}

/// Truncates cells longer than the column width to 27 characters plus an
/// ellipsis. Counts characters, not bytes.
fn truncate(text: &str) -> String {
    if text.chars().count() > CELL_WIDTH {
        let head: String = text.chars().take(TRUNCATED_LEN).collect();
        format!("{head}...")
    } else {
        text.to_owned()
    }
}
