// ── HTML table extraction ──
//
// The status pages are plain `<table>`s with a title header cell and one
// row per attribute. `locate` finds the table, `parse` flattens it.

mod locate;
mod parse;

pub use locate::{HeaderLabel, TableLocator, find_table};
pub use parse::{RowMap, parse_table};

use scraper::ElementRef;

/// Flattened text of an element: every descendant text node trimmed, empty
/// ones dropped, the rest joined with a single space.
pub fn flat_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_tag(element: ElementRef<'_>, tag: &str) -> bool {
    element.value().name() == tag
}
