use scraper::{ElementRef, Html};
use tracing::{debug, trace};

use super::{flat_text, is_tag};
use crate::error::CoreError;

/// Strategy for finding a named table inside a status page.
///
/// The stock pages title every table with a header cell, which is what
/// [`HeaderLabel`] keys on. A firmware with a different layout can plug in
/// its own strategy, including a plain function or closure of shape
/// `Fn(&Html, &str) -> Option<ElementRef>`.
pub trait TableLocator {
    fn locate<'a>(&self, document: &'a Html, label: &str) -> Option<ElementRef<'a>>;
}

/// Finds the first `<th>` (depth-first, document order) whose flattened text
/// equals the label exactly, then returns its nearest `<table>` ancestor.
///
/// Matching is case-sensitive and whole-string; `"Downstream"` does not match
/// a header reading `"Downstream Bonded Channels"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderLabel;

impl TableLocator for HeaderLabel {
    fn locate<'a>(&self, document: &'a Html, label: &str) -> Option<ElementRef<'a>> {
        let header = document
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|el| is_tag(*el, "th") && flat_text(*el) == label)?;
        trace!(label, "matched header cell");

        header
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find(|el| is_tag(*el, "table"))
    }
}

impl<F> TableLocator for F
where
    F: for<'a> Fn(&'a Html, &str) -> Option<ElementRef<'a>>,
{
    fn locate<'a>(&self, document: &'a Html, label: &str) -> Option<ElementRef<'a>> {
        self(document, label)
    }
}

/// Locate a required table, failing with [`CoreError::TableNotFound`].
pub fn find_table<'a, L>(
    locator: &L,
    document: &'a Html,
    label: &str,
) -> Result<ElementRef<'a>, CoreError>
where
    L: TableLocator + ?Sized,
{
    locator.locate(document, label).ok_or_else(|| {
        debug!(label, "table not found");
        CoreError::TableNotFound {
            label: label.to_owned(),
        }
    })
}
