use indexmap::IndexMap;
use scraper::ElementRef;
use tracing::trace;

use super::{flat_text, is_tag};

/// Label → per-column values extracted from one table.
///
/// Every value sequence has exactly [`columns`](Self::columns) entries. The
/// width comes from the first data row; later rows are padded with empty
/// strings or cut down to fit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowMap {
    rows: IndexMap<String, Vec<String>>,
    columns: usize,
}

impl RowMap {
    /// Number of data columns (channels) in the table.
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.rows.get(label).map(Vec::as_slice)
    }

    /// Rows in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.rows.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    fn push_row(&mut self, label: String, mut values: Vec<String>) {
        if self.rows.is_empty() {
            self.columns = values.len();
        }
        values.resize(self.columns, String::new());
        self.rows.insert(label, values);
    }
}

impl<L, V> FromIterator<(L, Vec<V>)> for RowMap
where
    L: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, Vec<V>)>>(iter: I) -> Self {
        let mut map = Self::default();
        for (label, values) in iter {
            map.push_row(label.into(), values.into_iter().map(Into::into).collect());
        }
        map
    }
}

/// Flatten a table into a [`RowMap`].
///
/// A data row is a `<tr>` whose first cell is a `<td>`; header rows are
/// skipped. The first `<td>` is the label and the rest are the values. A
/// data row is taken whole, so tables nested inside its cells (the device
/// uses them for footnotes) fold into the cell text rather than producing
/// rows of their own.
pub fn parse_table(table: ElementRef<'_>) -> RowMap {
    let mut rows = Vec::new();
    collect_data_rows(table, &mut rows);

    let mut map = RowMap::default();
    for row in rows {
        let mut cells = cells(row).filter(|c| is_tag(*c, "td")).map(flat_text);
        let Some(label) = cells.next() else {
            continue;
        };
        map.push_row(label, cells.collect());
    }

    trace!(rows = map.len(), columns = map.columns(), "parsed table");
    map
}

fn collect_data_rows<'a>(node: ElementRef<'a>, out: &mut Vec<ElementRef<'a>>) {
    for child in node.children().filter_map(ElementRef::wrap) {
        if is_tag(child, "tr") && is_data_row(child) {
            out.push(child);
        } else {
            collect_data_rows(child, out);
        }
    }
}

fn is_data_row(row: ElementRef<'_>) -> bool {
    cells(row).next().is_some_and(|first| is_tag(first, "td"))
}

fn cells<'a>(row: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|c| is_tag(*c, "td") || is_tag(*c, "th"))
}
