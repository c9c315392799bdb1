//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats use serde, plain emits one identifier per line.

use std::io::{self, IsTerminal, Write};

use owo_colors::{OwoColorize, Style as Paint};
use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, OutputFormat};

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
    }
}

/// Paint a modem status string: green when the modem reports itself
/// operational, yellow for anything else.
pub fn status_style(status: &str, color: bool) -> String {
    if !color {
        return status.to_owned();
    }
    let paint = if status.eq_ignore_ascii_case("operational") {
        Paint::new().green().bold()
    } else {
        Paint::new().yellow()
    };
    status.style(paint).to_string()
}

/// Bold section titles in multi-table views.
pub fn heading(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_owned()
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list of serde-serializable + tabled items in the chosen format.
///
/// - `table`: uses the `Tabled` derive to build a pretty table
/// - `json` / `json-compact`: serializes the records via serde
/// - `yaml`: serializes via serde_yaml
/// - `plain`: calls `id_fn` on each item to emit one identifier per line
pub fn render_list<T, R>(
    format: OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            render_table(&rows)
        }
        OutputFormat::Plain => data.iter().map(&id_fn).collect::<Vec<_>>().join("\n"),
        structured => render_structured(structured, data),
    }
}

/// Render a single serde-serializable item in the chosen format.
///
/// Table rendering uses a custom `detail_fn` that returns a pre-formatted
/// string, since single-item detail views don't use the `Tabled` derive.
pub fn render_single<T>(
    format: OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Table => detail_fn(data),
        OutputFormat::Plain => id_fn(data),
        structured => render_structured(structured, data),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

pub(crate) fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

/// JSON or YAML for anything serde can describe.
pub(crate) fn render_structured<T: serde::Serialize + ?Sized>(
    format: OutputFormat,
    data: &T,
) -> String {
    match format {
        OutputFormat::JsonCompact => {
            serde_json::to_string(data).expect("serialization should not fail")
        }
        OutputFormat::Yaml => serde_yaml::to_string(data).expect("serialization should not fail"),
        _ => serde_json::to_string_pretty(data).expect("serialization should not fail"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Item {
        id: u32,
        name: &'static str,
    }

    #[derive(Tabled)]
    struct ItemRow {
        #[tabled(rename = "ID")]
        id: u32,
    }

    const ITEMS: [Item; 2] = [Item { id: 3, name: "a" }, Item { id: 1, name: "b" }];

    fn list(format: OutputFormat) -> String {
        render_list(format, &ITEMS, |i| ItemRow { id: i.id }, |i| i.id.to_string())
    }

    #[test]
    fn plain_lists_one_id_per_line() {
        assert_eq!(list(OutputFormat::Plain), "3\n1");
    }

    #[test]
    fn compact_json_is_one_line() {
        assert_eq!(
            list(OutputFormat::JsonCompact),
            r#"[{"id":3,"name":"a"},{"id":1,"name":"b"}]"#
        );
    }

    #[test]
    fn table_has_header_and_rows() {
        let out = list(OutputFormat::Table);
        assert!(out.contains("ID"));
        assert!(out.contains('3'));
        assert!(out.starts_with('╭'));
    }

    #[test]
    fn yaml_single_item() {
        let out = render_single(OutputFormat::Yaml, &ITEMS[0], |_| String::new(), |_| String::new());
        assert_eq!(out, "id: 3\nname: a\n");
    }

    #[test]
    fn status_uncolored_passthrough() {
        assert_eq!(status_style("Operational", false), "Operational");
        assert!(status_style("Operational", true).contains("\u{1b}["));
    }
}
