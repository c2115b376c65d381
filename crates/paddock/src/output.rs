//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats use serde, plain emits one identifier per line.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use paddock_api::PageMeta;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list of serde-serializable + tabled items in the chosen format.
///
/// - `table`: uses the `Tabled` derive to build a pretty table
/// - `json` / `json-compact`: serializes the original data via serde
/// - `yaml`: serializes via serde_yaml
/// - `plain`: calls `id_fn` on each item to emit one identifier per line
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            Ok(render_table(&rows))
        }
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => Ok(data.iter().map(&id_fn).collect::<Vec<_>>().join("\n")),
    }
}

/// Render a single serde-serializable item in the chosen format.
///
/// Table rendering uses a custom `detail_fn` that returns a pre-formatted
/// string, since single-item detail views don't use `Tabled` derive.
pub fn render_single<T>(
    format: &OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Table => Ok(detail_fn(data)),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => Ok(id_fn(data)),
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

/// Print a pagination footer to stderr for table output.
///
/// Dimmed when the effective `--color` mode allows it, so the footer reads
/// as chrome rather than data.
pub fn print_page_footer(global: &GlobalOpts, meta: &PageMeta) {
    if global.quiet || !matches!(global.output, OutputFormat::Table) {
        return;
    }
    let footer = format!(
        "Page {}/{} ({} total)",
        meta.page, meta.total_pages, meta.total
    );
    if should_color(&global.color) {
        eprintln!("{}", footer.dimmed());
    } else {
        eprintln!("{footer}");
    }
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> Result<String, CliError> {
    let rendered = if compact {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    rendered.map_err(|e| CliError::Serialize(e.to_string()))
}

fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    serde_yaml::to_string(data).map_err(|e| CliError::Serialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Serialize)]
    struct Item {
        id: u64,
        name: String,
    }

    #[derive(Tabled)]
    struct ItemRow {
        id: u64,
        name: String,
    }

    fn items() -> Vec<Item> {
        vec![
            Item {
                id: 1,
                name: "merino".into(),
            },
            Item {
                id: 2,
                name: "suffolk".into(),
            },
        ]
    }

    fn to_row(item: &Item) -> ItemRow {
        ItemRow {
            id: item.id,
            name: item.name.clone(),
        }
    }

    #[test]
    fn color_mode_overrides_win() {
        assert!(should_color(&ColorMode::Always));
        assert!(!should_color(&ColorMode::Never));
    }

    #[test]
    fn plain_emits_one_id_per_line() {
        let out = render_list(&OutputFormat::Plain, &items(), to_row, |i| i.id.to_string())
            .expect("plain rendering is infallible");
        assert_eq!(out, "1\n2");
    }

    #[test]
    fn json_round_trips_the_source_data() {
        let out = render_list(&OutputFormat::JsonCompact, &items(), to_row, |i| {
            i.id.to_string()
        })
        .expect("json rendering of plain structs succeeds");
        let parsed: Vec<serde_json::Value> =
            serde_json::from_str(&out).expect("output is valid JSON");
        assert_eq!(parsed[1]["name"], "suffolk");
    }

    #[test]
    fn unserializable_data_maps_to_an_error() {
        // serde_json rejects maps with non-string keys.
        let mut bad = std::collections::HashMap::new();
        bad.insert(vec![1u8], "value");
        let err = render_json(&bad, true).expect_err("non-string keys cannot serialize");
        assert!(matches!(err, CliError::Serialize(_)));
    }
}
