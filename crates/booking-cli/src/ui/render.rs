//! Headers, receipts, tables and error lines in the three output modes.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::mode::OutputMode;
use super::theme::{styled, styles, Badge};

/// Title line above command output; empty in JSON mode.
///
/// Pretty: "Bookings · list (4 of 4)". Plain: "bookings list".
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    let title = match ctx.mode {
        OutputMode::Json => return String::new(),
        OutputMode::Plain => return format!("bookings {}", command),
        OutputMode::Pretty => styled("Bookings", styles::bold(), ctx.color),
    };
    match context {
        Some(c) => format!("{} \u{00B7} {} ({})", title, command, c),
        None => format!("{} \u{00B7} {}", title, command),
    }
}

pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let mark = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    match message {
        "" => mark,
        text => format!("{} {}", mark, text),
    }
}

/// `Amount Paid: 2000` when pretty, `amount_paid=2000` otherwise.
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if !ctx.mode.is_pretty() {
        return format!("{}={}", plain_key(key), value);
    }
    let label = styled(&format!("{}:", key), styles::dim(), ctx.color);
    format!("{} {}", label, value)
}

fn plain_key(key: &str) -> String {
    key.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Accepts text with or without a leading "Hint: ".
pub fn hint(ctx: &UiContext, text: &str) -> String {
    let text = text.trim_start_matches("Hint: ");
    if ctx.mode.is_pretty() {
        format!("{} {}", styled("Hint:", styles::dim(), ctx.color), text)
    } else {
        format!("hint={}", text)
    }
}

/// Summary printed after a write: an ok badge with indented fields, or
/// `status=ok` followed by `key=value` lines.
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, String)]) -> String {
    let pretty = ctx.mode.is_pretty();
    let first = if pretty {
        badge(ctx, Badge::Ok, title)
    } else {
        "status=ok".to_string()
    };
    let indent = if pretty { "  " } else { "" };
    std::iter::once(first)
        .chain(
            items
                .iter()
                .map(|(key, value)| format!("{}{}", indent, kv(ctx, key, value))),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
    pub numeric: bool,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self {
            header,
            numeric: false,
        }
    }

    /// A right-aligned numeric column.
    pub const fn numeric(header: &'static str) -> Self {
        Self {
            header,
            numeric: true,
        }
    }
}

/// Render a bordered table.
///
/// Pretty mode: comfy-table with rounded borders
/// Plain mode: tab-separated values, no header
pub fn table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return plain_rows(rows);
    }

    let mut table = ComfyTable::new();
    if ctx.unicode {
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(comfy_table::presets::ASCII_MARKDOWN);
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(ctx.width.min(u16::MAX as usize) as u16);

    let header_cells: Vec<Cell> = columns
        .iter()
        .map(|c| {
            let cell = Cell::new(c.header);
            if ctx.color {
                cell.add_attribute(Attribute::Bold)
            } else {
                cell
            }
        })
        .collect();
    table.set_header(header_cells);

    for row in rows {
        table.add_row(row);
    }
    for (i, col) in columns.iter().enumerate() {
        if col.numeric {
            if let Some(column) = table.column_mut(i) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }
    }
    table.to_string()
}

/// Render a borderless two-column table for summaries.
pub fn simple_table(ctx: &UiContext, rows: &[(String, String)]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|(k, v)| kv(ctx, k, v))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = ComfyTable::new();
    table.load_preset(comfy_table::presets::NOTHING);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    for (key, value) in rows {
        let mut label = Cell::new(key);
        if ctx.color {
            label = label.add_attribute(Attribute::Dim);
        }
        table.add_row(vec![label, Cell::new(value)]);
    }
    if let Some(column) = table.column_mut(0) {
        column.set_padding((0, 2));
    }
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table.to_string()
}

fn plain_rows(rows: &[Vec<String>]) -> String {
    rows.iter()
        .map(|row| row.join("\t"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Stdout, except in JSON mode where only the document may appear.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Error text for stderr: an error badge or `error=...`, then the hint.
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let first = if ctx.mode.is_pretty() {
        badge(ctx, Badge::Err, message)
    } else {
        format!("error={}", message)
    };
    match error_hint {
        Some(h) => format!("{}\n{}", first, hint(ctx, h)),
        None => first,
    }
}

pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_ctx() -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
            timezone: None,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            is_tty: true,
            color: false,
            unicode: true,
            width: 100,
            mode: OutputMode::Pretty,
            timezone: None,
        }
    }

    #[test]
    fn test_header() {
        assert_eq!(header(&plain_ctx(), "list", None), "bookings list");
        let h = header(&pretty_ctx(), "search", Some("deepa"));
        assert!(h.contains("Bookings"));
        assert!(h.contains("search (deepa)"));
    }

    #[test]
    fn test_kv_plain_snake_cases_key() {
        assert_eq!(kv(&plain_ctx(), "Amount Paid", "2000"), "amount_paid=2000");
        assert_eq!(kv(&pretty_ctx(), "Amount Paid", "2000"), "Amount Paid: 2000");
    }

    #[test]
    fn test_hint_strips_prefix() {
        assert_eq!(
            hint(&plain_ctx(), "Hint: Run `bookings init`."),
            "hint=Run `bookings init`."
        );
        assert_eq!(hint(&pretty_ctx(), "Run it."), "Hint: Run it.");
    }

    #[test]
    fn test_receipt_plain() {
        let out = receipt(
            &plain_ctx(),
            "Booking added",
            &[("ID", "seed-1".to_string()), ("Total Cost", "4000".to_string())],
        );
        assert_eq!(out, "status=ok\nid=seed-1\ntotal_cost=4000");
    }

    #[test]
    fn test_table_plain_is_tab_separated() {
        let rows = vec![
            vec!["a".to_string(), "1".to_string()],
            vec!["b".to_string(), "2".to_string()],
        ];
        let out = table(&plain_ctx(), &[Column::new("Name"), Column::numeric("Pax")], &rows);
        assert_eq!(out, "a\t1\nb\t2");
    }

    #[test]
    fn test_table_pretty_has_headers() {
        let rows = vec![vec!["Ms.Deepa".to_string(), "2".to_string()]];
        let out = table(&pretty_ctx(), &[Column::new("Name"), Column::numeric("Pax")], &rows);
        assert!(out.contains("Name"));
        assert!(out.contains("Ms.Deepa"));
    }

    #[test]
    fn test_error_message_plain() {
        let out = error_message(&plain_ctx(), "Booking not found", Some("Hint: Run list."));
        assert_eq!(out, "error=Booking not found\nhint=Run list.");
    }
}
