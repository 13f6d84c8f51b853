use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::cli::OutputFormat;
use crate::render::{StudentRow, StudentTable};
use crate::sync::View;

/// Global output settings, fixed once at startup
static OUTPUT_FORMAT: AtomicU8 = AtomicU8::new(0);
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_format(format: OutputFormat) {
    let value = match format {
        OutputFormat::Table => 0,
        OutputFormat::Json => 1,
        OutputFormat::Compact => 2,
    };
    OUTPUT_FORMAT.store(value, Ordering::Relaxed);
}

pub fn format() -> OutputFormat {
    match OUTPUT_FORMAT.load(Ordering::Relaxed) {
        1 => OutputFormat::Json,
        2 => OutputFormat::Compact,
        _ => OutputFormat::Table,
    }
}

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Render rows as a rounded table
pub fn table_string<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn json_string<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

/// One tab-separated line per row, for piping into other tools
pub fn compact_string(rows: &[StudentRow]) -> String {
    rows.iter()
        .map(|row| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                row.id, row.name, row.age, row.grade, row.email
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print a message (skipped when quiet, wrapped in an object in JSON mode)
pub fn print_message(message: &str) {
    if is_quiet() {
        return;
    }
    match format() {
        OutputFormat::Json => {
            println!("{}", json_string(&serde_json::json!({ "message": message })));
        }
        _ => println!("{message}"),
    }
}

/// Print a success line with a check mark
pub fn print_success(message: &str) {
    if is_quiet() {
        return;
    }
    match format() {
        OutputFormat::Json => print_message(message),
        _ => println!("{} {message}", "✓".green().bold()),
    }
}

/// The terminal as a view: each replace prints the whole table again.
#[derive(Debug, Default)]
pub struct TerminalView;

impl View for TerminalView {
    fn replace(&mut self, table: StudentTable) {
        match format() {
            OutputFormat::Table => println!("{}", table_string(&table.rows)),
            OutputFormat::Json => println!("{}", json_string(&table.records)),
            OutputFormat::Compact => {
                if !table.rows.is_empty() {
                    println!("{}", compact_string(&table.rows));
                }
            }
        }
    }
}
