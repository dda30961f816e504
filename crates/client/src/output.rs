//! Console rendering helpers shared by the commands.

use anyhow::Result;
use booking_core::Entity;
use booking_runtime::{Diagnostic, Outcome, Severity};
use console::style;

/// Listing format.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per entity
    #[default]
    Table,
    /// The stored JSON records
    Json,
}

/// Print an operation's status line followed by its diagnostics.
pub fn print_outcome<T>(outcome: &Outcome<T>) {
    if outcome.is_accepted() {
        println!("{} {}", style("✓").green().bold(), outcome.status());
    } else {
        println!("{} {}", style("✗").red().bold(), outcome.status());
    }

    for diagnostic in &outcome.diagnostics {
        print_diagnostic(diagnostic);
    }
    if outcome.has_write_failure() {
        println!(
            "  {}",
            style("Some changes were not saved; run `reservations reconcile` once storage is writable.")
                .yellow()
        );
    }
}

fn print_diagnostic(diagnostic: &Diagnostic) {
    let severity = diagnostic.severity();
    let label = match severity {
        Severity::Warning => style(severity.as_str()).yellow(),
        Severity::Error => style(severity.as_str()).red(),
    };
    println!("  {} {}", label, diagnostic);
}

/// Print a collection in the requested format.
pub fn print_collection<T: Entity>(
    items: &[T],
    format: OutputFormat,
    empty_message: &str,
    row: impl Fn(&T) -> String,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(items)?);
        }
        OutputFormat::Table if items.is_empty() => {
            println!("{}", style(empty_message).dim());
        }
        OutputFormat::Table => {
            for item in items {
                println!("- {}", row(item));
            }
        }
    }
    Ok(())
}
