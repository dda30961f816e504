//! Maintenance commands: availability reconciliation and the corrupt-file demo.

use anyhow::{Context, Result};
use booking_runtime::{Store, StoreConfig, reconcile_availability};
use clap::Parser;
use console::style;

use crate::output::print_outcome;

/// Content written by the corrupt-file demo.
const CORRUPT_CONTENT: &str = "{ this is not valid json }";

/// Recompute each hotel's available rooms as total minus active reservations
#[derive(Parser, Debug)]
pub struct Reconcile {}

impl Reconcile {
    pub fn execute(self, store: &Store) -> Result<()> {
        let outcome = reconcile_availability(store);
        print_outcome(&outcome);
        if let Ok(changes) = &outcome.result {
            for change in changes {
                println!(
                    "  {} {}: {} → {}",
                    style("•").cyan(),
                    change.hotel_id,
                    change.before,
                    change.after
                );
            }
        }
        Ok(())
    }
}

/// Overwrite the hotels document with invalid JSON
#[derive(Parser, Debug)]
pub struct CorruptHotels {}

impl CorruptHotels {
    pub fn execute(self, config: &StoreConfig) -> Result<()> {
        let path = config.hotels_path();
        std::fs::create_dir_all(&config.data_dir)
            .with_context(|| format!("Failed to create {}", config.data_dir.display()))?;
        std::fs::write(&path, CORRUPT_CONTENT)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        println!(
            "{} Intentionally corrupted {}",
            style("!").yellow().bold(),
            path.display()
        );
        Ok(())
    }
}
