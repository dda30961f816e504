//! Reservation manager console client.
//!
//! Thin front end over `booking-runtime`: parses arguments, calls one
//! operation, prints its status line. Diagnostics go to stderr through
//! `tracing`.
//!
//! ```bash
//! reservations hotel list
//! reservations reservation create --hotel H001 --customer C001 --room 101 \
//!     --check-in 2026-11-01 --check-out 2026-11-03
//! RUST_LOG=debug reservations reservation cancel R101
//! ```

mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use booking_runtime::{Store, StoreConfig};
use clap::Parser;
use commands::{CorruptHotels, CustomerCommand, HotelCommand, Reconcile, ReservationCommand};

/// Reservation manager for hotels, customers, and reservations
#[derive(Parser)]
#[command(name = "reservations")]
#[command(about = "Manage hotels, customers, and reservations stored as JSON", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding hotels.json, customers.json, reservations.json
    /// (defaults to $RESERVATIONS_DATA_DIR, then ./data)
    #[arg(short, long, value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Hotel commands
    #[command(subcommand)]
    Hotel(HotelCommand),

    /// Customer commands
    #[command(subcommand)]
    Customer(CustomerCommand),

    /// Reservation commands
    #[command(subcommand)]
    Reservation(ReservationCommand),

    /// Recompute hotel availability from active reservations
    Reconcile(Reconcile),

    /// Overwrite hotels.json with invalid JSON (error-handling demo)
    CorruptHotels(CorruptHotels),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for RESERVATIONS_DATA_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = StoreConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    tracing::debug!("Using data directory {}", config.data_dir.display());

    let store = Store::new(&config);

    match cli.command {
        Command::Hotel(cmd) => cmd.execute(&store),
        Command::Customer(cmd) => cmd.execute(&store),
        Command::Reservation(cmd) => cmd.execute(&store),
        Command::Reconcile(cmd) => cmd.execute(&store),
        Command::CorruptHotels(cmd) => cmd.execute(&config),
    }
}
