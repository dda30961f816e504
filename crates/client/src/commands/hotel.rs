//! Hotel subcommands.

use anyhow::Result;
use booking_core::{Entity, Hotel};
use booking_runtime::{NewHotel, Store, create_hotel, delete_hotel, resize_hotel};
use clap::Parser;

use crate::output::{OutputFormat, print_collection, print_outcome};

#[derive(Parser)]
pub enum HotelCommand {
    /// List hotels with their availability
    List {
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Create a hotel
    Create {
        /// Hotel id (e.g. H010)
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        city: String,
        /// Total rooms
        #[arg(long, allow_negative_numbers = true)]
        total: i64,
        /// Available rooms (defaults to total)
        #[arg(long, allow_negative_numbers = true)]
        available: Option<i64>,
    },

    /// Change total capacity, keeping occupied rooms occupied
    Resize {
        #[arg(value_name = "HOTEL_ID")]
        id: String,
        #[arg(value_name = "TOTAL_ROOMS", allow_negative_numbers = true)]
        total: i64,
    },

    /// Delete a hotel without active reservations
    Delete {
        #[arg(value_name = "HOTEL_ID")]
        id: String,
    },
}

impl HotelCommand {
    pub fn execute(self, store: &Store) -> Result<()> {
        match self {
            Self::List { format } => {
                let hotels = store.hotels().load_all().items;
                print_collection(&hotels, format, "No hotels.", describe)
            }
            Self::Create {
                id,
                name,
                city,
                total,
                available,
            } => {
                let outcome = create_hotel(
                    store,
                    NewHotel {
                        id,
                        name,
                        city,
                        total_rooms: total,
                        available_rooms: available.unwrap_or(total),
                    },
                );
                print_outcome(&outcome);
                Ok(())
            }
            Self::Resize { id, total } => {
                print_outcome(&resize_hotel(store, &id, total));
                Ok(())
            }
            Self::Delete { id } => {
                print_outcome(&delete_hotel(store, &id));
                Ok(())
            }
        }
    }
}

fn describe(hotel: &Hotel) -> String {
    format!(
        "{} | {} | {} | {}/{} available",
        hotel.id(),
        hotel.name(),
        hotel.city(),
        hotel.available_rooms(),
        hotel.total_rooms()
    )
}
