//! Reservation subcommands.

use anyhow::Result;
use booking_core::{Entity, Reservation};
use booking_runtime::{NewReservation, Store, cancel_reservation, create_reservation};
use clap::Parser;

use crate::output::{OutputFormat, print_collection, print_outcome};

#[derive(Parser)]
pub enum ReservationCommand {
    /// List reservations
    List {
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Only show ACTIVE reservations
        #[arg(long)]
        active: bool,
    },

    /// Create a reservation and take a room from the hotel
    Create {
        #[arg(long, value_name = "HOTEL_ID")]
        hotel: String,
        #[arg(long, value_name = "CUSTOMER_ID")]
        customer: String,
        #[arg(long, allow_negative_numbers = true)]
        room: i64,
        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        check_in: String,
        /// Check-out date (YYYY-MM-DD)
        #[arg(long)]
        check_out: String,
    },

    /// Cancel a reservation and return its room to the hotel
    Cancel {
        #[arg(value_name = "RESERVATION_ID")]
        id: String,
    },
}

impl ReservationCommand {
    pub fn execute(self, store: &Store) -> Result<()> {
        match self {
            Self::List { format, active } => {
                let mut reservations = store.reservations().load_all().items;
                if active {
                    reservations.retain(Reservation::is_active);
                }
                print_collection(&reservations, format, "No reservations.", describe)
            }
            Self::Create {
                hotel,
                customer,
                room,
                check_in,
                check_out,
            } => {
                let outcome = create_reservation(
                    store,
                    NewReservation {
                        hotel_id: hotel,
                        customer_id: customer,
                        room_number: room,
                        check_in,
                        check_out,
                    },
                );
                print_outcome(&outcome);
                Ok(())
            }
            Self::Cancel { id } => {
                print_outcome(&cancel_reservation(store, &id));
                Ok(())
            }
        }
    }
}

fn describe(reservation: &Reservation) -> String {
    format!(
        "{} | Hotel={} | Customer={} | Room={} | {} → {} ({} nights) | {}",
        reservation.id(),
        reservation.hotel_id(),
        reservation.customer_id(),
        reservation.room_number(),
        reservation.check_in(),
        reservation.check_out(),
        reservation.nights(),
        reservation.status()
    )
}
