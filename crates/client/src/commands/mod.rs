//! Command implementations for the console client
//!
//! Each area is a separate module that defines its own CLI args and calls
//! exactly one runtime operation per subcommand.

mod customer;
mod hotel;
mod maintenance;
mod reservation;

pub use customer::CustomerCommand;
pub use hotel::HotelCommand;
pub use maintenance::{CorruptHotels, Reconcile};
pub use reservation::ReservationCommand;
