//! Reservation entity linking a customer to a hotel.

use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::{RecordError, ValidationError};
use crate::record::{Entity, Record, RecordReader};

/// Wire format of check-in / check-out dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Lifecycle state of a reservation.
///
/// Created `Active`; moves to `Cancelled` once and never back.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    serde::Serialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    #[default]
    Active,
    Cancelled,
}

impl ReservationStatus {
    /// Parse the wire form, mapping failures to [`ValidationError::InvalidStatus`].
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::from_str(value).map_err(|_| ValidationError::InvalidStatus(value.to_owned()))
    }
}

/// Parse an ISO-8601 calendar date (`YYYY-MM-DD`).
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| ValidationError::InvalidDate {
        value: value.to_owned(),
        detail: e.to_string(),
    })
}

/// A room booking for a stay `[check_in, check_out)`.
///
/// Invariant: `check_in < check_out`. Dates serialize as `YYYY-MM-DD`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Reservation {
    id: String,
    hotel_id: String,
    customer_id: String,
    room_number: i64,
    check_in: NaiveDate,
    check_out: NaiveDate,
    status: ReservationStatus,
}

impl Reservation {
    pub fn new(
        id: impl Into<String>,
        hotel_id: impl Into<String>,
        customer_id: impl Into<String>,
        room_number: i64,
        check_in: NaiveDate,
        check_out: NaiveDate,
        status: ReservationStatus,
    ) -> Result<Self, ValidationError> {
        if check_in >= check_out {
            return Err(ValidationError::DatesOutOfOrder {
                check_in: check_in.format(DATE_FORMAT).to_string(),
                check_out: check_out.format(DATE_FORMAT).to_string(),
            });
        }
        Ok(Self {
            id: id.into(),
            hotel_id: hotel_id.into(),
            customer_id: customer_id.into(),
            room_number,
            check_in,
            check_out,
            status,
        })
    }

    /// Build from raw user-supplied values: dates as `YYYY-MM-DD`, status as
    /// its wire form.
    pub fn parse(
        id: impl Into<String>,
        hotel_id: impl Into<String>,
        customer_id: impl Into<String>,
        room_number: i64,
        check_in: &str,
        check_out: &str,
        status: &str,
    ) -> Result<Self, ValidationError> {
        let check_in = parse_date(check_in)?;
        let check_out = parse_date(check_out)?;
        let status = ReservationStatus::parse(status)?;
        Self::new(id, hotel_id, customer_id, room_number, check_in, check_out, status)
    }

    pub fn hotel_id(&self) -> &str {
        &self.hotel_id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn room_number(&self) -> i64 {
        self.room_number
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    pub fn status(&self) -> ReservationStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Active
    }

    /// Number of nights covered by the stay.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Move to `Cancelled`. Returns `false` if it already was.
    pub fn cancel(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.status = ReservationStatus::Cancelled;
        true
    }
}

impl Entity for Reservation {
    const COLLECTION: &'static str = "reservation";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_record(record: &Record) -> Result<Self, RecordError> {
        let reader = RecordReader::new(record);
        let id = reader.string("id")?;
        let hotel_id = reader.string("hotel_id")?;
        let customer_id = reader.string("customer_id")?;
        let room_number = reader.integer("room_number")?;
        let check_in = reader.string("check_in")?;
        let check_out = reader.string("check_out")?;
        let status = reader
            .optional_string("status")?
            .unwrap_or_else(|| ReservationStatus::Active.to_string());

        let reservation = Reservation::parse(
            id,
            hotel_id,
            customer_id,
            room_number,
            &check_in,
            &check_out,
            &status,
        )?;
        Ok(reservation)
    }
}
