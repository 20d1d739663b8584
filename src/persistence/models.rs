//! Reservation records and aggregate views.

use chrono::{DateTime, Utc};

use crate::domain::RaffleNumber;

/// Contact recorded when the client did not provide one.
pub const NO_CONTACT: &str = "sin-dato";

/// Number of entries returned in [`ReservationStats::most_recent`].
pub const RECENT_LIMIT: usize = 5;

/// A reservation about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    /// Claimed number; unique across the table.
    pub number: RaffleNumber,
    /// Claimant phone number or similar identifier.
    pub contact: String,
    /// Cashier credited with the sale.
    pub cashier: String,
}

/// Result of a reservation attempt that reached the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReserveOutcome {
    /// The row was inserted.
    Reserved,
    /// The number already belonged to another reservation; nothing changed.
    Taken,
}

/// A reservation row as held by a store.
#[derive(Debug, Clone)]
pub struct StoredReservation {
    /// Auto-increment row ID; breaks ties between equal timestamps.
    pub id: i64,
    /// Claimed number.
    pub number: RaffleNumber,
    /// Claimant contact.
    pub contact: String,
    /// Cashier credited with the sale.
    pub cashier: String,
    /// Server-side insertion timestamp.
    pub created_at: DateTime<Utc>,
}

/// Reservation totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationStats {
    /// Number of reservations ever made.
    pub total: i64,
    /// Up to [`RECENT_LIMIT`] numbers, newest first.
    pub most_recent: Vec<RaffleNumber>,
}
