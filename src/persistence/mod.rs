//! Persistence layer: the reservation table.
//!
//! [`ReservationStore`] is the seam between the service and storage. The
//! production implementation is [`PostgresReservationStore`]; the
//! [`InMemoryReservationStore`] backs development runs with persistence
//! disabled, and tests.
//!
//! Every implementation must enforce number uniqueness inside its insert
//! operation. A store never offers "is this number taken?" for callers to
//! check before writing.

pub mod memory;
pub mod models;
pub mod postgres;

use std::fmt;
use std::sync::Arc;

use futures_util::future::BoxFuture;

pub use memory::InMemoryReservationStore;
pub use models::{
    NO_CONTACT, NewReservation, RECENT_LIMIT, ReservationStats, ReserveOutcome, StoredReservation,
};
pub use postgres::PostgresReservationStore;

use crate::config::RaffleConfig;
use crate::domain::RaffleNumber;
use crate::error::RaffleError;

/// Append-only storage of reservations keyed by a unique number.
pub trait ReservationStore: fmt::Debug + Send + Sync {
    /// Creates the reservation table if it does not exist yet.
    fn ensure_schema(&self) -> BoxFuture<'_, Result<(), RaffleError>>;

    /// Every reserved number, in no particular order.
    fn reserved_numbers(&self) -> BoxFuture<'_, Result<Vec<RaffleNumber>, RaffleError>>;

    /// Inserts one reservation.
    ///
    /// Yields [`ReserveOutcome::Taken`] and has no effect if the number is
    /// already reserved, including when a concurrent call wins the race.
    fn reserve(
        &self,
        reservation: NewReservation,
    ) -> BoxFuture<'_, Result<ReserveOutcome, RaffleError>>;

    /// Total count and the most recent numbers.
    fn stats(&self) -> BoxFuture<'_, Result<ReservationStats, RaffleError>>;
}

/// Opens the store selected by `config.persistence_enabled`.
///
/// # Errors
///
/// Returns [`RaffleError::Persistence`] if the database URL is malformed.
pub fn open_store(config: &RaffleConfig) -> Result<Arc<dyn ReservationStore>, RaffleError> {
    if config.persistence_enabled {
        Ok(Arc::new(PostgresReservationStore::connect_lazy(config)?))
    } else {
        tracing::warn!("persistence disabled, reservations are kept in memory only");
        Ok(Arc::new(InMemoryReservationStore::new()))
    }
}
