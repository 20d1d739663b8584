//! Reservation service: blocklist, cashier rotation and registrations.

use std::sync::Arc;

use crate::domain::{Blocklist, CashierRotation, RaffleNumber};
use crate::error::RaffleError;
use crate::persistence::{NewReservation, ReservationStats, ReservationStore, ReserveOutcome};

/// Message returned to a client whose number was claimed first by someone
/// else.
pub const NUMBER_TAKEN_MESSAGE: &str = "Número ya ocupado";

/// Result of a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The number now belongs to the caller.
    Registered,
    /// Another reservation already holds the number.
    AlreadyTaken,
    /// The registration did not happen, for a reason not shared with the
    /// client.
    Failed,
}

/// Orchestration layer for the raffle operations.
///
/// Owns the static [`Blocklist`], the shared [`CashierRotation`] and the
/// winning number, and delegates reservations to a [`ReservationStore`].
#[derive(Debug, Clone)]
pub struct ReservationService {
    store: Arc<dyn ReservationStore>,
    blocklist: Arc<Blocklist>,
    rotation: Arc<CashierRotation>,
    winning_number: RaffleNumber,
}

impl ReservationService {
    /// Creates a new `ReservationService`.
    #[must_use]
    pub fn new(
        store: Arc<dyn ReservationStore>,
        blocklist: Blocklist,
        rotation: Arc<CashierRotation>,
        winning_number: RaffleNumber,
    ) -> Self {
        Self {
            store,
            blocklist: Arc::new(blocklist),
            rotation,
            winning_number,
        }
    }

    /// Static blocklist merged with every reserved number, ascending and
    /// without duplicates.
    ///
    /// If the store cannot be read the static blocklist alone is returned.
    pub async fn blocked_numbers(&self) -> Vec<RaffleNumber> {
        match self.store.reserved_numbers().await {
            Ok(reserved) => self.blocklist.merge(reserved),
            Err(error) => {
                tracing::warn!(%error, "reserved numbers unavailable, serving static blocklist");
                self.blocklist.to_sorted_vec()
            }
        }
    }

    /// Hands out the next cashier and advances the rotation.
    pub fn next_cashier(&self) -> String {
        self.rotation.next().to_string()
    }

    /// Reserves `number` for `contact`.
    ///
    /// The sale is credited to the cashier most recently handed out by
    /// [`ReservationService::next_cashier`], whichever client asked for it.
    pub async fn register(&self, number: RaffleNumber, contact: String) -> RegistrationOutcome {
        let cashier = self.rotation.last_handed_out().to_string();
        let reservation = NewReservation {
            number,
            contact,
            cashier,
        };

        match self.store.reserve(reservation).await {
            Ok(ReserveOutcome::Reserved) => {
                tracing::info!(%number, "number registered");
                RegistrationOutcome::Registered
            }
            Ok(ReserveOutcome::Taken) => {
                tracing::debug!(%number, "number already taken");
                RegistrationOutcome::AlreadyTaken
            }
            Err(error) => {
                tracing::error!(%number, %error, "could not register number");
                RegistrationOutcome::Failed
            }
        }
    }

    /// The drawn number.
    #[must_use]
    pub fn winning_number(&self) -> RaffleNumber {
        self.winning_number
    }

    /// Reservation totals.
    ///
    /// # Errors
    ///
    /// Returns a [`RaffleError::Persistence`] if the store cannot be read.
    pub async fn stats(&self) -> Result<ReservationStats, RaffleError> {
        self.store.stats().await
    }
}
