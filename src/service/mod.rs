//! Service layer: business logic orchestration.
//!
//! [`ReservationService`] merges the static blocklist with stored
//! reservations, rotates cashiers and registers numbers through a
//! [`crate::persistence::ReservationStore`].

pub mod reservation_service;

pub use reservation_service::{NUMBER_TAKEN_MESSAGE, RegistrationOutcome, ReservationService};
