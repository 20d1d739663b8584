//! Domain layer: raffle numbers, the static blocklist and cashier rotation.
//!
//! These types hold no I/O. Reservations themselves live behind
//! [`crate::persistence::ReservationStore`].

pub mod blocklist;
pub mod cashier_rotation;
pub mod raffle_number;

pub use blocklist::Blocklist;
pub use cashier_rotation::CashierRotation;
pub use raffle_number::{InvalidNumber, RaffleNumber};
