//! # rifa-server
//!
//! Number-reservation service for a raffle draw. Clients pick a number,
//! the server stores the claim and guarantees no number is sold twice,
//! and the front-end is told which numbers are blocked, which cashier to
//! pay, the running stats and the winning number.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── ReservationService (service/)
//!     ├── Blocklist, CashierRotation (domain/)
//!     │
//!     └── ReservationStore (persistence/)
//!           ├── PostgreSQL (UNIQUE numero)
//!           └── in-memory
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
