//! Data Transfer Objects for REST request/response serialization.
//!
//! Field names are the Spanish keys the front-end already speaks
//! (`bloqueados`, `cajero`, `numero`, ...).

pub mod raffle_dto;

pub use raffle_dto::*;
