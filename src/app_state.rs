//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::ReservationService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Reservation service for all business logic.
    pub reservation_service: Arc<ReservationService>,
}

impl AppState {
    /// Wraps a service into handler state.
    #[must_use]
    pub fn new(reservation_service: ReservationService) -> Self {
        Self {
            reservation_service: Arc::new(reservation_service),
        }
    }
}
