//! Raffle handlers: blocked numbers, cashier, registration, winner, stats.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    BlockedNumbersResponse, CashierResponse, RegisterRequest, RegisterResponse, StatsResponse,
    WinningNumberResponse,
};
use crate::app_state::AppState;
use crate::domain::RaffleNumber;
use crate::error::{ErrorResponse, RaffleError};
use crate::service::{NUMBER_TAKEN_MESSAGE, RegistrationOutcome};

/// `GET /api/bloqueados` — Numbers that cannot be chosen.
#[utoipa::path(
    get,
    path = "/api/bloqueados",
    tag = "Raffle",
    summary = "List blocked numbers",
    description = "Returns the static blocklist merged with every reserved number, ascending and deduplicated. When storage is unreachable only the static blocklist is returned.",
    responses(
        (status = 200, description = "Blocked numbers", body = BlockedNumbersResponse),
    )
)]
pub async fn blocked_numbers(State(state): State<AppState>) -> impl IntoResponse {
    let bloqueados = state.reservation_service.blocked_numbers().await;
    Json(BlockedNumbersResponse { bloqueados })
}

/// `GET /api/cajero` — Next cashier in the rotation.
#[utoipa::path(
    get,
    path = "/api/cajero",
    tag = "Raffle",
    summary = "Next cashier",
    description = "Returns the cashier the client should pay and advances the shared rotation.",
    responses(
        (status = 200, description = "Cashier contact", body = CashierResponse),
    )
)]
pub async fn next_cashier(State(state): State<AppState>) -> impl IntoResponse {
    Json(CashierResponse {
        cajero: state.reservation_service.next_cashier(),
    })
}

/// `POST /api/registrar` — Claim a number.
///
/// Outcomes are reported in the body with status 200: a taken number carries
/// a `mensaje`, any other failure does not. A body that is not a JSON object
/// sent as `application/json` is one of those failures, so no extractor
/// rejection ever reaches the client.
#[utoipa::path(
    post,
    path = "/api/registrar",
    tag = "Raffle",
    summary = "Register a number",
    description = "Reserves the number for the given phone, credited to the cashier most recently handed out.",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Registration outcome", body = RegisterResponse),
    )
)]
pub async fn register(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let request = has_json_content_type(&headers)
        .then(|| RegisterRequest::from_json_bytes(&body))
        .flatten();
    let Some(req) = request else {
        tracing::debug!(len = body.len(), "registration rejected, body is not a JSON object");
        return Json(RegisterResponse::rejected(None));
    };

    let number = match RaffleNumber::from_json(&req.numero) {
        Ok(number) => number,
        Err(error) => {
            tracing::debug!(%error, "registration rejected");
            return Json(RegisterResponse::rejected(None));
        }
    };

    let response = match state
        .reservation_service
        .register(number, req.contact())
        .await
    {
        RegistrationOutcome::Registered => RegisterResponse::registered(),
        RegistrationOutcome::AlreadyTaken => {
            RegisterResponse::rejected(Some(NUMBER_TAKEN_MESSAGE.to_string()))
        }
        RegistrationOutcome::Failed => RegisterResponse::rejected(None),
    };
    Json(response)
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

/// `GET /api/ganador` — The drawn number.
#[utoipa::path(
    get,
    path = "/api/ganador",
    tag = "Raffle",
    summary = "Winning number",
    responses(
        (status = 200, description = "Winning number", body = WinningNumberResponse),
    )
)]
pub async fn winning_number(State(state): State<AppState>) -> impl IntoResponse {
    Json(WinningNumberResponse {
        ganador: state.reservation_service.winning_number(),
    })
}

/// `GET /api/stats` — Reservation count and latest numbers.
///
/// # Errors
///
/// Returns [`RaffleError::Persistence`] if storage is unreachable.
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = "Raffle",
    summary = "Reservation stats",
    description = "Total number of reservations and the five most recent numbers, newest first.",
    responses(
        (status = 200, description = "Stats", body = StatsResponse),
        (status = 500, description = "Storage unavailable", body = ErrorResponse),
    )
)]
pub async fn stats(State(state): State<AppState>) -> Result<impl IntoResponse, RaffleError> {
    let stats = state.reservation_service.stats().await?;
    Ok(Json(StatsResponse::from(stats)))
}

/// Raffle routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/bloqueados", get(blocked_numbers))
        .route("/cajero", get(next_cashier))
        .route("/registrar", post(register))
        .route("/ganador", get(winning_number))
        .route("/stats", get(stats))
}
