//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

use super::dto::{
    BlockedNumbersResponse, CashierResponse, RegisterRequest, RegisterResponse, StatsResponse,
    WinningNumberResponse,
};
use super::handlers::{raffle, system};
use crate::domain::RaffleNumber;
use crate::error::{ErrorBody, ErrorResponse};

/// Generated OpenAPI description, served at `/api-docs/openapi.json` when
/// the `swagger-ui` feature is enabled.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "rifa-server", description = "Raffle number reservations"),
    paths(
        raffle::blocked_numbers,
        raffle::next_cashier,
        raffle::register,
        raffle::winning_number,
        raffle::stats,
        system::health_handler,
    ),
    components(schemas(
        RaffleNumber,
        BlockedNumbersResponse,
        CashierResponse,
        RegisterRequest,
        RegisterResponse,
        WinningNumberResponse,
        StatsResponse,
        ErrorResponse,
        ErrorBody,
    )),
    tags(
        (name = "Raffle", description = "Number reservations"),
        (name = "System", description = "Operational endpoints"),
    )
)]
pub struct ApiDoc;
