//! Raffle endpoint DTOs.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::RaffleNumber;
use crate::persistence::{NO_CONTACT, ReservationStats};

/// Response body for `GET /api/bloqueados`.
#[derive(Debug, Serialize, ToSchema)]
pub struct BlockedNumbersResponse {
    /// Static and reserved numbers, ascending, without duplicates.
    pub bloqueados: Vec<RaffleNumber>,
}

/// Response body for `GET /api/cajero`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CashierResponse {
    /// Contact of the cashier to pay.
    pub cajero: String,
}

/// Request body for `POST /api/registrar`.
///
/// Both fields are taken loosely: `numero` may be a JSON number or a numeric
/// string, `telefono` any scalar. Absent fields read as `null`.
#[derive(Debug, ToSchema)]
pub struct RegisterRequest {
    /// Chosen number.
    #[schema(value_type = i32, example = 10)]
    pub numero: Value,
    /// Claimant phone number.
    #[schema(value_type = Option<String>, example = "+5491112223333")]
    pub telefono: Value,
}

impl RegisterRequest {
    /// Reads the request from a raw JSON body.
    ///
    /// Returns `None` unless the body is a JSON object; other keys are
    /// ignored.
    #[must_use]
    pub fn from_json_bytes(body: &[u8]) -> Option<Self> {
        match serde_json::from_slice::<Value>(body).ok()? {
            Value::Object(mut fields) => Some(Self {
                numero: fields.remove("numero").unwrap_or_default(),
                telefono: fields.remove("telefono").unwrap_or_default(),
            }),
            _ => None,
        }
    }

    /// Claimant contact as stored: the submitted value rendered as text, or
    /// [`NO_CONTACT`] when it is missing or empty-ish (`null`, `""`,
    /// `false`, `0`).
    #[must_use]
    pub fn contact(&self) -> String {
        match &self.telefono {
            Value::Null | Value::Bool(false) => NO_CONTACT.to_string(),
            Value::String(s) if s.is_empty() => NO_CONTACT.to_string(),
            Value::String(s) => s.clone(),
            Value::Number(n) if n.as_f64() == Some(0.0) => NO_CONTACT.to_string(),
            other => other.to_string(),
        }
    }
}

/// Response body for `POST /api/registrar`.
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    /// Whether the number was registered.
    pub ok: bool,
    /// Reason shown to the client when `ok` is `false`, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mensaje: Option<String>,
}

impl RegisterResponse {
    /// `{ "ok": true }`.
    #[must_use]
    pub fn registered() -> Self {
        Self {
            ok: true,
            mensaje: None,
        }
    }

    /// `{ "ok": false }` with an optional reason.
    #[must_use]
    pub fn rejected(mensaje: Option<String>) -> Self {
        Self { ok: false, mensaje }
    }
}

/// Response body for `GET /api/ganador`.
#[derive(Debug, Serialize, ToSchema)]
pub struct WinningNumberResponse {
    /// The drawn number.
    pub ganador: RaffleNumber,
}

/// Response body for `GET /api/stats`.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    /// Number of reservations.
    pub total: i64,
    /// Up to five most recently reserved numbers, newest first.
    pub ultimos: Vec<RaffleNumber>,
}

impl From<ReservationStats> for StatsResponse {
    fn from(stats: ReservationStats) -> Self {
        Self {
            total: stats.total,
            ultimos: stats.most_recent,
        }
    }
}
