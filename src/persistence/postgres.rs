//! PostgreSQL implementation of the reservation store.

use std::time::Duration;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

use super::models::{NewReservation, RECENT_LIMIT, ReservationStats, ReserveOutcome};
use super::ReservationStore;
use crate::config::RaffleConfig;
use crate::domain::RaffleNumber;
use crate::error::RaffleError;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// PostgreSQL-backed reservation store using `sqlx::PgPool`.
///
/// Uniqueness rests on the `UNIQUE` constraint of `reservas.numero`: a
/// duplicate insert is rejected by the server with SQLSTATE 23505 and
/// reported as [`ReserveOutcome::Taken`].
#[derive(Debug, Clone)]
pub struct PostgresReservationStore {
    pool: PgPool,
}

impl PostgresReservationStore {
    /// Creates a store on top of an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Builds a lazily connecting pool from the configuration.
    ///
    /// No connection is opened here, so the service starts even while the
    /// database is down.
    ///
    /// # Errors
    ///
    /// Returns [`RaffleError::Persistence`] if the connection string cannot
    /// be parsed.
    pub fn connect_lazy(config: &RaffleConfig) -> Result<Self, RaffleError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect_lazy(&config.database_url)?;
        Ok(Self::new(pool))
    }

    /// Returns the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl ReservationStore for PostgresReservationStore {
    fn ensure_schema(&self) -> BoxFuture<'_, Result<(), RaffleError>> {
        async move {
            MIGRATOR
                .run(&self.pool)
                .await
                .map_err(|e| RaffleError::Persistence(e.to_string()))
        }
        .boxed()
    }

    fn reserved_numbers(&self) -> BoxFuture<'_, Result<Vec<RaffleNumber>, RaffleError>> {
        async move {
            let rows = sqlx::query_scalar::<_, i32>("SELECT numero FROM reservas")
                .fetch_all(&self.pool)
                .await?;
            Ok(rows.into_iter().map(RaffleNumber::new).collect())
        }
        .boxed()
    }

    fn reserve(
        &self,
        reservation: NewReservation,
    ) -> BoxFuture<'_, Result<ReserveOutcome, RaffleError>> {
        async move {
            let result =
                sqlx::query("INSERT INTO reservas (numero, telefono, cajero) VALUES ($1, $2, $3)")
                    .bind(reservation.number.get())
                    .bind(&reservation.contact)
                    .bind(&reservation.cashier)
                    .execute(&self.pool)
                    .await;

            match result {
                Ok(_) => Ok(ReserveOutcome::Reserved),
                Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                    Ok(ReserveOutcome::Taken)
                }
                Err(e) => Err(e.into()),
            }
        }
        .boxed()
    }

    fn stats(&self) -> BoxFuture<'_, Result<ReservationStats, RaffleError>> {
        async move {
            let recent = sqlx::query_scalar::<_, i32>(
                "SELECT numero FROM reservas ORDER BY fecha DESC, id DESC LIMIT $1",
            )
            .bind(i64::try_from(RECENT_LIMIT).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await?;

            let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reservas")
                .fetch_one(&self.pool)
                .await?;

            Ok(ReservationStats {
                total,
                most_recent: recent.into_iter().map(RaffleNumber::new).collect(),
            })
        }
        .boxed()
    }
}
