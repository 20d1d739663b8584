//! In-process reservation store.
//!
//! Holds the table in a [`tokio::sync::RwLock`]. The uniqueness check and
//! the append happen under one write guard, so the insert is atomic the
//! same way a database `UNIQUE` constraint is. Nothing survives a restart.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use chrono::Utc;
use futures_util::FutureExt;
use futures_util::future::{self, BoxFuture};
use tokio::sync::RwLock;

use super::ReservationStore;
use super::models::{
    NewReservation, RECENT_LIMIT, ReservationStats, ReserveOutcome, StoredReservation,
};
use crate::domain::RaffleNumber;
use crate::error::RaffleError;

#[derive(Debug, Default)]
struct Table {
    rows: Vec<StoredReservation>,
    by_number: HashMap<RaffleNumber, usize>,
}

/// Volatile reservation store.
#[derive(Debug, Default)]
pub struct InMemoryReservationStore {
    table: RwLock<Table>,
}

impl InMemoryReservationStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all rows in insertion order.
    pub async fn reservations(&self) -> Vec<StoredReservation> {
        self.table.read().await.rows.clone()
    }
}

impl ReservationStore for InMemoryReservationStore {
    fn ensure_schema(&self) -> BoxFuture<'_, Result<(), RaffleError>> {
        future::ready(Ok(())).boxed()
    }

    fn reserved_numbers(&self) -> BoxFuture<'_, Result<Vec<RaffleNumber>, RaffleError>> {
        async move {
            let table = self.table.read().await;
            Ok(table.rows.iter().map(|r| r.number).collect())
        }
        .boxed()
    }

    fn reserve(
        &self,
        reservation: NewReservation,
    ) -> BoxFuture<'_, Result<ReserveOutcome, RaffleError>> {
        async move {
            let mut table = self.table.write().await;
            let idx = table.rows.len();
            match table.by_number.entry(reservation.number) {
                Entry::Occupied(_) => return Ok(ReserveOutcome::Taken),
                Entry::Vacant(slot) => {
                    slot.insert(idx);
                }
            }
            table.rows.push(StoredReservation {
                id: i64::try_from(idx).unwrap_or(i64::MAX).saturating_add(1),
                number: reservation.number,
                contact: reservation.contact,
                cashier: reservation.cashier,
                created_at: Utc::now(),
            });
            Ok(ReserveOutcome::Reserved)
        }
        .boxed()
    }

    fn stats(&self) -> BoxFuture<'_, Result<ReservationStats, RaffleError>> {
        async move {
            let table = self.table.read().await;
            Ok(ReservationStats {
                total: i64::try_from(table.rows.len()).unwrap_or(i64::MAX),
                most_recent: table
                    .rows
                    .iter()
                    .rev()
                    .take(RECENT_LIMIT)
                    .map(|r| r.number)
                    .collect(),
            })
        }
        .boxed()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn new_reservation(number: i32) -> NewReservation {
        NewReservation {
            number: RaffleNumber::new(number),
            contact: format!("+54911000{number:04}"),
            cashier: "+5491123365501".to_string(),
        }
    }

    async fn reserve_fresh(store: &InMemoryReservationStore, number: i32) {
        let outcome = store.reserve(new_reservation(number)).await;
        assert!(
            matches!(outcome, Ok(ReserveOutcome::Reserved)),
            "number {number}: {outcome:?}"
        );
    }

    #[tokio::test]
    async fn reserve_then_list() {
        let store = InMemoryReservationStore::new();
        reserve_fresh(&store, 10).await;
        reserve_fresh(&store, 3).await;

        let Ok(mut numbers) = store.reserved_numbers().await else {
            panic!("listing failed");
        };
        numbers.sort();
        assert_eq!(numbers, vec![RaffleNumber::new(3), RaffleNumber::new(10)]);
    }

    #[tokio::test]
    async fn duplicate_is_conflict_without_effect() {
        let store = InMemoryReservationStore::new();
        reserve_fresh(&store, 10).await;

        let mut second = new_reservation(10);
        second.contact = "someone else".to_string();
        let result = store.reserve(second).await;
        assert!(matches!(result, Ok(ReserveOutcome::Taken)));

        let rows = store.reservations().await;
        let [row] = rows.as_slice() else {
            panic!("expected exactly one row, got {}", rows.len());
        };
        assert_eq!(row.number, RaffleNumber::new(10));
        assert_eq!(row.contact, "+549110000010");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_reserves_have_one_winner() {
        for round in 0..20 {
            let store = Arc::new(InMemoryReservationStore::new());
            let a = tokio::spawn({
                let store = Arc::clone(&store);
                async move { store.reserve(new_reservation(round)).await }
            });
            let b = tokio::spawn({
                let store = Arc::clone(&store);
                async move { store.reserve(new_reservation(round)).await }
            });
            let (Ok(a), Ok(b)) = (a.await, b.await) else {
                panic!("task panicked");
            };
            let outcomes = [a, b];
            let won = outcomes
                .iter()
                .filter(|r| matches!(r, Ok(ReserveOutcome::Reserved)))
                .count();
            let taken = outcomes
                .iter()
                .filter(|r| matches!(r, Ok(ReserveOutcome::Taken)))
                .count();
            assert_eq!((won, taken), (1, 1), "round {round}");
        }
    }

    #[tokio::test]
    async fn stats_keeps_five_newest_first() {
        let store = InMemoryReservationStore::new();
        for n in [1, 2, 3, 4, 5, 6, 7] {
            reserve_fresh(&store, n).await;
        }
        let Ok(stats) = store.stats().await else {
            panic!("stats failed");
        };
        assert_eq!(stats.total, 7);
        assert_eq!(
            stats.most_recent,
            [7, 6, 5, 4, 3].map(RaffleNumber::new).to_vec()
        );
    }

    #[tokio::test]
    async fn stats_on_empty_store() {
        let store = InMemoryReservationStore::new();
        let Ok(stats) = store.stats().await else {
            panic!("stats failed");
        };
        assert_eq!(stats, ReservationStats::default());
        assert!(store.ensure_schema().await.is_ok());
    }
}
