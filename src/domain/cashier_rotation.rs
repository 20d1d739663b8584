//! Round-robin over the cashiers who collect payment for a number.
//!
//! [`CashierRotation`] holds a fixed, non-empty list of cashier contacts and
//! a shared cursor. Handing out a cashier and advancing the cursor is a
//! single atomic step, but nothing ties a later registration to the cashier
//! that same client was shown: [`CashierRotation::last_handed_out`] reads
//! whatever the cursor says at that moment. Two clients interleaving
//! `next` / `last_handed_out` can therefore credit a sale to the other
//! client's cashier. With a single cashier the race is unobservable.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::RaffleError;

/// Fixed cashier list plus the rotation cursor.
#[derive(Debug)]
pub struct CashierRotation {
    cashiers: Vec<String>,
    cursor: AtomicUsize,
}

impl CashierRotation {
    /// Creates a rotation starting at the first cashier.
    ///
    /// # Errors
    ///
    /// Returns [`RaffleError::InvalidConfig`] if `cashiers` is empty.
    pub fn new(cashiers: Vec<String>) -> Result<Self, RaffleError> {
        if cashiers.is_empty() {
            return Err(RaffleError::InvalidConfig(
                "cashier rotation needs at least one cashier".to_string(),
            ));
        }
        Ok(Self {
            cashiers,
            cursor: AtomicUsize::new(0),
        })
    }

    /// Returns the cashier under the cursor and advances it, wrapping at the
    /// end of the list.
    pub fn next(&self) -> &str {
        let len = self.cashiers.len();
        let previous = self
            .cursor
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |i| Some((i + 1) % len))
            .unwrap_or_else(|current| current);
        self.at(previous)
    }

    /// Returns the cashier one step behind the cursor, i.e. the one handed
    /// out by the most recent [`CashierRotation::next`] call from any client.
    /// Does not move the cursor.
    #[must_use]
    pub fn last_handed_out(&self) -> &str {
        let len = self.cashiers.len();
        let cursor = self.cursor.load(Ordering::SeqCst);
        self.at((cursor + len - 1) % len)
    }

    fn at(&self, index: usize) -> &str {
        self.cashiers
            .get(index % self.cashiers.len())
            .map_or("", String::as_str)
    }
}
