//! Statically blocked raffle numbers.

use std::collections::BTreeSet;

use super::RaffleNumber;

/// Numbers nobody may choose, fixed at startup.
///
/// Independent of reservations: a number may be blocked without ever having
/// been reserved. The set visible to clients is the union of this list and
/// the reserved numbers, see [`Blocklist::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blocklist {
    numbers: BTreeSet<RaffleNumber>,
}

impl Blocklist {
    /// Builds a blocklist from any sequence of numbers. Duplicates collapse.
    #[must_use]
    pub fn new(numbers: impl IntoIterator<Item = RaffleNumber>) -> Self {
        Self {
            numbers: numbers.into_iter().collect(),
        }
    }

    /// Static numbers in ascending order.
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<RaffleNumber> {
        self.numbers.iter().copied().collect()
    }

    /// Union of the static numbers and `reserved`, deduplicated and
    /// ascending.
    #[must_use]
    pub fn merge(&self, reserved: impl IntoIterator<Item = RaffleNumber>) -> Vec<RaffleNumber> {
        let mut all = self.numbers.clone();
        all.extend(reserved);
        all.into_iter().collect()
    }
}
