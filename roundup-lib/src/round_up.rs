//! Round-up calculation

use crate::Transaction;

/// The gap between an amount in major units and the next whole unit.
///
/// Always in `[0, 1)`, and exactly zero for whole amounts.
#[must_use]
pub fn round_up(major_units: f64) -> f64 {
    major_units.ceil() - major_units
}

/// The sum of the round-ups of each transaction, in major units
pub fn round_up_total<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> f64 {
    transactions
        .into_iter()
        .map(|transaction| round_up(transaction.amount.to_major_units()))
        .sum()
}
