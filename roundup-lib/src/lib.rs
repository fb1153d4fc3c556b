//! A library for sweeping the round-ups of recent spending into a Starling
//! savings goal

#![deny(
    clippy::all,
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs
)]
#![warn(clippy::pedantic)]

mod money;
pub use money::{Money, DEFAULT_CURRENCY};
mod account;
pub use account::Account;
mod transaction;
pub use transaction::Transaction;
mod savings_goal;
pub use savings_goal::SavingsGoal;
mod error;
pub use error::{Error, Resource};
mod gateway;
pub use gateway::Gateway;
mod client;
pub use client::{Auth, Client, Environment};
pub mod round_up;
pub mod lookup;
pub mod transfer;
#[doc(inline)]
pub use transfer::{Receipt, TransferOutcome, TransferRequest};
pub mod dashboard;
#[doc(inline)]
pub use dashboard::Dashboard;

#[cfg(test)]
mod testing;
