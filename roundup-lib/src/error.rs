use std::fmt;

use uuid::Uuid;

/// The things that can be looked up through a [`Gateway`](crate::Gateway)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// The list of accounts
    Accounts,

    /// The account holder's name
    AccountHolderName,

    /// The recent transaction feed
    Transactions,

    /// The list of savings goals
    SavingsGoals,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Accounts => "accounts",
            Self::AccountHolderName => "account holder name",
            Self::Transactions => "transactions",
            Self::SavingsGoals => "savings goals",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when talking to the bank or acting on its data
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The lookup succeeded, but returned nothing where at least one item was
    /// required
    #[error("no {0} found")]
    Empty(Resource),

    /// The bank responded with a non-success status
    #[error("request failed with status {status}: {message}")]
    Gateway {
        /// The HTTP status code
        status: u16,

        /// The response body, or the status' canonical reason
        message: String,
    },

    /// The request could not be sent, or the response could not be read
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The bank reported that the transfer was not applied
    #[error("transfer {0} was rejected")]
    TransferRejected(Uuid),

    /// Another dashboard update is already in progress
    #[error("an update is already in progress")]
    Busy,
}
