use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{Account, Error, SavingsGoal, Transaction, TransferOutcome, TransferRequest};

/// The remote banking operations the round-up core depends on.
///
/// [`Client`](crate::Client) talks to the real API. Every method reports
/// failure through its return value; implementations should not panic.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// List the accounts belonging to the account holder
    async fn accounts(&self) -> Result<Vec<Account>, Error>;

    /// Retrieve the account holder's name
    async fn account_holder_name(&self) -> Result<String, Error>;

    /// List the transactions in a category that changed after `since`
    async fn transactions(
        &self,
        account_uid: &str,
        category_uid: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<Transaction>, Error>;

    /// List the savings goals associated with the given account
    async fn savings_goals(&self, account_uid: &str) -> Result<Vec<SavingsGoal>, Error>;

    /// Move money from the account into a savings goal.
    ///
    /// `transfer_uid` is an idempotency key: resubmitting the same logical
    /// transfer must reuse it.
    async fn transfer_to_savings_goal(
        &self,
        account_uid: &str,
        savings_goal_uid: &str,
        transfer_uid: Uuid,
        request: &TransferRequest,
    ) -> Result<TransferOutcome, Error>;
}
