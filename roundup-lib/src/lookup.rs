//! The dependent lookups shared by transfers and the dashboard

use chrono::{Duration, Utc};
use tracing::{instrument, Level};

use crate::{error::Resource, round_up, Account, Error, Gateway, SavingsGoal, Transaction};

/// How far back the transaction feed is read, in days
pub const TRANSACTION_WINDOW_DAYS: i64 = 7;

/// The account the app operates on: the first one the bank lists
#[instrument(skip(gateway))]
pub async fn current_account<G: Gateway + ?Sized>(gateway: &G) -> Result<Account, Error> {
    gateway
        .accounts()
        .await?
        .into_iter()
        .next()
        .ok_or(Error::Empty(Resource::Accounts))
}

/// The account's transactions in its default category over the trailing
/// window. An empty feed is an error.
#[instrument(skip(gateway))]
pub async fn transactions<G: Gateway + ?Sized>(
    gateway: &G,
    account: &Account,
) -> Result<Vec<Transaction>, Error> {
    let since = Utc::now() - Duration::days(TRANSACTION_WINDOW_DAYS);
    let transactions = gateway
        .transactions(&account.account_uid, &account.default_category_uid, since)
        .await?;

    if transactions.is_empty() {
        return Err(Error::Empty(Resource::Transactions));
    }
    Ok(transactions)
}

/// The total round-up over the account's recent transactions, in major units
#[instrument(skip(gateway))]
pub async fn round_up_total<G: Gateway + ?Sized>(
    gateway: &G,
    account: &Account,
) -> Result<f64, Error> {
    let transactions = transactions(gateway, account).await?;
    let total = round_up::round_up_total(&transactions);

    tracing::event!(Level::DEBUG, count = transactions.len(), total, "calculated round-up");

    Ok(total)
}

/// The account's current savings goal: the first one the bank lists
#[instrument(skip(gateway))]
pub async fn savings_goal<G: Gateway + ?Sized>(
    gateway: &G,
    account: &Account,
) -> Result<SavingsGoal, Error> {
    gateway
        .savings_goals(&account.account_uid)
        .await?
        .into_iter()
        .next()
        .ok_or(Error::Empty(Resource::SavingsGoals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{account, FakeGateway};

    #[tokio::test]
    async fn current_account_is_the_first() {
        let mut second = account();
        second.account_uid = "second".to_string();
        let gateway = FakeGateway {
            accounts: Some(vec![account(), second]),
            ..FakeGateway::default()
        };

        let current = current_account(&gateway).await.unwrap();

        assert_eq!(current, account());
    }

    #[tokio::test]
    async fn no_accounts() {
        let gateway = FakeGateway {
            accounts: Some(vec![]),
            ..FakeGateway::default()
        };

        let error = current_account(&gateway).await.unwrap_err();

        assert!(matches!(error, Error::Empty(Resource::Accounts)));
    }

    #[tokio::test]
    async fn transactions_use_default_category_and_trailing_week() {
        let gateway = FakeGateway::default();
        let before = Utc::now();

        transactions(&gateway, &account()).await.unwrap();

        let (account_uid, category_uid, since) = gateway.transaction_queries().remove(0);
        assert_eq!(account_uid, account().account_uid);
        assert_eq!(category_uid, account().default_category_uid);

        let window = before - since;
        assert!(window >= Duration::days(7) - Duration::seconds(5));
        assert!(window <= Duration::days(7) + Duration::seconds(5));
    }

    #[tokio::test]
    async fn no_transactions() {
        let gateway = FakeGateway {
            transactions: Some(vec![]),
            ..FakeGateway::default()
        };

        let error = round_up_total(&gateway, &account()).await.unwrap_err();

        assert!(matches!(error, Error::Empty(Resource::Transactions)));
    }

    #[tokio::test]
    async fn no_savings_goals() {
        let gateway = FakeGateway {
            savings_goals: Some(vec![]),
            ..FakeGateway::default()
        };

        let error = savings_goal(&gateway, &account()).await.unwrap_err();

        assert!(matches!(error, Error::Empty(Resource::SavingsGoals)));
    }
}
