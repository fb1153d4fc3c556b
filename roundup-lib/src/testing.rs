//! An in-memory [`Gateway`] for exercising the pipelines

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Notify;
use uuid::Uuid;

use crate::{
    Account, Error, Gateway, Money, SavingsGoal, Transaction, TransferOutcome, TransferRequest,
};

pub const ACCOUNT_UID: &str = "account-uid";
pub const CATEGORY_UID: &str = "category-uid";
pub const GOAL_UID: &str = "goal-uid";

pub fn account() -> Account {
    Account {
        account_uid: ACCOUNT_UID.to_string(),
        default_category_uid: CATEGORY_UID.to_string(),
        currency: "GBP".to_string(),
    }
}

pub fn transactions(amounts: &[i64]) -> Vec<Transaction> {
    amounts
        .iter()
        .enumerate()
        .map(|(i, minor_units)| Transaction {
            id: format!("feed-item-{i}"),
            category_uid: CATEGORY_UID.to_string(),
            amount: Money::new("GBP", *minor_units),
        })
        .collect()
}

pub fn savings_goal(total_saved: i64, target: i64) -> SavingsGoal {
    SavingsGoal {
        savings_goal_uid: GOAL_UID.to_string(),
        name: "Holiday".to_string(),
        total_saved: Money::new("GBP", total_saved),
        target: Money::new("GBP", target),
    }
}

fn unavailable() -> Error {
    Error::Gateway {
        status: 503,
        message: "Service Unavailable".to_string(),
    }
}

pub type Submitted = (String, String, Uuid, TransferRequest);

/// Each lookup answers with its configured value, or fails when it is `None`
#[derive(Debug)]
pub struct FakeGateway {
    pub accounts: Option<Vec<Account>>,
    pub account_holder_name: Option<String>,
    pub transactions: Option<Vec<Transaction>>,
    pub savings_goals: Option<Vec<SavingsGoal>>,
    pub transfer_success: Option<bool>,

    /// When set, the account holder name lookup waits to be notified
    pub gate: Option<Arc<Notify>>,

    pub calls: Mutex<Vec<&'static str>>,
    pub transaction_queries: Mutex<Vec<(String, String, DateTime<Utc>)>>,
    pub submitted: Mutex<Vec<Submitted>>,
}

impl Default for FakeGateway {
    fn default() -> Self {
        Self {
            accounts: Some(vec![account()]),
            account_holder_name: Some("Monnie McSaver".to_string()),
            transactions: Some(transactions(&[950, 1900, 2850])),
            savings_goals: Some(vec![savings_goal(1000, 2000)]),
            transfer_success: Some(true),
            gate: None,
            calls: Mutex::default(),
            transaction_queries: Mutex::default(),
            submitted: Mutex::default(),
        }
    }
}

impl FakeGateway {
    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, call: &str) -> usize {
        self.calls().into_iter().filter(|c| *c == call).count()
    }

    pub fn transaction_queries(&self) -> Vec<(String, String, DateTime<Utc>)> {
        self.transaction_queries.lock().unwrap().clone()
    }

    pub fn submitted(&self) -> Vec<Submitted> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl Gateway for FakeGateway {
    async fn accounts(&self) -> Result<Vec<Account>, Error> {
        self.record("accounts");
        self.accounts.clone().ok_or_else(unavailable)
    }

    async fn account_holder_name(&self) -> Result<String, Error> {
        self.record("account_holder_name");
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.account_holder_name.clone().ok_or_else(unavailable)
    }

    async fn transactions(
        &self,
        account_uid: &str,
        category_uid: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<Transaction>, Error> {
        self.record("transactions");
        self.transaction_queries.lock().unwrap().push((
            account_uid.to_string(),
            category_uid.to_string(),
            since,
        ));
        self.transactions.clone().ok_or_else(unavailable)
    }

    async fn savings_goals(&self, _account_uid: &str) -> Result<Vec<SavingsGoal>, Error> {
        self.record("savings_goals");
        self.savings_goals.clone().ok_or_else(unavailable)
    }

    async fn transfer_to_savings_goal(
        &self,
        account_uid: &str,
        savings_goal_uid: &str,
        transfer_uid: Uuid,
        request: &TransferRequest,
    ) -> Result<TransferOutcome, Error> {
        self.record("transfer_to_savings_goal");
        self.submitted.lock().unwrap().push((
            account_uid.to_string(),
            savings_goal_uid.to_string(),
            transfer_uid,
            request.clone(),
        ));
        let success = self.transfer_success.ok_or_else(unavailable)?;
        Ok(TransferOutcome {
            transfer_uid: "server-side-uid".to_string(),
            success,
        })
    }
}
