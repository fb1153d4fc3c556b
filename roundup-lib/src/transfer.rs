//! Sweeping round-ups into the savings goal

use serde::{Deserialize, Serialize};
use tracing::{instrument, Level};
use uuid::Uuid;

use crate::{lookup, Error, Gateway, Money};

/// The body of a transfer into a savings goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    /// The amount to move
    pub amount: Money,
}

/// The bank's answer to a transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferOutcome {
    /// The bank's identifier for the transfer
    pub transfer_uid: String,

    /// Whether the transfer was applied
    pub success: bool,
}

/// A transfer the bank accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// The amount that was submitted
    pub amount: Money,

    /// The name of the savings goal the amount went into
    pub savings_goal: String,

    /// The bank's answer
    pub outcome: TransferOutcome,
}

/// Move the round-up total of the last week's transactions into the current
/// savings goal.
///
/// Each step needs the result of the one before, so they run strictly in
/// order, and the first failure stops the sequence before anything is
/// submitted. A fresh transfer ID is generated for every call; nothing here
/// retries.
///
/// The returned [`Receipt`] carries the amount exactly as it was submitted.
///
/// # Errors
///
/// Returns the first lookup failure, the gateway's failure to submit the
/// transfer, or [`Error::TransferRejected`] if the bank declines it.
#[instrument(skip(gateway))]
pub async fn round_up_to_savings_goal<G: Gateway + ?Sized>(
    gateway: &G,
) -> Result<Receipt, Error> {
    let account = lookup::current_account(gateway).await?;
    let round_up_total = lookup::round_up_total(gateway, &account).await?;
    let amount = Money::from_major_units_in(account.currency.as_str(), round_up_total);
    let savings_goal = lookup::savings_goal(gateway, &account).await?;
    let transfer_uid = Uuid::new_v4();

    tracing::event!(
        Level::INFO,
        %amount,
        %transfer_uid,
        goal = %savings_goal.name,
        "submitting transfer"
    );

    let request = TransferRequest {
        amount: amount.clone(),
    };
    let outcome = gateway
        .transfer_to_savings_goal(
            &account.account_uid,
            &savings_goal.savings_goal_uid,
            transfer_uid,
            &request,
        )
        .await?;

    if !outcome.success {
        return Err(Error::TransferRejected(transfer_uid));
    }

    Ok(Receipt {
        amount,
        savings_goal: savings_goal.name,
        outcome,
    })
}
