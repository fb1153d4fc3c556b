use serde::{Deserialize, Serialize};

use crate::Money;

/// An item from an account's transaction feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The unique ID of the feed item
    #[serde(rename = "feedItemUid")]
    pub id: String,

    /// The category the transaction was filed under
    pub category_uid: String,

    /// The value of the transaction
    pub amount: Money,
}
