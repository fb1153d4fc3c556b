use serde::{Deserialize, Serialize};

/// A Starling current account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// The unique ID associated with the account
    pub account_uid: String,

    /// The category that everyday spending on the account is filed under
    #[serde(rename = "defaultCategory")]
    pub default_category_uid: String,

    /// The currency code for this account
    pub currency: String,
}
