use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{header, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{instrument, Level};
use uuid::Uuid;

use crate::{
    error::Resource, Account, Error, Gateway, SavingsGoal, Transaction, TransferOutcome,
    TransferRequest,
};

static USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// The format the feed endpoint expects for `changesSince`
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Which Starling API the [`Client`] talks to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// The developer sandbox
    #[default]
    Sandbox,

    /// The live API
    Production,
}

impl Environment {
    /// The base URL of the API
    #[must_use]
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Sandbox => "https://api-sandbox.starlingbank.com",
            Self::Production => "https://api.starlingbank.com",
        }
    }
}

/// The authentication details used by the [`Client`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Auth {
    /// Personal access token
    pub access_token: String,

    /// The API the token belongs to
    #[serde(default)]
    pub environment: Environment,
}

impl Default for Auth {
    fn default() -> Self {
        Self {
            access_token: "ACCESS_TOKEN".to_string(),
            environment: Environment::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Accounts {
    accounts: Vec<Account>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountHolderName {
    account_holder_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FeedItems {
    feed_items: Vec<Transaction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SavingsGoals {
    savings_goal_list: Vec<SavingsGoal>,
}

/// A client to the Starling Bank API
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl From<Auth> for Client {
    fn from(auth: Auth) -> Self {
        Self::with_base_url(auth.access_token, auth.environment.base_url())
    }
}

impl Client {
    /// Create a client that sends requests to an arbitrary base URL
    pub fn with_base_url(access_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            access_token: access_token.into(),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .bearer_auth(&self.access_token)
            .header(header::ACCEPT, "application/json")
            .header(header::USER_AGENT, USER_AGENT)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let response = self.request(Method::GET, path).send().await?;
        parse(response).await
    }
}

/// Decode a successful response, or turn an unsuccessful one into an
/// [`Error::Gateway`]
async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            status.canonical_reason().unwrap_or("unknown").to_string()
        } else {
            body
        };
        tracing::event!(Level::WARN, %status, %message, "request failed");
        return Err(Error::Gateway {
            status: status.as_u16(),
            message,
        });
    }

    Ok(response.json().await?)
}

fn non_empty<T>(items: Vec<T>, resource: Resource) -> Result<Vec<T>, Error> {
    if items.is_empty() {
        Err(Error::Empty(resource))
    } else {
        Ok(items)
    }
}

#[async_trait]
impl Gateway for Client {
    #[instrument(skip(self))]
    async fn accounts(&self) -> Result<Vec<Account>, Error> {
        let Accounts { accounts } = self.get("/api/v2/accounts").await?;
        non_empty(accounts, Resource::Accounts)
    }

    #[instrument(skip(self))]
    async fn account_holder_name(&self) -> Result<String, Error> {
        let AccountHolderName {
            account_holder_name,
        } = self.get("/api/v2/account-holder/name").await?;

        if account_holder_name.trim().is_empty() {
            return Err(Error::Empty(Resource::AccountHolderName));
        }
        Ok(account_holder_name)
    }

    #[instrument(skip(self))]
    async fn transactions(
        &self,
        account_uid: &str,
        category_uid: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<Transaction>, Error> {
        let path = format!("/api/v2/feed/account/{account_uid}/category/{category_uid}");
        let changes_since = since.format(TIMESTAMP_FORMAT).to_string();

        let response = self
            .request(Method::GET, &path)
            .query(&[("changesSince", changes_since)])
            .send()
            .await?;
        let FeedItems { feed_items } = parse(response).await?;

        tracing::event!(Level::DEBUG, count = feed_items.len(), "received transactions");

        non_empty(feed_items, Resource::Transactions)
    }

    #[instrument(skip(self))]
    async fn savings_goals(&self, account_uid: &str) -> Result<Vec<SavingsGoal>, Error> {
        let path = format!("/api/v2/account/{account_uid}/savings-goals");
        let SavingsGoals { savings_goal_list } = self.get(&path).await?;
        non_empty(savings_goal_list, Resource::SavingsGoals)
    }

    #[instrument(skip(self))]
    async fn transfer_to_savings_goal(
        &self,
        account_uid: &str,
        savings_goal_uid: &str,
        transfer_uid: Uuid,
        request: &TransferRequest,
    ) -> Result<TransferOutcome, Error> {
        let path = format!(
            "/api/v2/account/{account_uid}/savings-goals/{savings_goal_uid}/add-money/{transfer_uid}"
        );

        let response = self
            .request(Method::PUT, &path)
            .json(request)
            .send()
            .await?;

        parse(response).await
    }
}
