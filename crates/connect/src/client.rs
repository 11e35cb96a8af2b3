//! HTTP client for the Sarraf exchange platform REST API.
//!
//! This module provides the typed client for the backend's
//! `/exchangeRate`, `/auth`, `/user`, and `/transaction` endpoints, and
//! implements the core crate's source/repository traits on top of it.

use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use sarraf_core::errors::{Error, Result};
use sarraf_core::rates::{Direction, QuotedRate, RateSourceTrait};
use sarraf_core::transactions::{NewTransaction, Transaction, TransactionRepositoryTrait};

use crate::token::TokenStore;

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default base URL for a locally running exchange backend.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

// ─────────────────────────────────────────────────────────────────────────────
// API Wire Types (internal, field names match the backend's snake_case)
// ─────────────────────────────────────────────────────────────────────────────

/// `GET /exchangeRate` body. Both sides are LBP per 1 USD and either may
/// still be null before the feed has data.
#[derive(Debug, serde::Deserialize)]
struct ApiExchangeRate {
    #[serde(default)]
    usd_to_lbp: Option<Decimal>,
    #[serde(default)]
    lbp_to_usd: Option<Decimal>,
}

impl ApiExchangeRate {
    /// The feed's `lbp_to_usd` field is the price to acquire USD (buy),
    /// `usd_to_lbp` the amount received per USD sold (sell).
    fn into_quote(self) -> QuotedRate {
        QuotedRate::new(self.lbp_to_usd, self.usd_to_lbp)
    }
}

#[derive(Debug, serde::Serialize)]
struct ApiCredentials<'a> {
    user_name: &'a str,
    password: &'a str,
}

#[derive(Debug, serde::Deserialize)]
struct ApiAuthResponse {
    token: String,
}

#[derive(Debug, serde::Serialize)]
struct ApiNewTransaction {
    usd_amount: Decimal,
    lbp_amount: Decimal,
    usd_to_lbp: bool,
}

impl From<NewTransaction> for ApiNewTransaction {
    fn from(new_transaction: NewTransaction) -> Self {
        Self {
            usd_amount: new_transaction.usd_amount,
            lbp_amount: new_transaction.lbp_amount,
            usd_to_lbp: new_transaction.direction == Direction::UsdToLbp,
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct ApiTransaction {
    id: i64,
    usd_amount: Decimal,
    lbp_amount: Decimal,
    usd_to_lbp: bool,
    #[serde(default)]
    transaction_time: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<ApiTransaction> for Transaction {
    fn from(row: ApiTransaction) -> Self {
        Self {
            id: row.id,
            usd_amount: row.usd_amount,
            lbp_amount: row.lbp_amount,
            direction: if row.usd_to_lbp {
                Direction::UsdToLbp
            } else {
                Direction::LbpToUsd
            },
            transaction_time: row.transaction_time,
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Exchange API Client
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP client for the exchange platform API.
///
/// This client provides methods for:
/// - Fetching the published buy/sell rate pair
/// - Registering, logging in, and logging out a user
/// - Creating transactions and listing the user's history
///
/// The bearer token lives in the injected [`TokenStore`]; authenticated
/// requests pick it up per call, so a login performed mid-session is
/// visible to every subsequent request.
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(InMemoryTokenStore::new());
/// let client = ExchangeApiClient::new(DEFAULT_API_URL, store)?;
/// let quote = client.get_exchange_rate().await?;
/// ```
pub struct ExchangeApiClient {
    client: reqwest::Client,
    base_url: String,
    token_store: Arc<dyn TokenStore>,
}

impl ExchangeApiClient {
    /// Create a new exchange API client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the backend (e.g., "http://localhost:5000")
    /// * `token_store` - Storage for the session's bearer token
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(base_url: &str, token_store: Arc<dyn TokenStore>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token_store,
        })
    }

    /// Create default headers for API requests, attaching the bearer
    /// token when one is stored.
    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.token_store.get_token() {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| Error::Unexpected(format!("Invalid token format: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    /// Make a GET request and parse the response.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[ExchangeApi] GET {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|e| Error::Api(format!("Request failed: {}", e)))?;

        self.parse_response(response).await
    }

    /// Make a POST request with a JSON body and parse the response.
    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[ExchangeApi] POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.headers()?)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Api(format!("Request failed: {}", e)))?;

        self.parse_response(response).await
    }

    /// Make a POST request where only the status matters; the success
    /// body, if any, is discarded.
    async fn post_discard_body<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[ExchangeApi] POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.headers()?)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Api(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body_text = response
            .text()
            .await
            .map_err(|e| Error::Api(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Self::status_error(status, &body_text));
        }
        Ok(())
    }

    /// Fold a non-2xx body into an error, preferring the backend's own
    /// message when it sends one.
    fn status_error(status: reqwest::StatusCode, body: &str) -> Error {
        if let Ok(err) = serde_json::from_str::<ApiErrorResponse>(body) {
            if let Some(msg) = err.message.or(err.error) {
                return Error::Api(msg);
            }
        }
        Error::Api(format!(
            "HTTP {}: {}",
            status,
            body.chars().take(200).collect::<String>()
        ))
    }

    /// Parse an HTTP response, handling errors appropriately.
    async fn parse_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Api(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Self::status_error(status, &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| Error::Api(format!("Failed to parse response: {} - {}", e, body)))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rate Endpoint
    // ─────────────────────────────────────────────────────────────────────────

    /// Fetch the currently published rate pair.
    pub async fn get_exchange_rate(&self) -> Result<QuotedRate> {
        let rates: ApiExchangeRate = self.get("/exchangeRate").await?;
        Ok(rates.into_quote())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Auth Endpoints
    // ─────────────────────────────────────────────────────────────────────────

    /// Exchange credentials for a bearer token and store it.
    pub async fn login(&self, user_name: &str, password: &str) -> Result<()> {
        let auth: ApiAuthResponse = self
            .post("/auth", &ApiCredentials { user_name, password })
            .await?;

        self.token_store.save_token(&auth.token);
        info!("[ExchangeApi] Logged in as {}", user_name);
        Ok(())
    }

    /// Register a new user, then log in with the same credentials.
    pub async fn register(&self, user_name: &str, password: &str) -> Result<()> {
        self.post_discard_body("/user", &ApiCredentials { user_name, password })
            .await?;

        info!("[ExchangeApi] Registered user {}", user_name);
        self.login(user_name, password).await
    }

    /// Drop the stored token.
    pub fn logout(&self) {
        self.token_store.clear_token();
        info!("[ExchangeApi] Logged out");
    }

    /// Whether a bearer token is currently stored.
    pub fn is_authenticated(&self) -> bool {
        self.token_store.get_token().is_some()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transaction Endpoints
    // ─────────────────────────────────────────────────────────────────────────

    /// Submit a transaction. Anonymous submissions are allowed; the
    /// bearer token is attached only when one is stored.
    pub async fn post_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        let row: ApiTransaction = self
            .post("/transaction", &ApiNewTransaction::from(new_transaction))
            .await?;
        Ok(row.into())
    }

    /// Fetch the authenticated user's transaction history. Without a
    /// stored token the history is empty.
    pub async fn get_transactions(&self) -> Result<Vec<Transaction>> {
        if !self.is_authenticated() {
            debug!("[ExchangeApi] No stored token, returning empty history");
            return Ok(Vec::new());
        }

        let rows: Vec<ApiTransaction> = self.get("/transaction").await?;
        info!("[ExchangeApi] Fetched {} transactions", rows.len());
        Ok(rows.into_iter().map(Transaction::from).collect())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Core Trait Implementations
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl RateSourceTrait for ExchangeApiClient {
    async fn fetch_latest(&self) -> Result<QuotedRate> {
        self.get_exchange_rate().await
    }
}

#[async_trait]
impl TransactionRepositoryTrait for ExchangeApiClient {
    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        self.post_transaction(new_transaction).await
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>> {
        self.get_transactions().await
    }
}
