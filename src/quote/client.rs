//! HTTP client for the bridging service API.
//!
//! # Endpoints
//! - `POST /authentication/auth/apiKey` → session token
//! - `GET /bridge/configs` → chain catalog
//! - `POST /bridge/quote/user` → quote id
//! - `POST /bridge/quote/commit/{quoteId}` → commit confirmation

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::{ApiKey, QuoteServiceConfig};
use crate::quote::types::{
    AuthRequest, AuthResponse, BridgeConfigs, CommitReceipt, QuoteError, QuoteId, QuoteRequest,
    QuoteResult, ServiceReply, SessionToken, UserQuoteRequest, UserQuoteResponse,
};

/// Quote operations the orchestrator depends on.
#[async_trait]
pub trait BridgeService: Send + Sync {
    /// Request a quote for one transfer.
    async fn request_quote(
        &self,
        session: &SessionToken,
        request: &QuoteRequest,
    ) -> QuoteResult<QuoteId>;

    /// Commit a previously issued quote. Called exactly once per quote.
    async fn commit_quote(
        &self,
        session: &SessionToken,
        quote_id: &QuoteId,
    ) -> QuoteResult<CommitReceipt>;
}

/// Bridging service client.
#[derive(Debug, Clone)]
pub struct QuoteClient {
    http: Client,
    base_url: String,
}

impl QuoteClient {
    /// Create a client with the configured base URL and request timeout.
    pub fn new(config: &QuoteServiceConfig) -> QuoteResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| QuoteError::Client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Exchange the API key for a session token.
    pub async fn authenticate(&self, api_key: &ApiKey) -> QuoteResult<SessionToken> {
        let request = self
            .http
            .post(self.url("/authentication/auth/apiKey"))
            .json(&AuthRequest {
                api_key: api_key.expose_secret(),
            });

        let response: AuthResponse = send(request, QuoteError::Authentication).await?;
        tracing::debug!("Authenticated with bridging service");
        Ok(SessionToken::new(response.jwt))
    }

    /// Fetch the chain catalog.
    pub async fn fetch_bridge_configs(&self) -> QuoteResult<BridgeConfigs> {
        let response = self
            .http
            .get(self.url("/bridge/configs"))
            .send()
            .await
            .map_err(|e| QuoteError::ConfigFetch(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| QuoteError::ConfigFetch(e.to_string()))?;

        if !status.is_success() {
            return Err(QuoteError::ConfigFetch(format!(
                "status {}: {}",
                status.as_u16(),
                body
            )));
        }

        serde_json::from_str(&body)
            .map_err(|e| QuoteError::ConfigFetch(format!("malformed catalog: {}", e)))
    }
}

#[async_trait]
impl BridgeService for QuoteClient {
    async fn request_quote(
        &self,
        session: &SessionToken,
        request: &QuoteRequest,
    ) -> QuoteResult<QuoteId> {
        let builder = self
            .http
            .post(self.url("/bridge/quote/user"))
            .header(AUTHORIZATION, session.as_str())
            .json(&UserQuoteRequest::from(request));

        let response: UserQuoteResponse = send(builder, QuoteError::Quote).await?;
        Ok(response.quote_id)
    }

    async fn commit_quote(
        &self,
        session: &SessionToken,
        quote_id: &QuoteId,
    ) -> QuoteResult<CommitReceipt> {
        let builder = self
            .http
            .post(self.url(&format!("/bridge/quote/commit/{}", quote_id)))
            .header(AUTHORIZATION, session.as_str())
            .header(CONTENT_TYPE, "application/json");

        send(builder, QuoteError::Commit).await
    }
}

/// Send a request and decode the reply, mapping every failure through `wrap`.
async fn send<T: DeserializeOwned>(
    request: RequestBuilder,
    wrap: fn(String) -> QuoteError,
) -> QuoteResult<T> {
    let response = request.send().await.map_err(|e| wrap(e.to_string()))?;
    let status = response.status();
    let body = response.text().await.map_err(|e| wrap(e.to_string()))?;

    if !status.is_success() {
        return Err(wrap(format!("status {}: {}", status.as_u16(), body)));
    }

    match ServiceReply::<T>::decode(&body) {
        Ok(ServiceReply::Success(payload)) => Ok(payload),
        Ok(ServiceReply::Failure(message)) => Err(wrap(message)),
        Err(e) => Err(wrap(format!("malformed response: {}", e))),
    }
}
