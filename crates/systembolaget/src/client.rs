//! HTTP client for the Systembolaget assortment service.
//!
//! Each fetch is a single GET: the relative endpoint is resolved against
//! [`CatalogClient::base_url`], the response status is checked, and the body
//! is decoded as XML while it streams in. Nothing is retried or cached.

use std::time::Duration;

use futures::TryStreamExt;
use reqwest::header::USER_AGENT;
use reqwest::{Client, Response, StatusCode, Url};
use tokio::io::AsyncBufRead;
use tokio_util::io::StreamReader;

use crate::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use crate::error::CatalogError;
use crate::parse::decode_stream;
use crate::types::{Articles, Stores};

const ARTICLES_PATH: &str = "Assortment.aspx?Format=Xml";
const STORES_PATH: &str = "Assortment.aspx?butikerombud=1";

/// Client for the assortment service.
///
/// The transport is supplied by the caller (or built from a [`ClientConfig`]).
/// `base_url` and `user_agent` may be changed after construction, e.g. to
/// point at a mock server. `base_url` should end with `/`: relative endpoints
/// replace its last path segment otherwise.
///
/// The client is cheap to clone and safe to share between tasks.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    pub base_url: Url,
    pub user_agent: String,
}

impl CatalogClient {
    /// Creates a client for the production service using `http` as transport.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MalformedRequest`] if the built-in base URL
    /// cannot be parsed.
    pub fn new(http: Client) -> Result<Self, CatalogError> {
        Self::with_base_url(http, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MalformedRequest`] if `base_url` is not an
    /// absolute URL.
    pub fn with_base_url(http: Client, base_url: &str) -> Result<Self, CatalogError> {
        // Exactly one trailing slash, so endpoints resolve below the base path.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| CatalogError::MalformedRequest {
            path: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            http,
            base_url: parsed,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        })
    }

    /// Builds a transport with the configured timeouts and a client around it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the `reqwest::Client` cannot be
    /// constructed, or [`CatalogError::MalformedRequest`] if
    /// `config.base_url` is invalid.
    pub fn from_config(config: &ClientConfig) -> Result<Self, CatalogError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        let mut client = Self::with_base_url(http, &config.base_url)?;
        client.user_agent.clone_from(&config.user_agent);
        Ok(client)
    }

    /// Fetches the full article catalog. Downloads a large XML document.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Http`] on network failure.
    /// - [`CatalogError::BodyRead`] if the connection fails mid-body.
    /// - [`CatalogError::ApiError`] for any status other than 200 or 304.
    /// - [`CatalogError::Decode`] if the body is empty or not a well-formed
    ///   document.
    pub async fn fetch_articles(&self) -> Result<Articles, CatalogError> {
        let response = self.get(ARTICLES_PATH).await?;
        decode_stream(body_reader(response)).await
    }

    /// Fetches every store and agent. Downloads a large XML document.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogClient::fetch_articles`].
    pub async fn fetch_stores(&self) -> Result<Stores, CatalogError> {
        let response = self.get(STORES_PATH).await?;
        decode_stream(body_reader(response)).await
    }

    /// Resolves `relative_path` against the base URL.
    fn resolve(&self, relative_path: &str) -> Result<Url, CatalogError> {
        self.base_url
            .join(relative_path)
            .map_err(|e| CatalogError::MalformedRequest {
                path: relative_path.to_owned(),
                reason: e.to_string(),
            })
    }

    /// Sends a GET for `relative_path` and checks the status.
    ///
    /// 200 and 304 are accepted. Any other status drops the response, which
    /// releases the connection, and returns [`CatalogError::ApiError`].
    async fn get(&self, relative_path: &str) -> Result<Response, CatalogError> {
        let url = self.resolve(relative_path)?;
        tracing::debug!(url = %url, "requesting assortment document");

        let response = self
            .http
            .get(url.clone())
            .header(USER_AGENT, self.user_agent.as_str())
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(url = %url, status = status.as_u16(), "assortment response");

        if status != StatusCode::OK && status != StatusCode::NOT_MODIFIED {
            return Err(CatalogError::ApiError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }
}

/// Exposes the response body as an async reader, so the decoder consumes it
/// chunk by chunk instead of buffering the whole document.
fn body_reader(response: Response) -> impl AsyncBufRead + Unpin + Send {
    StreamReader::new(Box::pin(
        response.bytes_stream().map_err(std::io::Error::other),
    ))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
