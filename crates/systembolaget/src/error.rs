use std::sync::Arc;

use thiserror::Error;

/// Errors returned by the catalog client.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request path (or a configured base URL) is not a valid URL reference.
    #[error("malformed request URL \"{path}\": {reason}")]
    MalformedRequest { path: String, reason: String },

    /// The HTTP exchange could not complete: DNS, connect, TLS or timeout.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The connection failed while the body was being streamed into the
    /// decoder.
    #[error("HTTP error while reading {context} body: {source}")]
    BodyRead {
        context: String,
        #[source]
        source: Arc<std::io::Error>,
    },

    /// The service answered with a status other than 200 or 304.
    #[error("API error: unexpected HTTP status {status} from {url}")]
    ApiError { status: u16, url: String },

    /// The body is empty, not well-formed XML, or truncated.
    #[error("XML decode error for {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: DecodeFailure,
    },
}

/// Why a document body could not be decoded.
#[derive(Debug, Error)]
pub enum DecodeFailure {
    /// The reader rejected the body as not well-formed XML.
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    /// The body ended before any element started.
    #[error("empty response body")]
    NoRoot,

    /// The body ended while this element was still open.
    #[error("document ends inside <{0}>")]
    Truncated(String),
}

impl CatalogError {
    /// HTTP status carried by [`CatalogError::ApiError`], if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
