/// Production origin of the assortment service.
pub const DEFAULT_BASE_URL: &str = "http://www.systembolaget.se/";

/// Client version reported to the service. Independent of the crate version.
pub const LIBRARY_VERSION: &str = "0.2";

/// `User-Agent` sent unless overridden: `systembolaget/` + [`LIBRARY_VERSION`].
pub const DEFAULT_USER_AGENT: &str = "systembolaget/0.2";

/// Default whole-request timeout. The catalog is a large document.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Settings used by [`crate::CatalogClient::from_config`] to build a client
/// and its transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}
