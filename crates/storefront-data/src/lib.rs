//! Outbound HTTP for the storefront.
//!
//! Provides a small JSON client and the three collaborators the storefront
//! talks to:
//!
//! - [`CatalogClient`] - the product list
//! - [`NominatimGeocoder`] - coordinate to address lookup
//! - [`FixedLocator`] - a configured device position
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_data::{CatalogClient, FetchClient, DEFAULT_CATALOG_URL};
//!
//! let client = FetchClient::new("storefront/0.1")?;
//! let catalog = CatalogClient::new(client, DEFAULT_CATALOG_URL);
//! let state = catalog.load().await;
//! println!("{} products", state.products().len());
//! ```

mod catalog;
mod error;
mod geocode;
mod locate;

pub use catalog::{CatalogClient, DEFAULT_CATALOG_URL};
pub use error::FetchError;
pub use geocode::{NominatimGeocoder, DEFAULT_NOMINATIM_URL, DEFAULT_ZOOM};
pub use locate::FixedLocator;

use serde::de::DeserializeOwned;
use tracing::debug;

/// Default `User-Agent`; Nominatim rejects anonymous clients.
pub const DEFAULT_USER_AGENT: &str = concat!("storefront/", env!("CARGO_PKG_VERSION"));

/// JSON-over-HTTP client.
///
/// No retries and no local timeout: failures surface as whatever the
/// transport reports.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
}

impl FetchClient {
    /// Create a client that identifies itself with `user_agent`.
    pub fn new(user_agent: impl AsRef<str>) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent.as_ref())
            .build()?;
        Ok(Self { http })
    }

    /// Wrap an existing reqwest client.
    pub fn from_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// GET `url` with query parameters and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        debug!(url, ?query, "GET");
        let mut request = self.http.get(url).header("Accept", "application/json");
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CatalogClient, FetchClient, FetchError, FixedLocator, NominatimGeocoder};
}
