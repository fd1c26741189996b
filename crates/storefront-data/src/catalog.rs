//! Product catalog client.

use crate::{FetchClient, FetchError};
use storefront_commerce::catalog::{CatalogState, Product};
use tracing::{error, info};

/// The public product list.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// Fetches the flat product list.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: FetchClient,
    url: String,
}

impl CatalogClient {
    pub fn new(client: FetchClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch every product, in catalog order.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let products: Vec<Product> = self.client.get_json(&self.url, &[]).await?;
        info!(count = products.len(), url = %self.url, "catalog loaded");
        Ok(products)
    }

    /// Fetch and fold the result into a display state. Never retries.
    pub async fn load(&self) -> CatalogState {
        match self.fetch_products().await {
            Ok(products) => CatalogState::Loaded(products),
            Err(e) => {
                error!(error = %e, url = %self.url, "catalog fetch failed");
                CatalogState::Failed(failure_message(&e))
            }
        }
    }
}

fn failure_message(e: &FetchError) -> String {
    if e.is_status() {
        "Failed to fetch products".to_string()
    } else {
        e.to_string()
    }
}
