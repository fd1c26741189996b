//! Reverse geocoding against OpenStreetMap Nominatim.

use crate::FetchClient;
use async_trait::async_trait;
use serde::Deserialize;
use storefront_commerce::checkout::{Coordinates, GeocodeOutcome, ReverseGeocoder};
use tracing::{debug, warn};

/// Public Nominatim instance.
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

/// Street-level detail.
pub const DEFAULT_ZOOM: u8 = 18;

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
}

/// Nominatim `/reverse` client.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: FetchClient,
    base_url: String,
    zoom: u8,
}

impl NominatimGeocoder {
    pub fn new(client: FetchClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            zoom: DEFAULT_ZOOM,
        }
    }

    /// Set the detail level (0 country .. 18 building).
    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/reverse", self.base_url.trim_end_matches('/'))
    }

    fn query(&self, at: Coordinates) -> Vec<(&'static str, String)> {
        vec![
            ("format", "json".to_string()),
            ("lat", at.latitude.to_string()),
            ("lon", at.longitude.to_string()),
            ("zoom", self.zoom.to_string()),
            ("addressdetails", "1".to_string()),
        ]
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimGeocoder {
    async fn reverse(&self, at: Coordinates) -> GeocodeOutcome {
        let result = self
            .client
            .get_json::<ReverseResponse>(&self.endpoint(), &self.query(at))
            .await;

        match result {
            Ok(ReverseResponse {
                display_name: Some(name),
            }) if !name.trim().is_empty() => {
                debug!(%at, address = %name, "address found");
                GeocodeOutcome::Found(name)
            }
            Ok(_) => {
                debug!(%at, "no address for point");
                GeocodeOutcome::NotFound
            }
            Err(e) => {
                warn!(%at, error = %e, "error fetching address");
                GeocodeOutcome::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geocoder(base: &str) -> NominatimGeocoder {
        NominatimGeocoder::new(FetchClient::from_client(reqwest::Client::new()), base)
    }

    #[test]
    fn test_endpoint_joins_base() {
        assert_eq!(
            geocoder("https://nominatim.openstreetmap.org/").endpoint(),
            "https://nominatim.openstreetmap.org/reverse"
        );
    }

    #[test]
    fn test_query_parameters() {
        let query = geocoder(DEFAULT_NOMINATIM_URL)
            .with_zoom(16)
            .query(Coordinates::new(13.7563, 100.5018));

        assert_eq!(
            query,
            vec![
                ("format", "json".to_string()),
                ("lat", "13.7563".to_string()),
                ("lon", "100.5018".to_string()),
                ("zoom", "16".to_string()),
                ("addressdetails", "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_error_body_has_no_display_name() {
        let body: ReverseResponse =
            serde_json::from_str(r#"{"error":"Unable to geocode"}"#).unwrap();
        assert!(body.display_name.is_none());
    }
}
