//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_commerce::checkout::{Coordinates, FALLBACK_POSITION};
use storefront_data::{DEFAULT_CATALOG_URL, DEFAULT_NOMINATIM_URL, DEFAULT_USER_AGENT, DEFAULT_ZOOM};

/// File names searched for, nearest directory first.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StorefrontConfig {
    /// Product catalog endpoint.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Reverse geocoding service.
    #[serde(default)]
    pub geocoding: GeocodingConfig,

    /// Map positions.
    #[serde(default)]
    pub location: LocationConfig,

    /// Log filtering.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Problems that make the config unusable.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (key, url) in [
            ("catalog.url", &self.catalog.url),
            ("geocoding.url", &self.geocoding.url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                errors.push(format!("{} must be an http(s) URL, got '{}'", key, url));
            }
        }

        if self.geocoding.zoom > 18 {
            errors.push(format!("geocoding.zoom must be 0-18, got {}", self.geocoding.zoom));
        }

        if self.geocoding.user_agent.trim().is_empty() {
            errors.push("geocoding.user_agent is required by Nominatim".to_string());
        }

        if !is_valid_position(self.location.fallback()) {
            errors.push("location.fallback_* is not a valid coordinate".to_string());
        }

        match (self.location.device_latitude, self.location.device_longitude) {
            (Some(_), None) | (None, Some(_)) => errors.push(
                "location.device_latitude and location.device_longitude must be set together"
                    .to_string(),
            ),
            _ => {}
        }
        if let Some(device) = self.location.device() {
            if !is_valid_position(device) {
                errors.push("location.device_* is not a valid coordinate".to_string());
            }
        }

        errors
    }
}

fn is_valid_position(at: Coordinates) -> bool {
    (-90.0..=90.0).contains(&at.latitude) && (-180.0..=180.0).contains(&at.longitude)
}

/// Catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Product list URL.
    #[serde(default = "default_catalog_url")]
    pub url: String,
}

fn default_catalog_url() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: default_catalog_url(),
        }
    }
}

/// Reverse geocoding settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeocodingConfig {
    /// Nominatim base URL.
    #[serde(default = "default_geocoding_url")]
    pub url: String,

    /// Detail level, 18 is street level.
    #[serde(default = "default_zoom")]
    pub zoom: u8,

    /// User-Agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_geocoding_url() -> String {
    DEFAULT_NOMINATIM_URL.to_string()
}

fn default_zoom() -> u8 {
    DEFAULT_ZOOM
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            url: default_geocoding_url(),
            zoom: default_zoom(),
            user_agent: default_user_agent(),
        }
    }
}

/// Map position settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationConfig {
    /// Where the marker starts without a device position.
    #[serde(default = "default_fallback_latitude")]
    pub fallback_latitude: f64,

    #[serde(default = "default_fallback_longitude")]
    pub fallback_longitude: f64,

    /// Position reported as the device's own. Unset means no geolocation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_latitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_longitude: Option<f64>,
}

fn default_fallback_latitude() -> f64 {
    FALLBACK_POSITION.latitude
}

fn default_fallback_longitude() -> f64 {
    FALLBACK_POSITION.longitude
}

impl LocationConfig {
    pub fn fallback(&self) -> Coordinates {
        Coordinates::new(self.fallback_latitude, self.fallback_longitude)
    }

    pub fn device(&self) -> Option<Coordinates> {
        match (self.device_latitude, self.device_longitude) {
            (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)),
            _ => None,
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            fallback_latitude: default_fallback_latitude(),
            fallback_longitude: default_fallback_longitude(),
            device_latitude: None,
            device_longitude: None,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Generate a commented default config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Storefront configuration

[catalog]
url = "{catalog}"

[geocoding]
url = "{geocoding}"
zoom = {zoom}
user_agent = "{user_agent}"

[location]
fallback_latitude = {lat}
fallback_longitude = {lng}
# Report a device position to skip the fallback:
# device_latitude = 13.7466
# device_longitude = 100.5393

[logging]
level = "warn"
"#,
        catalog = DEFAULT_CATALOG_URL,
        geocoding = DEFAULT_NOMINATIM_URL,
        zoom = DEFAULT_ZOOM,
        user_agent = DEFAULT_USER_AGENT,
        lat = FALLBACK_POSITION.latitude,
        lng = FALLBACK_POSITION.longitude,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: StorefrontConfig = toml::from_str("").unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.catalog.url, DEFAULT_CATALOG_URL);
        assert_eq!(config.location.fallback(), FALLBACK_POSITION);
        assert_eq!(config.location.device(), None);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_generated_config_round_trips() {
        let config: StorefrontConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config: StorefrontConfig = toml::from_str(
            r#"
            [geocoding]
            zoom = 16

            [location]
            device_latitude = 1.5
            device_longitude = 2.5
            "#,
        )
        .unwrap();

        assert_eq!(config.geocoding.zoom, 16);
        assert_eq!(config.geocoding.url, DEFAULT_NOMINATIM_URL);
        assert_eq!(config.location.device(), Some(Coordinates::new(1.5, 2.5)));
    }

    #[test]
    fn test_validate_reports_problems() {
        let mut config = StorefrontConfig::default();
        config.catalog.url = "fakestoreapi.com/products".to_string();
        config.geocoding.zoom = 30;
        config.location.device_latitude = Some(95.0);

        let errors = config.validate();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].starts_with("catalog.url"));
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("storefront.toml");
        std::fs::write(&toml_path, "[logging]\nlevel = \"debug\"\n").unwrap();
        let config = StorefrontConfig::load(toml_path.to_str().unwrap()).unwrap();
        assert_eq!(config.logging.level, "debug");

        let json_path = dir.path().join("storefront.json");
        std::fs::write(&json_path, r#"{"geocoding": {"zoom": 10}}"#).unwrap();
        let config = StorefrontConfig::load(json_path.to_str().unwrap()).unwrap();
        assert_eq!(config.geocoding.zoom, 10);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        std::fs::write(&path, "[catalog\nurl = 1").unwrap();

        let err = StorefrontConfig::load(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse TOML config"));
    }
}
