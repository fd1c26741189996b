//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_data::{CatalogClient, FetchClient, FixedLocator, NominatimGeocoder};

use crate::config::{StorefrontConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: StorefrontConfig,
    /// Where the configuration came from, if anywhere.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (StorefrontConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            match find_config_file(&cwd) {
                Some(path) => {
                    let config = StorefrontConfig::load(&path.to_string_lossy())?;
                    (config, Some(path))
                }
                None => (StorefrontConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// HTTP client identified with the configured user agent.
    pub fn fetch_client(&self) -> Result<FetchClient> {
        FetchClient::new(&self.config.geocoding.user_agent).context("Failed to build HTTP client")
    }

    pub fn catalog(&self) -> Result<CatalogClient> {
        Ok(CatalogClient::new(self.fetch_client()?, &self.config.catalog.url))
    }

    pub fn geocoder(&self) -> Result<NominatimGeocoder> {
        Ok(
            NominatimGeocoder::new(self.fetch_client()?, &self.config.geocoding.url)
                .with_zoom(self.config.geocoding.zoom),
        )
    }

    /// The configured device position; unset behaves like a device without
    /// geolocation.
    pub fn locator(&self) -> FixedLocator {
        FixedLocator::new(self.config.location.device())
    }
}

/// Find a config file in the directory tree, nearest first.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_FILE_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("storefront.toml"), "").unwrap();

        let found = find_config_file(&nested).unwrap();
        assert_eq!(found, dir.path().join("storefront.toml"));
    }

    #[test]
    fn test_nearest_config_wins() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("shop");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("storefront.toml"), "").unwrap();
        std::fs::write(nested.join(".storefront.toml"), "").unwrap();

        assert_eq!(
            find_config_file(&nested).unwrap(),
            nested.join(".storefront.toml")
        );
    }
}
