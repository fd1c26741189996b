//! Seams to the device position and reverse geocoding services.
//!
//! Both lookups are best effort. Failures come back as outcome values, not
//! errors, so the capture flow can always fall through to manual entry.

use crate::checkout::Coordinates;
use async_trait::async_trait;

/// Result of a single-shot device position query.
#[derive(Debug, Clone, PartialEq)]
pub enum LocateOutcome {
    /// The platform reported a position.
    Located(Coordinates),
    /// Denied, unsupported or failed; carries the reason for logging.
    Unavailable(String),
}

/// Result of a reverse geocoding lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeOutcome {
    /// A display name for the point.
    Found(String),
    /// The service answered without a display name.
    NotFound,
    /// Transport or decoding failure; carries the reason for logging.
    Failed(String),
}

/// Platform position provider.
#[async_trait]
pub trait Geolocator: Send + Sync {
    /// Ask for the current position once.
    async fn current_position(&self) -> LocateOutcome;
}

/// Coordinate to address lookup.
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// Look up a human-readable address for a point.
    async fn reverse(&self, at: Coordinates) -> GeocodeOutcome;
}
