//! Device position providers.

use async_trait::async_trait;
use storefront_commerce::checkout::{Coordinates, Geolocator, LocateOutcome};

/// A position known up front, or none at all.
///
/// Stands in for the platform geolocation service where there is none (for
/// example the command line, where the position comes from configuration).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedLocator {
    position: Option<Coordinates>,
}

impl FixedLocator {
    pub fn new(position: Option<Coordinates>) -> Self {
        Self { position }
    }

    /// A locator that always fails, as on a device without geolocation.
    pub fn unsupported() -> Self {
        Self { position: None }
    }
}

#[async_trait]
impl Geolocator for FixedLocator {
    async fn current_position(&self) -> LocateOutcome {
        match self.position {
            Some(position) => LocateOutcome::Located(position),
            None => LocateOutcome::Unavailable("geolocation not supported".to_string()),
        }
    }
}
