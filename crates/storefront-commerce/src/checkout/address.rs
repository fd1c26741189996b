//! Delivery address types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Where the map starts when the device position is unknown (Bangkok).
pub const FALLBACK_POSITION: Coordinates = Coordinates::new(13.7563, 100.5018);

/// A confirmed delivery address.
///
/// Produced once by a confirmed capture flow and owned by whoever receives it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryAddress {
    /// Latitude of the marker.
    pub latitude: f64,
    /// Longitude of the marker.
    pub longitude: f64,
    /// Human-readable address, as last edited.
    pub address: String,
    /// Delivery instructions.
    pub notes: Option<String>,
    /// Contact phone number.
    pub phone: String,
}

impl DeliveryAddress {
    /// Marker position.
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// Format as multi-line.
    pub fn multi_line(&self) -> String {
        let mut lines = vec![self.address.clone(), format!("Phone: {}", self.phone)];
        if let Some(ref notes) = self.notes {
            lines.push(format!("Notes: {}", notes));
        }
        lines.push(format!("({})", self.coordinates()));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_display() {
        assert_eq!(FALLBACK_POSITION.to_string(), "13.756300, 100.501800");
    }

    #[test]
    fn test_address_formatting() {
        let address = DeliveryAddress {
            latitude: 1.5,
            longitude: 2.25,
            address: "1 Sukhumvit Rd".to_string(),
            notes: Some("Leave at the gate".to_string()),
            phone: "0812345678".to_string(),
        };

        let text = address.multi_line();
        assert!(text.starts_with("1 Sukhumvit Rd\nPhone: 0812345678"));
        assert!(text.contains("Notes: Leave at the gate"));
        assert_eq!(address.coordinates(), Coordinates::new(1.5, 2.25));
    }
}
