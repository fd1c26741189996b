//! Checkout module.
//!
//! Contains the delivery address record and the flow that captures it.

mod address;
mod flow;
mod location;
mod session;

pub use address::{Coordinates, DeliveryAddress, FALLBACK_POSITION};
pub use flow::{AddressCapture, CaptureState, GeocodeApplied, GeocodeTicket, Generation};
pub use location::{GeocodeOutcome, Geolocator, LocateOutcome, ReverseGeocoder};
pub use session::{CaptureOutcome, CaptureSession, FlowHandle};
