//! Delivery address capture state machine.
//!
//! The machine itself is synchronous. Asynchronous lookups are split into a
//! "begin" call that hands out a generation-tagged ticket and an "apply"
//! call that takes the ticket back with the outcome. Only the most recently
//! issued ticket may change the flow, so a slow response can never clobber
//! a newer one regardless of arrival order.

use crate::checkout::{
    Coordinates, DeliveryAddress, GeocodeOutcome, LocateOutcome, FALLBACK_POSITION,
};
use crate::error::{CaptureError, RequiredField};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// States of the capture flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaptureState {
    /// Freshly created, marker on the fallback position.
    Idle,
    /// Waiting for the device position.
    Locating,
    /// Marker placed; the address lookup is in flight.
    Located,
    /// The customer can adjust every field.
    Editable,
    /// Address handed to the caller.
    Confirmed,
    /// Aborted without a result.
    Cancelled,
}

impl CaptureState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaptureState::Idle => "idle",
            CaptureState::Locating => "locating",
            CaptureState::Located => "located",
            CaptureState::Editable => "editable",
            CaptureState::Confirmed => "confirmed",
            CaptureState::Cancelled => "cancelled",
        }
    }

    /// Check if the flow is over.
    pub fn is_terminal(&self) -> bool {
        matches!(self, CaptureState::Confirmed | CaptureState::Cancelled)
    }

    /// Check if a lookup is outstanding.
    pub fn is_busy(&self) -> bool {
        matches!(self, CaptureState::Locating | CaptureState::Located)
    }
}

impl fmt::Display for CaptureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Monotonic tag of an issued lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Permission to apply one reverse geocoding result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocodeTicket {
    generation: Generation,
    coordinates: Coordinates,
}

impl GeocodeTicket {
    /// Point to look up.
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Generation the ticket belongs to.
    pub fn generation(&self) -> Generation {
        self.generation
    }
}

/// What happened to a reverse geocoding result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeocodeApplied {
    /// The address text was replaced.
    Updated,
    /// The customer typed an address after the lookup started; it was kept.
    KeptManualEdit,
    /// The service had no address for the point.
    NotFound,
    /// The lookup failed; the address text is unchanged.
    Failed,
    /// A newer lookup was issued or the flow is over; the result was dropped.
    Stale,
}

/// Delivery address capture flow.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressCapture {
    state: CaptureState,
    position: Coordinates,
    address: String,
    notes: String,
    phone: String,
    latest: Generation,
    address_edited: bool,
}

impl Default for AddressCapture {
    fn default() -> Self {
        Self::new(FALLBACK_POSITION)
    }
}

impl AddressCapture {
    /// Create an idle flow with the marker on `fallback`.
    pub fn new(fallback: Coordinates) -> Self {
        Self {
            state: CaptureState::Idle,
            position: fallback,
            address: String::new(),
            notes: String::new(),
            phone: String::new(),
            latest: Generation(0),
            address_edited: false,
        }
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Current marker position.
    pub fn position(&self) -> Coordinates {
        self.position
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Generation of the most recently issued lookup.
    pub fn latest_generation(&self) -> Generation {
        self.latest
    }

    /// Start a device position request.
    pub fn begin_locate(&mut self) -> Result<Generation, CaptureError> {
        self.ensure_open()?;
        let generation = self.next_generation();
        self.state = CaptureState::Locating;
        debug!(generation = generation.get(), "locating device");
        Ok(generation)
    }

    /// Apply the answer to a device position request.
    ///
    /// On success the marker moves and a ticket for the follow-up address
    /// lookup is returned. On failure the flow becomes editable where it is.
    /// Answers for superseded requests are ignored.
    pub fn finish_locate(
        &mut self,
        generation: Generation,
        outcome: LocateOutcome,
    ) -> Option<GeocodeTicket> {
        if !self.is_current(generation) {
            debug!(
                generation = generation.get(),
                latest = self.latest.get(),
                "dropping superseded position"
            );
            return None;
        }

        match outcome {
            LocateOutcome::Located(coordinates) => {
                self.position = coordinates;
                self.state = CaptureState::Located;
                Some(GeocodeTicket {
                    generation,
                    coordinates,
                })
            }
            LocateOutcome::Unavailable(reason) => {
                warn!(
                    %reason,
                    position = %self.position,
                    "geolocation unavailable, using current marker"
                );
                self.state = CaptureState::Editable;
                None
            }
        }
    }

    /// Move the marker (map tap) and issue an address lookup for it.
    pub fn select_position(
        &mut self,
        coordinates: Coordinates,
    ) -> Result<GeocodeTicket, CaptureError> {
        self.ensure_open()?;
        let generation = self.next_generation();
        self.position = coordinates;
        self.state = CaptureState::Located;
        debug!(generation = generation.get(), %coordinates, "marker moved");
        Ok(GeocodeTicket {
            generation,
            coordinates,
        })
    }

    /// Apply a reverse geocoding result.
    pub fn apply_geocode(
        &mut self,
        ticket: GeocodeTicket,
        outcome: GeocodeOutcome,
    ) -> GeocodeApplied {
        if !self.is_current(ticket.generation) {
            debug!(
                generation = ticket.generation.get(),
                latest = self.latest.get(),
                "dropping superseded address lookup"
            );
            return GeocodeApplied::Stale;
        }

        self.state = CaptureState::Editable;
        match outcome {
            GeocodeOutcome::Found(_) if self.address_edited => GeocodeApplied::KeptManualEdit,
            GeocodeOutcome::Found(display_name) => {
                self.address = display_name;
                GeocodeApplied::Updated
            }
            GeocodeOutcome::NotFound => GeocodeApplied::NotFound,
            GeocodeOutcome::Failed(reason) => {
                warn!(%reason, coordinates = %ticket.coordinates, "error fetching address");
                GeocodeApplied::Failed
            }
        }
    }

    /// Replace the address text. Later lookups will not overwrite it until
    /// the marker moves again.
    pub fn set_address(&mut self, address: impl Into<String>) -> Result<(), CaptureError> {
        self.ensure_open()?;
        self.address = address.into();
        self.address_edited = true;
        self.touch();
        Ok(())
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) -> Result<(), CaptureError> {
        self.ensure_open()?;
        self.notes = notes.into();
        self.touch();
        Ok(())
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) -> Result<(), CaptureError> {
        self.ensure_open()?;
        self.phone = phone.into();
        self.touch();
        Ok(())
    }

    /// Empty required fields, in display order.
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if self.address.is_empty() {
            missing.push(RequiredField::Address);
        }
        if self.phone.is_empty() {
            missing.push(RequiredField::Phone);
        }
        missing
    }

    /// Finalize the address.
    ///
    /// Rejected while address or phone is empty; the flow stays open so the
    /// customer can fix it.
    pub fn confirm(&mut self) -> Result<DeliveryAddress, CaptureError> {
        self.ensure_open()?;

        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(CaptureError::MissingFields(missing));
        }

        let notes = if self.notes.trim().is_empty() {
            None
        } else {
            Some(self.notes.clone())
        };
        self.state = CaptureState::Confirmed;
        Ok(DeliveryAddress {
            latitude: self.position.latitude,
            longitude: self.position.longitude,
            address: self.address.clone(),
            notes,
            phone: self.phone.clone(),
        })
    }

    /// Abort the flow and discard everything captured.
    pub fn cancel(&mut self) -> Result<(), CaptureError> {
        self.ensure_open()?;
        self.address.clear();
        self.notes.clear();
        self.phone.clear();
        self.address_edited = false;
        self.state = CaptureState::Cancelled;
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), CaptureError> {
        if self.state.is_terminal() {
            return Err(CaptureError::Finished(self.state));
        }
        Ok(())
    }

    fn is_current(&self, generation: Generation) -> bool {
        !self.state.is_terminal() && generation == self.latest
    }

    fn next_generation(&mut self) -> Generation {
        self.latest = Generation(self.latest.0 + 1);
        self.address_edited = false;
        self.latest
    }

    // Manual input never interrupts an outstanding lookup.
    fn touch(&mut self) {
        if self.state == CaptureState::Idle {
            self.state = CaptureState::Editable;
        }
    }
}
