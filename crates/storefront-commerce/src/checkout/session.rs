//! Async driver for the address capture flow.
//!
//! A [`CaptureSession`] is the mounted address picker. It owns the flow;
//! lookups it starts only hold a [`FlowHandle`], a weak reference, so a
//! response that lands after the session is dropped finds nothing to update
//! and is discarded. The finished address (or the cancellation) is delivered
//! once through a oneshot channel.

use crate::checkout::{
    AddressCapture, CaptureState, Coordinates, DeliveryAddress, GeocodeApplied, GeocodeTicket,
    Geolocator, ReverseGeocoder,
};
use crate::error::CaptureError;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError, Weak};
use tokio::sync::oneshot;
use tracing::{debug, info};

/// The single result of a capture session.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureOutcome {
    /// The customer confirmed this address.
    Confirmed(DeliveryAddress),
    /// The customer backed out.
    Cancelled,
}

/// Weak reference to a mounted flow.
#[derive(Debug, Clone)]
pub struct FlowHandle {
    flow: Weak<Mutex<AddressCapture>>,
}

impl FlowHandle {
    /// Run `f` against the flow if it is still mounted.
    pub fn with<R>(&self, f: impl FnOnce(&mut AddressCapture) -> R) -> Option<R> {
        let Some(flow) = self.flow.upgrade() else {
            debug!("address picker unmounted, discarding update");
            return None;
        };
        let mut guard = flow.lock().unwrap_or_else(PoisonError::into_inner);
        Some(f(&mut guard))
    }

    /// Check whether the session still exists.
    pub fn is_mounted(&self) -> bool {
        self.flow.strong_count() > 0
    }
}

/// A mounted delivery address picker.
pub struct CaptureSession {
    flow: Arc<Mutex<AddressCapture>>,
    locator: Arc<dyn Geolocator>,
    geocoder: Arc<dyn ReverseGeocoder>,
    outcome: Option<oneshot::Sender<CaptureOutcome>>,
}

impl CaptureSession {
    /// Create a session with the marker on `fallback`.
    ///
    /// The receiver yields exactly one [`CaptureOutcome`], or an error if the
    /// session is dropped first.
    pub fn new(
        locator: Arc<dyn Geolocator>,
        geocoder: Arc<dyn ReverseGeocoder>,
        fallback: Coordinates,
    ) -> (Self, oneshot::Receiver<CaptureOutcome>) {
        let (tx, rx) = oneshot::channel();
        let session = Self {
            flow: Arc::new(Mutex::new(AddressCapture::new(fallback))),
            locator,
            geocoder,
            outcome: Some(tx),
        };
        (session, rx)
    }

    /// A weak handle to the flow.
    pub fn handle(&self) -> FlowHandle {
        FlowHandle {
            flow: Arc::downgrade(&self.flow),
        }
    }

    /// Copy of the current flow, for rendering.
    pub fn snapshot(&self) -> AddressCapture {
        self.lock().clone()
    }

    pub fn state(&self) -> CaptureState {
        self.lock().state()
    }

    /// Locate the device when the picker opens.
    ///
    /// The returned future only holds a weak handle; it may be spawned or
    /// awaited, and outlive the session harmlessly.
    pub fn mount(&self) -> impl Future<Output = ()> + Send + 'static {
        self.use_current_location()
    }

    /// Re-run the device position lookup ("use current location").
    ///
    /// The request is issued on the call, not on first poll, so it is
    /// superseded by any tap made after it.
    pub fn use_current_location(&self) -> impl Future<Output = ()> + Send + 'static {
        let generation = self.lock().begin_locate().ok();
        let handle = self.handle();
        let locator = Arc::clone(&self.locator);
        let geocoder = Arc::clone(&self.geocoder);
        async move {
            let Some(generation) = generation else {
                return;
            };
            let outcome = locator.current_position().await;
            let ticket = handle
                .with(|flow| flow.finish_locate(generation, outcome))
                .flatten();
            if let Some(ticket) = ticket {
                resolve_address(handle, geocoder, ticket).await;
            }
        }
    }

    /// Move the marker (map tap) and look up its address.
    pub fn select_position(
        &self,
        coordinates: Coordinates,
    ) -> Result<impl Future<Output = ()> + Send + 'static, CaptureError> {
        let ticket = self.lock().select_position(coordinates)?;
        let handle = self.handle();
        let geocoder = Arc::clone(&self.geocoder);
        Ok(resolve_address(handle, geocoder, ticket))
    }

    pub fn set_address(&self, address: impl Into<String>) -> Result<(), CaptureError> {
        self.lock().set_address(address)
    }

    pub fn set_notes(&self, notes: impl Into<String>) -> Result<(), CaptureError> {
        self.lock().set_notes(notes)
    }

    pub fn set_phone(&self, phone: impl Into<String>) -> Result<(), CaptureError> {
        self.lock().set_phone(phone)
    }

    /// Confirm and deliver the address to the receiver.
    pub fn confirm(&mut self) -> Result<(), CaptureError> {
        let address = self.lock().confirm()?;
        info!(position = %address.coordinates(), "delivery address confirmed");
        self.deliver(CaptureOutcome::Confirmed(address));
        Ok(())
    }

    /// Cancel and tell the receiver.
    pub fn cancel(&mut self) -> Result<(), CaptureError> {
        self.lock().cancel()?;
        info!("delivery address capture cancelled");
        self.deliver(CaptureOutcome::Cancelled);
        Ok(())
    }

    fn deliver(&mut self, outcome: CaptureOutcome) {
        if let Some(tx) = self.outcome.take() {
            // The receiver may already be gone; nobody is left to tell.
            let _ = tx.send(outcome);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, AddressCapture> {
        self.flow.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for CaptureSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureSession")
            .field("flow", &*self.lock())
            .field("delivered", &self.outcome.is_none())
            .finish()
    }
}

async fn resolve_address(
    handle: FlowHandle,
    geocoder: Arc<dyn ReverseGeocoder>,
    ticket: GeocodeTicket,
) {
    let outcome = geocoder.reverse(ticket.coordinates()).await;
    if let Some(applied) = handle.with(|flow| flow.apply_geocode(ticket, outcome)) {
        if applied != GeocodeApplied::Stale {
            debug!(?applied, generation = ticket.generation().get(), "address lookup applied");
        }
    }
}
