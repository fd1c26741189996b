//! Delivery address capture command.

use std::sync::Arc;

use anyhow::{bail, Context as _, Result};
use dialoguer::{Confirm, Input};
use storefront_commerce::checkout::{CaptureOutcome, CaptureSession, Coordinates};
use storefront_commerce::CaptureError;

use super::AddressArgs;
use crate::context::Context;

/// Run the address command.
pub async fn run(args: AddressArgs, ctx: &Context) -> Result<()> {
    let (mut session, outcome) = CaptureSession::new(
        Arc::new(ctx.locator()),
        Arc::new(ctx.geocoder()?),
        ctx.config.location.fallback(),
    );

    let spinner = ctx.output.spinner("Finding your location...");
    session.mount().await;
    spinner.finish_and_clear();

    if let (Some(lat), Some(lng)) = (args.lat, args.lng) {
        let spinner = ctx.output.spinner("Looking up the selected position...");
        session.select_position(Coordinates::new(lat, lng))?.await;
        spinner.finish_and_clear();
    }

    let flow = session.snapshot();
    ctx.output.header("Delivery Address");
    ctx.output.kv("position", &flow.position().to_string());
    if flow.address().is_empty() {
        ctx.output.warn("No address found for this position, please enter it manually");
    } else {
        ctx.output.kv("address", flow.address());
    }

    if let Some(address) = args.address {
        session.set_address(address)?;
    }
    if let Some(phone) = args.phone {
        session.set_phone(phone)?;
    }
    if let Some(notes) = args.notes {
        session.set_notes(notes)?;
    }

    if args.yes {
        session.confirm()?;
    } else {
        prompt_until_done(&mut session, ctx)?;
    }

    match outcome.await.context("Address capture ended without a result")? {
        CaptureOutcome::Confirmed(address) => {
            if ctx.output.is_json() {
                ctx.output.json(&address);
            } else {
                ctx.output.success("Delivery address confirmed");
                for line in address.multi_line().lines() {
                    ctx.output.list_item(line);
                }
            }
        }
        CaptureOutcome::Cancelled => {
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "cancelled": true }));
            } else {
                ctx.output.warn("Address capture cancelled");
            }
        }
    }

    Ok(())
}

/// Prompt for the fields, pre-filled with what the flow holds, until the
/// customer confirms a complete address or backs out.
fn prompt_until_done(session: &mut CaptureSession, ctx: &Context) -> Result<()> {
    loop {
        let flow = session.snapshot();

        let address: String = Input::new()
            .with_prompt("Address")
            .with_initial_text(flow.address())
            .allow_empty(true)
            .interact_text()?;
        if address != flow.address() {
            session.set_address(address)?;
        }

        let phone: String = Input::new()
            .with_prompt("Phone")
            .with_initial_text(flow.phone())
            .allow_empty(true)
            .interact_text()?;
        session.set_phone(phone)?;

        let notes: String = Input::new()
            .with_prompt("Notes (optional)")
            .with_initial_text(flow.notes())
            .allow_empty(true)
            .interact_text()?;
        session.set_notes(notes)?;

        let confirmed = Confirm::new()
            .with_prompt("Confirm this delivery address?")
            .default(true)
            .interact()?;

        if !confirmed {
            session.cancel()?;
            return Ok(());
        }

        match session.confirm() {
            Ok(()) => return Ok(()),
            Err(e @ CaptureError::MissingFields(_)) => ctx.output.error(&e.to_string()),
            Err(e) => bail!(e),
        }
    }
}
