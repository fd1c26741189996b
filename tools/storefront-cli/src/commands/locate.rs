//! Reverse geocoding command.

use anyhow::{bail, Result};
use storefront_commerce::checkout::{Coordinates, GeocodeOutcome, ReverseGeocoder};

use super::LocateArgs;
use crate::context::Context;

/// Run the locate command.
pub async fn run(args: LocateArgs, ctx: &Context) -> Result<()> {
    let at = Coordinates::new(args.lat, args.lng);
    let geocoder = ctx.geocoder()?;

    let spinner = ctx.output.spinner(&format!("Looking up {}...", at));
    let outcome = geocoder.reverse(at).await;
    spinner.finish_and_clear();

    if ctx.output.is_json() {
        let (status, address) = match &outcome {
            GeocodeOutcome::Found(address) => ("found", Some(address.as_str())),
            GeocodeOutcome::NotFound => ("not_found", None),
            GeocodeOutcome::Failed(_) => ("failed", None),
        };
        ctx.output.json(&serde_json::json!({
            "latitude": at.latitude,
            "longitude": at.longitude,
            "status": status,
            "address": address,
        }));
        return Ok(());
    }

    match outcome {
        GeocodeOutcome::Found(address) => {
            ctx.output.success(&address);
            ctx.output.kv("position", &at.to_string());
            Ok(())
        }
        GeocodeOutcome::NotFound => {
            ctx.output.warn(&format!("No address found at {}", at));
            Ok(())
        }
        GeocodeOutcome::Failed(reason) => bail!("Address lookup failed: {}", reason),
    }
}
