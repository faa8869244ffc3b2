use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{CheckInOptions, EventRef, Visibility};
use crate::store::location::{Deadline, FixedLocation, LocationProvider, NoLocation};
use crate::ui::messages::{info, pin, success};

#[allow(clippy::too_many_arguments)]
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Checkin {
        user,
        venue_id,
        venue_name,
        note,
        mood,
        visibility,
        lat,
        lon,
        accuracy,
        event_id,
        event_name,
        event_date,
        event_time,
        event_image,
    } = cmd
    else {
        unreachable!("dispatched with a non-checkin command");
    };

    let visibility = match visibility {
        Some(code) => Some(Visibility::from_code(code).ok_or_else(|| {
            AppError::InvalidVisibility(format!(
                "'{}'. Use one of: public, friends, private",
                code
            ))
        })?),
        None => None,
    };

    let event = event_id.as_ref().map(|id| EventRef {
        id: id.clone(),
        venue_id: venue_id.clone(),
        venue_name: venue_name.clone(),
        name: event_name.clone().unwrap_or_else(|| venue_name.clone()),
        date: event_date.clone().unwrap_or_default(),
        time: event_time.clone().unwrap_or_default(),
        image_url: event_image.clone(),
        ticket_id: None,
        calendar_event_id: None,
    });

    // The CLI has no GPS: coordinates come from --lat/--lon or nowhere.
    let provider: Box<dyn LocationProvider> = match (lat, lon) {
        (Some(lat), Some(lon)) => {
            Box::new(Deadline::new(FixedLocation::new(*lat, *lon, *accuracy)))
        }
        _ => Box::new(NoLocation),
    };

    let store = open_store(cfg, provider)?;
    let prior = store.active_check_in(user);

    let options = CheckInOptions {
        note: note.clone(),
        mood: mood.clone(),
        visibility,
        event: None,
    };
    let record = match event {
        Some(event) => store.check_in_to_event(user, event, options)?,
        None => store.check_in(user, venue_id, venue_name, options)?,
    };

    if let Some(prior) = prior {
        info(format!("Closed previous check-in at {}", prior.venue_name));
    }
    success(format!("Checked in at {} ({})", record.venue_name, record.id));
    match &record.location {
        Some(loc) => pin(format!(
            "Position: {:.4},{:.4}",
            loc.latitude, loc.longitude
        )),
        None => info("No location captured, check-in saved without coordinates"),
    }

    Ok(())
}
