use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{CheckIn, GeoCoordinate};
use crate::store::location::NoLocation;
use crate::ui::messages::{info, pin};
use chrono::Utc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::List {
        user,
        limit,
        nearby,
        radius,
        feed,
        excluding,
    } = cmd
    else {
        unreachable!("dispatched with a non-list command");
    };

    let store = open_store(cfg, Box::new(NoLocation))?;
    let queries = store.queries();

    let rows = if let Some(user) = user {
        let limit = limit.unwrap_or(cfg.default_recent_limit);
        info(format!("Recent check-ins for {}:", user));
        queries.recent_by_user(user, limit)
    } else if let Some(raw) = nearby {
        let origin = parse_origin(raw)?;
        let radius_km = radius.unwrap_or(cfg.default_radius_km);
        pin(format!(
            "Check-ins within {} km of {:.4},{:.4}:",
            radius_km, origin.latitude, origin.longitude
        ));
        queries.nearby(&origin, radius_km, *limit)?
    } else if *feed {
        let excluding = excluding.as_deref().unwrap_or_default();
        info(format!("Check-ins from others (excluding {}):", excluding));
        queries.visible_to_others(excluding)
    } else {
        return Err(AppError::Validation(
            "nothing to list: use --user, --nearby, or --feed".to_string(),
        ));
    };

    if rows.is_empty() {
        info("No check-ins found");
        return Ok(());
    }
    for row in &rows {
        print_row(row);
    }

    Ok(())
}

/// Parse "LAT,LON" into a validated origin stamped with the current time.
fn parse_origin(raw: &str) -> AppResult<GeoCoordinate> {
    let parse = |part: Option<&str>| -> Option<f64> { part?.trim().parse().ok() };

    let mut parts = raw.splitn(2, ',');
    let lat = parse(parts.next());
    let lon = parse(parts.next());

    match (lat, lon) {
        (Some(lat), Some(lon)) => {
            GeoCoordinate::new(lat, lon, None, Utc::now().timestamp_millis())
        }
        _ => Err(AppError::Validation(format!(
            "invalid --nearby value '{}': expected LAT,LON",
            raw
        ))),
    }
}

fn print_row(c: &CheckIn) {
    println!(
        "{} | {} | {} | {} | {} | {}",
        c.created_at_str(),
        c.venue_name,
        c.status_str(),
        c.visibility.code(),
        c.location_str(),
        c.id
    );
}
