use crate::cli::commands::open_store;
use crate::cli::parser::{Commands, PlanAction};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{PlannedEventDraft, PlannedSource};
use crate::store::location::NoLocation;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Plan { action } = cmd else {
        unreachable!("dispatched with a non-plan command");
    };

    let store = open_store(cfg, Box::new(NoLocation))?;

    match action {
        PlanAction::Add {
            event_id,
            event_name,
            venue_id,
            venue_name,
            date,
            time,
            source,
            source_id,
            image_url,
        } => {
            let source = match source {
                Some(code) => PlannedSource::from_code(code).ok_or_else(|| {
                    AppError::Validation(format!(
                        "invalid source '{}': use ticket, calendar, or manual",
                        code
                    ))
                })?,
                None => PlannedSource::Manual,
            };

            let record = store.add_planned_event(PlannedEventDraft {
                event_id: event_id.clone(),
                event_name: event_name.clone(),
                venue_id: venue_id.clone(),
                venue_name: venue_name.clone(),
                date: date.clone(),
                time: time.clone(),
                source,
                source_id: source_id.clone(),
                image_url: image_url.clone(),
            })?;

            success(format!(
                "Planned: {} at {} on {} {} ({})",
                record.event_name, record.venue_name, record.date, record.time, record.id
            ));
        }

        PlanAction::Del { event_id } => {
            store.remove_planned_event(event_id)?;
            success(format!("Removed planned event {}", event_id));
        }

        PlanAction::Toggle { event_id } => {
            let updated = store.toggle_sharing(event_id)?;
            if updated.shared {
                success(format!("Sharing enabled for {}", event_id));
            } else {
                success(format!("Sharing disabled for {}", event_id));
            }
        }

        PlanAction::List => {
            let rows = store.planned_events();
            if rows.is_empty() {
                info("No planned events");
                return Ok(());
            }
            for p in &rows {
                println!(
                    "{} {} | {} | {} | {} | shared: {} | {}",
                    p.date,
                    p.time,
                    p.event_name,
                    p.venue_name,
                    p.source.code(),
                    if p.shared { "yes" } else { "no" },
                    p.event_id
                );
            }
        }
    }

    Ok(())
}
