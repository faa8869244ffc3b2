use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::location::NoLocation;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::End { check_in_id } = cmd else {
        unreachable!("dispatched with a non-end command");
    };

    let store = open_store(cfg, Box::new(NoLocation))?;

    if store.end_check_in(check_in_id)? {
        success(format!("Check-in {} ended", check_in_id));
    } else {
        info("Nothing to do: check-in is unknown or already ended");
    }

    Ok(())
}
