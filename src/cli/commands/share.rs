use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::ShareTarget;
use crate::store::location::NoLocation;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Share {
        check_in_id,
        target,
    } = cmd
    else {
        unreachable!("dispatched with a non-share command");
    };

    let target = ShareTarget::from_code(target).ok_or_else(|| {
        AppError::InvalidShareTarget(format!(
            "'{}'. Use one of: facebook, twitter, instagram, copy",
            target
        ))
    })?;

    let store = open_store(cfg, Box::new(NoLocation))?;
    let output = store.share(check_in_id, target)?;

    info(format!("Share output ({}):", target.code()));
    println!("{}", output);

    Ok(())
}
