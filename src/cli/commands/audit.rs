use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{audit, initialize, pool::DbPool};
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Audit { print } = cmd else {
        unreachable!("dispatched with a non-audit command");
    };

    if !*print {
        info("Nothing to do: pass --print to dump the audit table");
        return Ok(());
    }

    let pool = DbPool::new(&cfg.database)?;
    initialize::init_db(&pool.conn)?;

    let rows = audit::load_audit(&pool.conn)?;
    if rows.is_empty() {
        info("Audit table is empty");
        return Ok(());
    }
    for (date, operation, target, message) in rows {
        println!("{} | {} | {} | {}", date, operation, target, message);
    }

    Ok(())
}
