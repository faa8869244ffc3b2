use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{initialize, pool::DbPool, stats};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db { check, info } = cmd else {
        unreachable!("dispatched with a non-db command");
    };

    let mut pool = DbPool::new(&cfg.database)?;
    initialize::init_db(&pool.conn)?;

    if *check {
        if stats::check_integrity(&mut pool)? {
            success("Database integrity check passed");
        } else {
            warning("Database integrity check FAILED");
        }
    }

    if *info {
        stats::print_db_info(&mut pool, &cfg.database)?;
    }

    Ok(())
}
