pub mod audit;
pub mod checkin;
pub mod db;
pub mod end;
pub mod init;
pub mod list;
pub mod plan;
pub mod share;

use crate::config::Config;
use crate::db::SqliteAdapter;
use crate::errors::AppResult;
use crate::store::CheckInStore;
use crate::store::location::LocationProvider;

/// Open the engine against the configured database with the given
/// location provider.
pub(crate) fn open_store(
    cfg: &Config,
    provider: Box<dyn LocationProvider>,
) -> AppResult<CheckInStore> {
    let adapter = SqliteAdapter::open(&cfg.database)?;
    Ok(CheckInStore::open(
        Box::new(adapter),
        provider,
        cfg.store_settings(),
    ))
}
