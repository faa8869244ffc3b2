//! Key-value snapshot storage. Two logical keys hold the engine state
//! as JSON: `userCheckIns` and `userPlannedEvents`.

use crate::db::audit;
use crate::errors::{AppError, AppResult};
use crate::models::{CheckIn, PlannedEvent};
use crate::store::Snapshot;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub const KEY_CHECK_INS: &str = "userCheckIns";
pub const KEY_PLANNED_EVENTS: &str = "userPlannedEvents";

pub fn kv_get(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let mut stmt = conn.prepare_cached("SELECT value FROM kv WHERE key = ?1")?;
    let value: Option<String> = stmt.query_row([key], |row| row.get(0)).optional()?;
    Ok(value)
}

pub fn kv_put(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, now],
    )?;
    Ok(())
}

/// Deserialize one kv key. Missing or malformed data yields an empty
/// collection with a note in the audit trail — startup never fails on
/// bad stored state.
fn load_key<T: serde::de::DeserializeOwned>(conn: &Connection, key: &str) -> AppResult<Vec<T>> {
    let Some(raw) = kv_get(conn, key)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(e) => {
            let _ = audit::record(
                conn,
                "load",
                key,
                &format!("malformed stored data ignored: {e}"),
            );
            Ok(Vec::new())
        }
    }
}

pub fn load_snapshot(conn: &Connection) -> AppResult<Snapshot> {
    let check_ins: Vec<CheckIn> = load_key(conn, KEY_CHECK_INS)?;
    let planned: Vec<PlannedEvent> = load_key(conn, KEY_PLANNED_EVENTS)?;
    Ok(Snapshot { check_ins, planned })
}

/// Overwrite both keys in one transaction (write-through).
pub fn save_snapshot(conn: &mut Connection, snapshot: &Snapshot) -> AppResult<()> {
    let check_ins = serde_json::to_string(&snapshot.check_ins)?;
    let planned = serde_json::to_string(&snapshot.planned)?;

    let tx = conn
        .transaction()
        .map_err(|e| AppError::Persistence(format!("begin transaction: {e}")))?;
    kv_put(&tx, KEY_CHECK_INS, &check_ins)?;
    kv_put(&tx, KEY_PLANNED_EVENTS, &planned)?;
    tx.commit()
        .map_err(|e| AppError::Persistence(format!("commit snapshot: {e}")))?;

    Ok(())
}
