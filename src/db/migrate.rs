use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension};

/// Ensure the `audit` table exists with the modern schema.
fn ensure_audit_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS audit (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `kv` table exists.
fn kv_table_exists(conn: &Connection) -> AppResult<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='kv'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `kv` table holding the serialized snapshot keys.
fn create_kv_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Record an applied migration in the audit trail, once.
fn mark_migration(conn: &Connection, version: &str, message: &str) -> AppResult<()> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM audit
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    conn.execute(
        "INSERT INTO audit (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_audit_table(conn)?;

    if !kv_table_exists(conn)? {
        create_kv_table(conn)?;
        mark_migration(
            conn,
            "20260301_0001_create_kv",
            "Created kv table for check-in snapshots",
        )?;
    }

    Ok(())
}
