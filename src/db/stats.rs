use crate::db::kv;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use std::fs;

/// ANSI fragments for the info dump.
const RESET: &str = "\x1b[0m";
const CYAN: &str = "\x1b[36m";
const YELLOW: &str = "\x1b[33m";

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    let snapshot = kv::load_snapshot(&pool.conn)?;
    let active = snapshot.check_ins.iter().filter(|c| c.active).count();

    println!("{}• Check-ins:{} {}", CYAN, RESET, snapshot.check_ins.len());
    println!("{}• Active:{} {}", CYAN, RESET, active);
    println!("{}• Planned events:{} {}", CYAN, RESET, snapshot.planned.len());

    let audit_rows: i64 = pool.with_conn(|conn| {
        conn.query_row("SELECT COUNT(*) FROM audit", [], |row| row.get(0))
    })?;
    println!("{}• Audit rows:{} {}", CYAN, RESET, audit_rows);

    Ok(())
}

/// Run SQLite's integrity check and report the verdict.
pub fn check_integrity(pool: &mut DbPool) -> AppResult<bool> {
    let verdict: String = pool.with_conn(|conn| {
        conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))
    })?;
    Ok(verdict == "ok")
}
