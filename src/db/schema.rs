//! The `user` table definition and catalog lookups.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

pub const USER_TABLE: &str = "user";

/// Column layout kept identical to databases written by earlier versions.
pub const CREATE_USER_TABLE: &str = r#"
    CREATE TABLE user (
        id         INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT UNIQUE,
        first_name TEXT NOT NULL,
        last_name  TEXT NOT NULL,
        birthday   INTEGER,
        email      TEXT,
        password   TEXT
    );
"#;

/// Check if a table named exactly `name` exists (case-sensitive).
pub fn table_exists(conn: &Connection, name: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached(
        "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1 LIMIT 1",
    )?;
    Ok(stmt.exists([name])?)
}

/// Create the `user` table if it is missing. Calling it again is a no-op.
pub fn ensure_user_table(conn: &Connection) -> AppResult<()> {
    let exists = table_exists(conn, USER_TABLE).map_err(|e| AppError::Schema(e.to_string()))?;
    if exists {
        return Ok(());
    }

    conn.execute_batch(CREATE_USER_TABLE)
        .map_err(|e| AppError::Schema(e.to_string()))
}

/// Column names of `table`, in declaration order.
pub fn table_columns(conn: &Connection, table: &str) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1)")?;
    let cols = stmt.query_map([table], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for c in cols {
        out.push(c?);
    }
    Ok(out)
}
