//! Sole owner of the SQLite connection. Every schema and data operation on
//! the user database goes through a `Gateway`; the connection is closed when
//! the gateway is dropped, on every exit path.

use crate::db::schema;
use crate::errors::{AppError, AppResult};
use crate::models::user::{UserRecord, UserRow};
use rusqlite::{Connection, params};
use std::path::Path;

const INSERT_USER: &str = "INSERT INTO user (first_name, last_name, birthday, email, password)
     VALUES (?1, ?2, ?3, ?4, ?5)";

const SELECT_USERS: &str = "SELECT id, first_name, last_name, birthday
     FROM user
     ORDER BY id ASC";

pub struct Gateway {
    conn: Connection,
    path: String,
}

impl Gateway {
    /// Open the database at `path`, creating the file if it does not exist.
    ///
    /// The catalog is read right away so that an unreadable or corrupt file
    /// fails here rather than at the first insert.
    pub fn open(path: &str) -> AppResult<Self> {
        let unavailable = |source: rusqlite::Error| AppError::StorageUnavailable {
            path: path.to_string(),
            source,
        };

        let conn = Connection::open(Path::new(path)).map_err(unavailable)?;
        conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| {
            row.get::<_, i64>(0)
        })
        .map_err(unavailable)?;

        Ok(Self {
            conn,
            path: path.to_string(),
        })
    }

    /// In-memory database, for tests and dry runs.
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory().map_err(|source| AppError::StorageUnavailable {
            path: ":memory:".to_string(),
            source,
        })?;
        Ok(Self {
            conn,
            path: ":memory:".to_string(),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw connection, for read-only diagnostics.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// `false` when the table is absent; only catalog read failures are errors.
    pub fn table_exists(&self, name: &str) -> AppResult<bool> {
        schema::table_exists(&self.conn, name)
    }

    /// Create the `user` table if missing. Must run before insert/enumerate.
    pub fn ensure_schema(&self) -> AppResult<()> {
        schema::ensure_user_table(&self.conn)
    }

    /// Append one record and return its id. Failures are not retried here.
    pub fn insert(&self, user: &UserRecord) -> AppResult<i64> {
        let failed = |e: rusqlite::Error| AppError::Insert {
            name: user.display_name(),
            detail: e.to_string(),
        };

        let mut stmt = self.conn.prepare_cached(INSERT_USER).map_err(failed)?;
        stmt.execute(params![
            user.first_name,
            user.last_name,
            user.birthday,
            user.email,
            user.password,
        ])
        .map_err(failed)?;

        Ok(self.conn.last_insert_rowid())
    }

    /// Stream every user, ordered by id, to `visit` one row at a time.
    /// Returns how many rows were visited. Call again to restart.
    pub fn enumerate<F>(&self, mut visit: F) -> AppResult<usize>
    where
        F: FnMut(UserRow) -> AppResult<()>,
    {
        let failed = |e: rusqlite::Error| AppError::Enumerate(e.to_string());

        let mut stmt = self.conn.prepare(SELECT_USERS).map_err(failed)?;
        let rows = stmt.query_map([], UserRow::from_row).map_err(failed)?;

        let mut seen = 0;
        for row in rows {
            visit(row.map_err(failed)?)?;
            seen += 1;
        }
        Ok(seen)
    }

    pub fn list_users(&self) -> AppResult<Vec<UserRow>> {
        let mut out = Vec::new();
        self.enumerate(|row| {
            out.push(row);
            Ok(())
        })?;
        Ok(out)
    }

    pub fn count_users(&self) -> AppResult<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM user", [], |row| row.get(0))?)
    }
}
