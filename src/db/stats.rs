use crate::db::gateway::Gateway;
use crate::db::schema::{USER_TABLE, table_columns};
use crate::errors::AppResult;
use crate::ui::messages::header;
use std::fs;

/// Summary printed by `db --info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbInfo {
    pub path: String,
    pub size_bytes: u64,
    pub has_user_table: bool,
    pub columns: Vec<String>,
    pub users: i64,
    pub first_id: Option<i64>,
    pub last_id: Option<i64>,
}

pub fn collect(gw: &Gateway) -> AppResult<DbInfo> {
    let size_bytes = fs::metadata(gw.path()).map(|m| m.len()).unwrap_or(0);
    let has_user_table = gw.table_exists(USER_TABLE)?;

    let (columns, users, first_id, last_id) = if has_user_table {
        let users = gw.count_users()?;
        let (first, last) =
            gw.conn()
                .query_row("SELECT MIN(id), MAX(id) FROM user", [], |row| {
                    Ok((row.get::<_, Option<i64>>(0)?, row.get::<_, Option<i64>>(1)?))
                })?;
        (table_columns(gw.conn(), USER_TABLE)?, users, first, last)
    } else {
        (Vec::new(), 0, None, None)
    };

    Ok(DbInfo {
        path: gw.path().to_string(),
        size_bytes,
        has_user_table,
        columns,
        users,
        first_id,
        last_id,
    })
}

/// `PRAGMA integrity_check`; "ok" when the file is sound.
pub fn integrity_check(gw: &Gateway) -> AppResult<String> {
    Ok(gw
        .conn()
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?)
}

pub fn print_db_info(info: &DbInfo) {
    let kb = info.size_bytes as f64 / 1024.0;
    let id_range = match (info.first_id, info.last_id) {
        (Some(f), Some(l)) => format!("{} .. {}", f, l),
        _ => "--".to_string(),
    };

    header("Database");
    println!("• File:        {}", info.path);
    println!("• Size:        {:.1} KB", kb);
    println!(
        "• user table:  {}",
        if info.has_user_table { "present" } else { "missing" }
    );
    if !info.columns.is_empty() {
        println!("• Columns:     {}", info.columns.join(", "));
    }
    println!("• Total users: {}", info.users);
    println!("• Id range:    {}", id_range);
}
