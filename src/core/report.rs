//! The `first_name | last_name | birthday` report.

use crate::db::gateway::Gateway;
use crate::errors::AppResult;
use crate::models::user::UserRow;
use crate::utils::date::format_birthday;
use crate::utils::table::{Column, Table};

const NULL_TEXT: &str = "(null)";

fn users_table() -> Table {
    Table::new(vec![
        Column::new("first_name", 10),
        Column::new("last_name", 10),
        Column::new("birthday", 10),
    ])
    .with_rule(36)
}

fn cells(row: &UserRow) -> Vec<String> {
    vec![
        row.first_name.clone().unwrap_or_else(|| NULL_TEXT.into()),
        row.last_name.clone().unwrap_or_else(|| NULL_TEXT.into()),
        format_birthday(row.birthday),
    ]
}

/// Render already loaded rows.
pub fn render_rows(rows: &[UserRow]) -> String {
    let mut table = users_table();
    for row in rows {
        table.add_row(cells(row));
    }
    table.render()
}

/// Enumerate the database and render every user.
/// Nothing is rendered, not even the header, when enumeration fails.
pub fn render_users(gw: &Gateway) -> AppResult<String> {
    let mut table = users_table();
    gw.enumerate(|row| {
        table.add_row(cells(&row));
        Ok(())
    })?;
    Ok(table.render())
}
