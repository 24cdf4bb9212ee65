//! User record as entered on the console, and the row shape read back
//! from the `user` table.

use super::field::Field;
use crate::core::password::PasswordEncoder;
use rusqlite::Row;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub first_name: String, // ⇔ user.first_name (TEXT NOT NULL)
    pub last_name: String,  // ⇔ user.last_name (TEXT NOT NULL)
    pub birthday: Option<i64>, // ⇔ user.birthday (INTEGER, epoch seconds)
    pub email: String,      // ⇔ user.email (TEXT)
    pub password: String, // ⇔ user.password (TEXT), as stored
}

impl UserRecord {
    /// Build a record, truncating every text field to its limit.
    pub fn new(
        first_name: &str,
        last_name: &str,
        birthday: Option<i64>,
        email: &str,
        password: &str,
    ) -> Self {
        Self {
            first_name: Field::FirstName.clip(first_name).0,
            last_name: Field::LastName.clip(last_name).0,
            birthday,
            email: Field::Email.clip(email).0,
            password: Field::Password.clip(password).0,
        }
    }

    /// Replace the raw password with its stored form. The limit applies to
    /// the raw value only, so this runs after truncation.
    pub fn encode_password(mut self, encoder: &dyn PasswordEncoder) -> Self {
        self.password = encoder.encode(&self.password);
        self
    }

    /// "First Last", used in error messages.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Projection returned by enumeration: email and password are never read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birthday: Option<i64>,
}

impl UserRow {
    /// Map a row of `SELECT id, first_name, last_name, birthday`.
    pub fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
            birthday: row.get("birthday")?,
        })
    }
}
