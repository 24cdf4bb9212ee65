//! Interactive session: ask how many users to add, read each one from the
//! console, store it, then print everything stored so far.

use crate::config::Config;
use crate::core::password::{PasswordEncoder, encoder_for};
use crate::core::report;
use crate::db::gateway::Gateway;
use crate::errors::{AppError, AppResult};
use crate::models::field::Field;
use crate::models::user::UserRecord;
use crate::ui::messages::{Level, error, render};
use crate::utils::date::{parse_birthday, to_timestamp};
use std::io::{BufRead, Write};

/// What happened during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub requested: usize,
    pub inserted: usize,
    pub failed_attempts: usize,
}

pub struct Session<'a, R: BufRead, W: Write> {
    gw: &'a Gateway,
    input: R,
    out: W,
    encoder: Box<dyn PasswordEncoder>,
    /// 0 = unlimited
    max_insert_retries: u32,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(gw: &'a Gateway, input: R, out: W, cfg: &Config) -> AppResult<Self> {
        Ok(Self {
            gw,
            input,
            out,
            encoder: encoder_for(&cfg.password_storage)?,
            max_insert_retries: cfg.max_insert_retries,
        })
    }

    pub fn run(&mut self) -> AppResult<SessionSummary> {
        let mut summary = SessionSummary {
            requested: self.read_count()?,
            ..Default::default()
        };

        for index in 1..=summary.requested {
            summary.failed_attempts += self.add_user(index)?;
            summary.inserted += 1;
        }

        writeln!(self.out)?;
        self.print_report()?;
        writeln!(self.out)?;
        self.out.flush()?;

        Ok(summary)
    }

    /// Print the users table. A failed enumeration is reported, not raised.
    pub fn print_report(&mut self) -> AppResult<()> {
        match report::render_users(self.gw) {
            Ok(table) => write!(self.out, "{}", table)?,
            Err(e) => error(e),
        }
        Ok(())
    }

    fn read_line(&mut self) -> AppResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn prompt(&mut self, text: &str) -> AppResult<String> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        self.read_line()
    }

    /// Number of users to add. Zero is valid; negative or non-numeric input
    /// is asked again.
    pub fn read_count(&mut self) -> AppResult<usize> {
        loop {
            let line = self.prompt("Please enter the number of users to be added: ")?;
            if let Ok(n) = line.trim().parse::<usize>() {
                return Ok(n);
            }
            error(format!(
                "{}, please try again!",
                AppError::InvalidCount(line.trim().to_string())
            ));
        }
    }

    fn read_text(&mut self, index: usize, field: Field) -> AppResult<String> {
        let line = self.prompt(&format!(
            "Please enter the user ({}) {} ({} max): ",
            index,
            field.label(),
            field.max_len()
        ))?;

        let (value, truncated) = field.clip(line.trim());
        if truncated {
            let note = format!(
                "{} truncated to {} characters",
                field.label(),
                field.max_len()
            );
            writeln!(self.out, "{}", render(Level::Warning, note))?;
        }
        Ok(value)
    }

    fn read_birthday(&mut self, index: usize) -> AppResult<i64> {
        loop {
            let line = self.prompt(&format!(
                "Please enter the user ({}) birthday (d/m/yyyy): ",
                index
            ))?;

            match parse_birthday(&line).and_then(|(d, m, y)| to_timestamp(d, m, y)) {
                Ok(ts) => return Ok(ts),
                Err(e) => error(e),
            }
        }
    }

    fn read_user(&mut self, index: usize) -> AppResult<UserRecord> {
        let first_name = self.read_text(index, Field::FirstName)?;
        let last_name = self.read_text(index, Field::LastName)?;
        let birthday = self.read_birthday(index)?;
        let email = self.read_text(index, Field::Email)?;
        let password = self.read_text(index, Field::Password)?;

        Ok(
            UserRecord::new(&first_name, &last_name, Some(birthday), &email, &password)
                .encode_password(self.encoder.as_ref()),
        )
    }

    /// Read and store user `index`, asking again for the same index until
    /// the insert succeeds. Returns the number of failed attempts.
    fn add_user(&mut self, index: usize) -> AppResult<usize> {
        let mut failures = 0;
        loop {
            let user = self.read_user(index)?;
            match self.gw.insert(&user) {
                Ok(_) => return Ok(failures),
                Err(e) => {
                    failures += 1;
                    error(&e);
                    if self.max_insert_retries > 0 && failures > self.max_insert_retries as usize {
                        return Err(e);
                    }
                    writeln!(self.out, "Re-try to add user ({})", index)?;
                }
            }
        }
    }
}
