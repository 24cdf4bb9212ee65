//! Console messages: the single place where the tool reports what it is doing.
//! Normal progress goes to stdout, errors always go to stderr.

use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn color(self) -> &'static str {
        match self {
            Level::Info => FG_BLUE,
            Level::Success => FG_GREEN,
            Level::Warning => FG_YELLOW,
            Level::Error => FG_RED,
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }
}

/// Build the decorated line without printing it.
pub fn render<T: fmt::Display>(level: Level, msg: T) -> String {
    format!("{}{}{} {}{}", level.color(), BOLD, level.icon(), RESET, msg)
}

fn emit<T: fmt::Display>(level: Level, msg: T) {
    let line = render(level, msg);
    if level == Level::Error {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, msg);
}

/// Section header, used before reports.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}== {} =={}", FG_BLUE, BOLD, msg, RESET);
}
