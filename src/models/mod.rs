pub mod field;
pub mod user;
