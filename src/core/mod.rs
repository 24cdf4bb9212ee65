pub mod password;
pub mod report;
pub mod session;
