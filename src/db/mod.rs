//! Persistence layer: the gateway owning the SQLite connection, the `user`
//! schema, and read-only statistics.

pub mod gateway;
pub mod schema;
pub mod stats;

pub use gateway::Gateway;
