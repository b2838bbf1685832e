//! Database access layer.
//!
//! Connections are opened per call from `DB_*` environment variables and
//! released when the returned session goes out of scope. There is no pool.

mod connection;
mod error;

pub use connection::{
    ConnectionSettings, DB_HOST, DB_NAME, DB_PASSWORD, DB_PORT, DB_USER, DbSession, connect,
    connect_with,
};
pub use error::{DatabaseError, DatabaseResult};
