//! Per-call PostgreSQL connections.
//!
//! Credentials are resolved from the environment every time a connection is
//! opened. The returned [`DbSession`] owns the client; dropping it makes the
//! driver task send `Terminate` and close the socket.

use std::ops::Deref;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncWrite};
use tokio_postgres::{Client, Connection, NoTls, Row, types::ToSql};
use tracing::{debug, warn};

use super::error::{DatabaseError, DatabaseResult};
use crate::core::config::DatabaseConfig;

/// Environment variable names holding the connection credentials.
pub const DB_HOST: &str = "DB_HOST";
pub const DB_PORT: &str = "DB_PORT";
pub const DB_NAME: &str = "DB_NAME";
pub const DB_USER: &str = "DB_USER";
pub const DB_PASSWORD: &str = "DB_PASSWORD";

/// Connection credentials for a single call.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub user: String,
    pub password: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("dbname", &self.dbname)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl ConnectionSettings {
    /// Resolve settings from the process environment.
    pub fn from_env() -> DatabaseResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> DatabaseResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &'static str| lookup(key).ok_or(DatabaseError::MissingVariable(key));

        let host = require(DB_HOST)?;
        let raw_port = require(DB_PORT)?;
        let port = raw_port
            .trim()
            .parse::<u16>()
            .map_err(|_| DatabaseError::InvalidPort { value: raw_port })?;

        Ok(Self {
            host,
            port,
            dbname: require(DB_NAME)?,
            user: require(DB_USER)?,
            password: require(DB_PASSWORD)?,
        })
    }

    fn to_pg_config(&self, connect_timeout: Duration) -> tokio_postgres::Config {
        let mut config = tokio_postgres::Config::new();
        config
            .host(&self.host)
            .port(self.port)
            .dbname(&self.dbname)
            .user(&self.user)
            .password(&self.password)
            .application_name(env!("CARGO_PKG_NAME"))
            .connect_timeout(connect_timeout);
        config
    }
}

/// An open connection that is closed when dropped.
pub struct DbSession {
    client: Client,
    query_timeout: Duration,
}

impl DbSession {
    /// Spawn the driver for `connection` and wrap its client.
    ///
    /// The driver runs until the client is gone, then exits on its own.
    fn start<S, T>(client: Client, connection: Connection<S, T>, query_timeout: Duration) -> Self
    where
        S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
        T: AsyncRead + AsyncWrite + Unpin + Send + 'static,
    {
        tokio::spawn(async move {
            match connection.await {
                Ok(()) => debug!("Database session released"),
                Err(e) => warn!("Database connection error: {}", e),
            }
        });

        Self {
            client,
            query_timeout,
        }
    }

    /// Run a statement returning rows, bounded by the query timeout.
    pub async fn query(
        &self,
        statement: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> DatabaseResult<Vec<Row>> {
        tokio::time::timeout(self.query_timeout, self.client.query(statement, params))
            .await
            .map_err(|_| DatabaseError::QueryTimeout(self.query_timeout))?
            .map_err(DatabaseError::Query)
    }

    /// Run a statement returning exactly one row, bounded by the query timeout.
    pub async fn query_one(
        &self,
        statement: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> DatabaseResult<Row> {
        tokio::time::timeout(self.query_timeout, self.client.query_one(statement, params))
            .await
            .map_err(|_| DatabaseError::QueryTimeout(self.query_timeout))?
            .map_err(DatabaseError::Query)
    }
}

impl Deref for DbSession {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

/// Open a connection using credentials from the environment.
pub async fn connect(config: &DatabaseConfig) -> DatabaseResult<DbSession> {
    let settings = ConnectionSettings::from_env()?;
    connect_with(&settings, config).await
}

/// Open a connection using explicit credentials.
pub async fn connect_with(
    settings: &ConnectionSettings,
    config: &DatabaseConfig,
) -> DatabaseResult<DbSession> {
    let connect_timeout = config.connect_timeout();
    debug!(
        "Connecting to {}:{}/{} as {}",
        settings.host, settings.port, settings.dbname, settings.user
    );

    let pg_config = settings.to_pg_config(connect_timeout);
    let (client, connection) = tokio::time::timeout(connect_timeout, pg_config.connect(NoTls))
        .await
        .map_err(|_| DatabaseError::ConnectTimeout(connect_timeout))?
        .map_err(DatabaseError::Connect)?;

    Ok(DbSession::start(client, connection, config.query_timeout()))
}
