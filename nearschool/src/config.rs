//! Record store configuration.

use std::time::Duration;

use crate::error::{Result, SchoolError};

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 3306;
const DEFAULT_USER: &str = "root";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the MySQL record store.
///
/// Either a full `url` or the individual host/user/database fields are used;
/// the URL wins when both are present.
#[derive(Clone)]
pub struct StoreConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .field("connect_timeout", &self.connect_timeout)
            .finish_non_exhaustive()
    }
}

impl StoreConfig {
    /// Create a configuration for `database` on `localhost:3306` as `root`.
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            url: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            user: DEFAULT_USER.to_string(),
            password: String::new(),
            database: database.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    /// Create a configuration from a full connection URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::new("")
        }
    }

    /// Read the configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `DATABASE_URL` | Full MySQL URL, overrides `DB_*` | None |
    /// | `DB_HOST` | Server host | `localhost` |
    /// | `DB_PORT` | Server port | 3306 |
    /// | `DB_USER` | User name | `root` |
    /// | `DB_PASSWORD` | Password | empty |
    /// | `DB_NAME` | Database name | Required without `DATABASE_URL` |
    /// | `DB_MAX_CONNECTIONS` | Pool size | 5 |
    /// | `DB_CONNECT_TIMEOUT_SECS` | Pool acquire timeout | 10 |
    ///
    /// Unparseable numbers fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if neither `DATABASE_URL` nor `DB_NAME` is set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`StoreConfig::from_env`] but reading through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL").filter(|s| !s.trim().is_empty());
        let database = lookup("DB_NAME").unwrap_or_default();

        if url.is_none() && database.is_empty() {
            return Err(SchoolError::Config(
                "DB_NAME environment variable not set (or set DATABASE_URL)".to_string(),
            ));
        }

        let port = lookup("DB_PORT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let max_connections = lookup("DB_MAX_CONNECTIONS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&n: &u32| n > 0)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);
        let timeout_secs = lookup("DB_CONNECT_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS);

        Ok(Self {
            url,
            host: lookup("DB_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            user: lookup("DB_USER").unwrap_or_else(|| DEFAULT_USER.to_string()),
            password: lookup("DB_PASSWORD").unwrap_or_default(),
            database,
            max_connections,
            connect_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Set the server host.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the server port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the user and password.
    pub fn credentials(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.user = user.into();
        self.password = password.into();
        self
    }

    /// Set the maximum number of pooled connections.
    pub fn max_connections(mut self, n: u32) -> Self {
        self.max_connections = n;
        self
    }

    /// Build sqlx connect options from this configuration.
    #[cfg(feature = "mysql")]
    pub fn connect_options(&self) -> Result<sqlx::mysql::MySqlConnectOptions> {
        use sqlx::mysql::MySqlConnectOptions;

        match &self.url {
            Some(url) => url
                .parse::<MySqlConnectOptions>()
                .map_err(|e| SchoolError::Config(format!("invalid DATABASE_URL: {}", e))),
            None => Ok(MySqlConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .username(&self.user)
                .password(&self.password)
                .database(&self.database)),
        }
    }
}
