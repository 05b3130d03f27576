//! Service configuration from environment variables.

use nearschool::{Result, SchoolError};

/// Which record store backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// MySQL, configured through `DATABASE_URL` or `DB_*`.
    MySql,
    /// Process memory; contents are lost on exit.
    Memory,
}

/// Settings owned by the HTTP service itself.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub port: u16,
    pub store: StoreKind,
    /// Reject coordinates outside [-90, 90] x [-180, 180].
    pub strict_coordinates: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: 4000,
            store: StoreKind::MySql,
            strict_coordinates: false,
        }
    }
}

impl ServiceConfig {
    /// Read the configuration from the process environment.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `PORT` | HTTP server port | 4000 |
    /// | `NEARSCHOOL_STORE` | `mysql` or `memory` | `mysql` |
    /// | `NEARSCHOOL_STRICT_COORDINATES` | Reject out-of-range coordinates | false |
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServiceConfig::from_env`] but reading through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown `NEARSCHOOL_STORE` value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = lookup("PORT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.port);

        let store = match lookup("NEARSCHOOL_STORE") {
            None => defaults.store,
            Some(value) => match value.trim().to_lowercase().as_str() {
                "" | "mysql" => StoreKind::MySql,
                "memory" => StoreKind::Memory,
                other => {
                    return Err(SchoolError::Config(format!(
                        "unknown NEARSCHOOL_STORE {:?} (expected \"mysql\" or \"memory\")",
                        other
                    )))
                }
            },
        };

        let strict_coordinates = lookup("NEARSCHOOL_STRICT_COORDINATES")
            .map(|s| s.trim().eq_ignore_ascii_case("true") || s.trim() == "1")
            .unwrap_or(defaults.strict_coordinates);

        Ok(Self {
            port,
            store,
            strict_coordinates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServiceConfig> {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        ServiceConfig::from_lookup(|key| map.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.store, StoreKind::MySql);
        assert!(!config.strict_coordinates);
    }

    #[test]
    fn test_with_values() {
        let config = config_from(&[
            ("PORT", "8081"),
            ("NEARSCHOOL_STORE", "Memory"),
            ("NEARSCHOOL_STRICT_COORDINATES", "TRUE"),
        ])
        .unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.store, StoreKind::Memory);
        assert!(config.strict_coordinates);
    }

    #[test]
    fn test_bad_port_falls_back() {
        let config = config_from(&[("PORT", "http")]).unwrap();
        assert_eq!(config.port, 4000);
    }

    #[test]
    fn test_unknown_store() {
        assert!(matches!(
            config_from(&[("NEARSCHOOL_STORE", "postgres")]),
            Err(SchoolError::Config(_))
        ));
    }
}
