use std::str::FromStr;

/// Which [`ProjectStore`](tracker_core::store::ProjectStore) adapter to run with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(StorageBackend::Postgres),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(ConfigError::Invalid {
                key: "STORAGE_BACKEND",
                value: other.to_string(),
                expected: "`postgres` or `memory`",
            }),
        }
    }
}

/// Log output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::Invalid {
                key: "LOG_FORMAT",
                value: other.to_string(),
                expected: "`text` or `json`",
            }),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be set")]
    Missing { key: &'static str },

    #[error("{key} has invalid value '{value}', expected {expected}")]
    Invalid {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development, except
/// `DATABASE_URL` which is required for the Postgres backend.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub storage: StorageBackend,
    /// Only present (and required) for [`StorageBackend::Postgres`].
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STORAGE_BACKEND`      | `postgres`                 |
    /// | `DATABASE_URL`         | (required for postgres)    |
    /// | `DB_MAX_CONNECTIONS`   | `20`                       |
    /// | `LOG_FORMAT`           | `text`                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", 3000u16, "a valid port number")?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs =
            parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30u64, "a number of seconds")?;

        let storage = match lookup("STORAGE_BACKEND") {
            Some(raw) => raw.parse()?,
            None => StorageBackend::Postgres,
        };

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        if storage == StorageBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing {
                key: "DATABASE_URL",
            });
        }

        let db_max_connections =
            parse_or(&lookup, "DB_MAX_CONNECTIONS", 20u32, "a positive integer")?;

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => LogFormat::Text,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            storage,
            database_url,
            db_max_connections,
            log_format,
        })
    }
}

fn parse_or<F, T>(
    lookup: &F,
    key: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            key,
            value: raw,
            expected,
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_with_memory_backend() {
        let config = load(&[("STORAGE_BACKEND", "memory")]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.database_url, None);
        assert_eq!(config.db_max_connections, 20);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn postgres_backend_requires_database_url() {
        assert_matches!(
            load(&[]),
            Err(ConfigError::Missing {
                key: "DATABASE_URL"
            })
        );
    }

    #[test]
    fn postgres_backend_with_url() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/tracker")]).unwrap();
        assert_eq!(config.storage, StorageBackend::Postgres);
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/tracker")
        );
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let config = load(&[
            ("STORAGE_BACKEND", "memory"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,,"),
        ])
        .unwrap();
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn invalid_port_is_reported() {
        assert_matches!(
            load(&[("STORAGE_BACKEND", "memory"), ("PORT", "eighty")]),
            Err(ConfigError::Invalid { key: "PORT", .. })
        );
    }

    #[test]
    fn unknown_backend_is_reported() {
        assert_matches!(
            load(&[("STORAGE_BACKEND", "sqlite")]),
            Err(ConfigError::Invalid {
                key: "STORAGE_BACKEND",
                ..
            })
        );
    }

    #[test]
    fn json_log_format_is_case_insensitive() {
        let config = load(&[("STORAGE_BACKEND", "memory"), ("LOG_FORMAT", "JSON")]).unwrap();
        assert_eq!(config.log_format, LogFormat::Json);
    }
}
