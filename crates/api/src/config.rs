use devfolio_core::policy::{DeveloperDeletePolicy, UnknownKeyPolicy};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
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
    /// Connection pool size (default: `20`).
    pub db_max_connections: u32,
    /// Treatment of body keys outside a table's allow-list.
    pub unknown_key_policy: UnknownKeyPolicy,
    /// Behaviour of `DELETE /developers/{id}` when an info row exists.
    pub developer_delete_policy: DeveloperDeletePolicy,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                 |
    /// |---------------------------|-------------------------|
    /// | `HOST`                    | `0.0.0.0`               |
    /// | `PORT`                    | `3000`                  |
    /// | `CORS_ORIGINS`            | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                    |
    /// | `DB_MAX_CONNECTIONS`      | `20`                    |
    /// | `UNKNOWN_KEY_POLICY`      | `ignore`                |
    /// | `DEVELOPER_DELETE_POLICY` | `info-first`            |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "20".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let unknown_key_policy: UnknownKeyPolicy = std::env::var("UNKNOWN_KEY_POLICY")
            .map(|v| {
                v.parse::<UnknownKeyPolicy>()
                    .unwrap_or_else(|e| panic!("{e}"))
            })
            .unwrap_or_default();

        let developer_delete_policy: DeveloperDeletePolicy =
            std::env::var("DEVELOPER_DELETE_POLICY")
                .map(|v| {
                    v.parse::<DeveloperDeletePolicy>()
                        .unwrap_or_else(|e| panic!("{e}"))
                })
                .unwrap_or_default();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            db_max_connections,
            unknown_key_policy,
            developer_delete_policy,
        }
    }
}
