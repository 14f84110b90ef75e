/// Configuration management for the API server
///
/// This module loads configuration from environment variables and provides
/// a type-safe configuration struct.
///
/// # Environment Variables
///
/// - `API_HOST`: Host to bind to (default: 0.0.0.0)
/// - `PORT`: Port to bind to (default: 3000)
/// - `CORS_ORIGIN`: The single frontend origin allowed by CORS
///   (default: http://localhost:5173)
/// - `DATABASE_URL`: PostgreSQL connection string (optional; without it the
///   server keeps users in memory)
/// - `DATABASE_MAX_CONNECTIONS`: Pool size (default: 10)
/// - `RUST_LOG`: Log filter (default: userdesk_api=debug,tower_http=debug)
///
/// # Example
///
/// ```no_run
/// use userdesk_api::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Server will listen on {}", config.bind_address());
/// # Ok(())
/// # }
/// ```

use axum::http::HeaderValue;
use std::env;
use userdesk_shared::db::pool::DatabaseConfig;

/// Default frontend origin (Vite dev server)
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// Database configuration; `None` selects the in-memory store
    pub database: Option<DatabaseConfig>,
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Origin allowed to make credentialed cross-origin requests
    pub cors_origin: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            },
            database: None,
        }
    }
}

impl Config {
    /// Loads configuration from `.env` and environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable has an invalid value
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| anyhow::anyhow!("PORT must be a valid port number: {}", e))?;

        let cors_origin = lookup("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());
        if cors_origin.trim() == "*" {
            anyhow::bail!("CORS_ORIGIN must name a single origin, not '*'");
        }
        if cors_origin.parse::<HeaderValue>().is_err() {
            anyhow::bail!("CORS_ORIGIN is not a valid header value: {}", cors_origin);
        }

        let database = match lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
            Some(url) => {
                let max_connections = lookup("DATABASE_MAX_CONNECTIONS")
                    .unwrap_or_else(|| "10".to_string())
                    .parse::<u32>()?;

                Some(DatabaseConfig {
                    url,
                    max_connections,
                    ..Default::default()
                })
            }
            None => None,
        };

        Ok(Self {
            api: ApiConfig {
                host,
                port,
                cors_origin,
            },
            database,
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }
}
