/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// PostgreSQL connection string. `DATABASE_URL`, falling back to the
    /// first positional argument.
    pub database_url: String,
    /// Base URL of the external file-share service used by the page
    /// download flag (default: `https://transfer.sh`).
    pub fileshare_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `8080`                  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `DATABASE_URL`         | (required, or `argv[1]`)|
    /// | `FILESHARE_URL`        | `https://transfer.sh`   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .or_else(|| std::env::args().nth(1))
            .expect("DATABASE_URL must be set (env var or first positional argument)");

        let fileshare_url = std::env::var("FILESHARE_URL")
            .unwrap_or_else(|_| "https://transfer.sh".into());

        Self {
            host,
            port,
            request_timeout_secs,
            database_url,
            fileshare_url,
        }
    }
}
