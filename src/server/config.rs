//! Server Configuration
//!
//! Everything is read from environment variables with local-development
//! defaults, so the server starts with no configuration at all:
//!
//! - `DATABASE_URL` - connection string, falling back to a local default
//! - `SERVER_PORT` - listen port, default 3000
//! - `JWT_SECRET` - token signing secret (see `auth::session`)
//! - `RUST_LOG` - tracing filter
//!
//! The connection pool is created lazily: an unreachable database does
//! not prevent startup, it surfaces per-request as an infrastructure
//! error. Migrations run best-effort at startup and are logged.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Local development fallback when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/linkbox";

const DEFAULT_PORT: u16 = 3000;

/// Runtime configuration, resolved from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the HTTP server binds to.
    pub port: u16,
    /// Database connection string.
    pub database_url: String,
}

impl ServerConfig {
    /// Resolve configuration from environment variables.
    pub fn from_env() -> Self {
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            tracing::warn!(
                "DATABASE_URL not set, falling back to {}",
                DEFAULT_DATABASE_URL
            );
            DEFAULT_DATABASE_URL.to_string()
        });

        Self { port, database_url }
    }
}

/// Create the connection pool and run migrations.
///
/// The pool connects lazily, so this only fails on an unparsable URL.
/// Migration failures are logged and do not prevent startup; they may
/// simply mean the database is not up yet.
pub async fn connect_database(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy(database_url)?;

    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("database migrations completed"),
        Err(e) => tracing::warn!("could not run migrations, continuing: {}", e),
    }

    Ok(pool)
}
