//! Application assembly.

use axum::Router;

use crate::routes::create_router;
use crate::server::config::{connect_database, ServerConfig};
use crate::server::state::AppState;

/// Build the complete application: connect the store, assemble the
/// services, and configure the router.
pub async fn create_app(config: &ServerConfig) -> Result<Router, sqlx::Error> {
    let pool = connect_database(&config.database_url).await?;
    let state = AppState::postgres(pool);
    Ok(create_router(state))
}
