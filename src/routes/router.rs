//! Router Configuration
//!
//! All routes in one place:
//!
//! - `POST /api/auth/register` - create an account
//! - `POST /api/auth/login` - email/password login
//! - `GET  /api/links` - public listing (anonymous)
//! - `POST/PUT/DELETE /api/links` - authenticated link mutations; any
//!   other verb on this path answers 405
//! - `GET  /api/links/mine` - the caller's own links (authenticated)
//! - `GET  /api/search?q=` - the landing-page search filter
//!
//! Unknown paths fall through to a plain 404.

use axum::routing::{get, post};
use axum::Router;

use crate::auth::handlers::{login, register};
use crate::links::handlers::{
    create_link, delete_link, list_links, method_not_allowed, my_links, search_links, update_link,
};
use crate::server::state::AppState;

/// Create the axum router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route(
            "/api/links",
            get(list_links)
                .post(create_link)
                .put(update_link)
                .delete(delete_link)
                .fallback(method_not_allowed),
        )
        .route("/api/links/mine", get(my_links))
        .route("/api/search", get(search_links))
        .fallback(|| async { (axum::http::StatusCode::NOT_FOUND, "404 Not Found") })
        .with_state(state)
}
