//! Link Endpoints
//!
//! The link action endpoint lives at `/api/links` and dispatches on the
//! HTTP verb, the way the original management form posts did:
//!
//! - `GET` - public listing (anonymous, feeds the landing-page search)
//! - `POST` - create, form `{name, url}`
//! - `PUT` - update, form `{id, name, url}`
//! - `DELETE` - delete, form `{id}`
//! - anything else - 405 "Invalid method"
//!
//! `GET /api/links/mine` returns the caller's own links and is the
//! management view's data source; without a valid token it answers 401
//! with the gate message. `GET /api/search` runs the landing-page filter
//! server-side.
//!
//! Mutations take the owner from the verified token, never from a form
//! field: a client cannot create or edit links on someone else's behalf
//! by tampering with the form.

use axum::extract::{Query, State};
use axum::response::Json;
use axum::Form;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::auth::AuthUser;
use crate::search;
use crate::server::state::AppState;
use crate::store::Link;

/// Form fields for create and update. Update additionally requires `id`.
#[derive(Debug, Deserialize)]
pub struct LinkForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Form fields for delete.
#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub id: String,
}

/// Success acknowledgement, `{"message": ..}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Ack {
    pub message: String,
}

impl Ack {
    fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

/// Parse the `id` form field, which must be present and a valid UUID.
fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    if raw.is_empty() {
        return Err(AppError::missing_fields(&["id"]));
    }
    Uuid::parse_str(raw).map_err(|_| AppError::validation("ID must be a valid UUID"))
}

/// `GET /api/links` - every stored link, for the anonymous search view.
pub async fn list_links(State(state): State<AppState>) -> Result<Json<Vec<Link>>, AppError> {
    Ok(Json(state.links.list_public().await?))
}

/// `GET /api/links/mine` - the authenticated caller's links.
pub async fn my_links(
    State(state): State<AppState>,
    AuthUser(claim): AuthUser,
) -> Result<Json<Vec<Link>>, AppError> {
    Ok(Json(state.links.list_owned(&claim).await?))
}

/// `POST /api/links` - add a link owned by the caller.
pub async fn create_link(
    State(state): State<AppState>,
    AuthUser(claim): AuthUser,
    Form(form): Form<LinkForm>,
) -> Result<Json<Ack>, AppError> {
    state.links.create(&claim, &form.name, &form.url).await?;
    Ok(Ack::new("Added successfully"))
}

/// `PUT /api/links` - replace the name/url of a link the caller owns.
pub async fn update_link(
    State(state): State<AppState>,
    AuthUser(claim): AuthUser,
    Form(form): Form<LinkForm>,
) -> Result<Json<Ack>, AppError> {
    let missing: Vec<&str> = [("id", &form.id), ("name", &form.name), ("url", &form.url)]
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();
    if !missing.is_empty() {
        return Err(AppError::missing_fields(&missing));
    }

    let id = parse_id(&form.id)?;
    state.links.update(&claim, id, &form.name, &form.url).await?;
    Ok(Ack::new("Updated successfully"))
}

/// `DELETE /api/links` - delete a link the caller owns.
pub async fn delete_link(
    State(state): State<AppState>,
    AuthUser(claim): AuthUser,
    Form(form): Form<DeleteForm>,
) -> Result<Json<Ack>, AppError> {
    let id = parse_id(&form.id)?;
    state.links.delete(&claim, id).await?;
    Ok(Ack::new("Deleted successfully"))
}

/// Fallback for unrecognized verbs on `/api/links`.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Query parameters for `GET /api/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Search response: the matching links, plus the prompt the landing page
/// shows when the query is too short or nothing matched.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// `GET /api/search?q=` - the landing-page filter, run server-side.
pub async fn search_links(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let all = state.links.list_public().await?;
    let results = search::filter(&all, &params.q);

    let message = if !search::query_is_active(&params.q) {
        Some("Type at least 3 characters to start searching".to_string())
    } else if results.is_empty() {
        Some("No results found".to_string())
    } else {
        None
    };

    Ok(Json(SearchResponse { results, message }))
}
