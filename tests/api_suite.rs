//! End-to-end API tests
//!
//! Runs the full router against in-memory stores: registration, login,
//! the link action endpoint with its verb dispatch, ownership
//! enforcement, and the public search.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde::Serialize;
use serde_json::Value;

use linkbox::auth::service::AuthService;
use linkbox::links::service::LinkService;
use linkbox::routes::create_router;
use linkbox::server::state::AppState;
use linkbox::store::{LinkStore, MemoryLinkStore, MemoryUserStore, UserStore};

// Low bcrypt cost keeps the suite fast.
const TEST_COST: u32 = 4;

#[derive(Serialize)]
struct RegisterForm<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct LoginForm<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct LinkForm<'a> {
    name: &'a str,
    url: &'a str,
}

#[derive(Serialize)]
struct UpdateForm<'a> {
    id: &'a str,
    name: &'a str,
    url: &'a str,
}

#[derive(Serialize)]
struct DeleteForm<'a> {
    id: &'a str,
}

fn test_server() -> TestServer {
    let users: Arc<dyn UserStore> = Arc::new(MemoryUserStore::new());
    let links: Arc<dyn LinkStore> = Arc::new(MemoryLinkStore::new());
    let state = AppState::new(
        AuthService::with_cost(users, TEST_COST),
        LinkService::new(links),
    );
    TestServer::new(create_router(state)).unwrap()
}

/// Register a user and return their session token.
async fn register(server: &TestServer, name: &str, email: &str) -> String {
    let response = server
        .post("/api/auth/register")
        .form(&RegisterForm {
            name,
            email,
            password: "correct horse",
        })
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["name"], name);
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn register_then_login() {
    let server = test_server();
    register(&server, "Ann", "a@b.com").await;

    let response = server
        .post("/api/auth/login")
        .form(&LoginForm {
            email: "a@b.com",
            password: "correct horse",
        })
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["name"], "Ann");
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn login_failures_are_differentiated() {
    let server = test_server();
    register(&server, "Ann", "a@b.com").await;

    let response = server
        .post("/api/auth/login")
        .form(&LoginForm {
            email: "a@b.com",
            password: "wrong",
        })
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid password");
    assert_eq!(body["status"], 401);

    let response = server
        .post("/api/auth/login")
        .form(&LoginForm {
            email: "nobody@b.com",
            password: "whatever",
        })
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"], "No user found with this email");
}

#[tokio::test]
async fn login_with_empty_fields_is_a_validation_error() {
    let server = test_server();

    let response = server
        .post("/api/auth/login")
        .form(&LoginForm {
            email: "",
            password: "",
        })
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Email and Password are required");
}

#[tokio::test]
async fn management_listing_is_gated() {
    let server = test_server();

    let response = server.get("/api/links/mine").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"], "You must be logged in to access this page.");
}

#[tokio::test]
async fn anonymous_mutation_is_refused() {
    let server = test_server();

    let response = server
        .post("/api/links")
        .form(&LinkForm {
            name: "Docs",
            url: "https://x.test",
        })
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn link_crud_flow() {
    let server = test_server();
    let token = register(&server, "Ann", "a@b.com").await;

    // Create.
    let response = server
        .post("/api/links")
        .authorization_bearer(&token)
        .form(&LinkForm {
            name: "Docs",
            url: "https://x.test",
        })
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Added successfully");

    // The public listing sees it, and the owner's listing has exactly it.
    let all: Value = server.get("/api/links").await.json();
    assert_eq!(all.as_array().unwrap().len(), 1);
    let id = all[0]["id"].as_str().unwrap().to_string();

    let mine: Value = server
        .get("/api/links/mine")
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(mine.as_array().unwrap().len(), 1);
    assert_eq!(mine[0]["name"], "Docs");
    assert_eq!(mine[0]["owner"], "Ann");

    // Update.
    let response = server
        .put("/api/links")
        .authorization_bearer(&token)
        .form(&UpdateForm {
            id: &id,
            name: "Docs v2",
            url: "https://y.test",
        })
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Updated successfully");

    let mine: Value = server
        .get("/api/links/mine")
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(mine[0]["name"], "Docs v2");
    assert_eq!(mine[0]["url"], "https://y.test");

    // Delete.
    let response = server
        .delete("/api/links")
        .authorization_bearer(&token)
        .form(&DeleteForm { id: &id })
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Deleted successfully");

    let all: Value = server.get("/api/links").await.json();
    assert!(all.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn listings_are_scoped_per_owner() {
    let server = test_server();
    let ann = register(&server, "Ann", "a@b.com").await;
    let bob = register(&server, "Bob", "bob@b.com").await;

    server
        .post("/api/links")
        .authorization_bearer(&ann)
        .form(&LinkForm {
            name: "Docs",
            url: "https://x.test",
        })
        .await
        .assert_status_ok();

    let anns: Value = server
        .get("/api/links/mine")
        .authorization_bearer(&ann)
        .await
        .json();
    assert_eq!(anns.as_array().unwrap().len(), 1);

    let bobs: Value = server
        .get("/api/links/mine")
        .authorization_bearer(&bob)
        .await
        .json();
    assert!(bobs.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn cross_owner_mutations_are_forbidden() {
    let server = test_server();
    let ann = register(&server, "Ann", "a@b.com").await;
    let bob = register(&server, "Bob", "bob@b.com").await;

    server
        .post("/api/links")
        .authorization_bearer(&ann)
        .form(&LinkForm {
            name: "Docs",
            url: "https://x.test",
        })
        .await
        .assert_status_ok();
    let all: Value = server.get("/api/links").await.json();
    let id = all[0]["id"].as_str().unwrap().to_string();

    let response = server
        .put("/api/links")
        .authorization_bearer(&bob)
        .form(&UpdateForm {
            id: &id,
            name: "Stolen",
            url: "https://evil.test",
        })
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let response = server
        .delete("/api/links")
        .authorization_bearer(&bob)
        .form(&DeleteForm { id: &id })
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    // Ann's link is untouched.
    let all: Value = server.get("/api/links").await.json();
    assert_eq!(all[0]["name"], "Docs");
}

#[tokio::test]
async fn create_with_missing_fields_inserts_nothing() {
    let server = test_server();
    let token = register(&server, "Ann", "a@b.com").await;

    let response = server
        .post("/api/links")
        .authorization_bearer(&token)
        .form(&LinkForm {
            name: "",
            url: "https://x.test",
        })
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Name is required");

    let all: Value = server.get("/api/links").await.json();
    assert!(all.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unrecognized_verb_is_method_not_allowed() {
    let server = test_server();

    let response = server.patch("/api/links").await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid method");
    assert_eq!(body["status"], 405);
}

#[tokio::test]
async fn update_of_unknown_id_is_not_found() {
    let server = test_server();
    let token = register(&server, "Ann", "a@b.com").await;

    let response = server
        .put("/api/links")
        .authorization_bearer(&token)
        .form(&UpdateForm {
            id: "00000000-0000-0000-0000-000000000000",
            name: "X",
            url: "https://x.test",
        })
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_activates_at_three_characters() {
    let server = test_server();
    let token = register(&server, "Ann", "a@b.com").await;

    for (name, url) in [
        ("Rust Book", "https://doc.rust-lang.org/book"),
        ("Cooking", "https://food.test"),
    ] {
        server
            .post("/api/links")
            .authorization_bearer(&token)
            .form(&LinkForm { name, url })
            .await
            .assert_status_ok();
    }

    let body: Value = server.get("/api/search?q=ru").await.json();
    assert!(body["results"].as_array().unwrap().is_empty());
    assert_eq!(
        body["message"],
        "Type at least 3 characters to start searching"
    );

    let body: Value = server.get("/api/search?q=RUST").await.json();
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], "Rust Book");
    assert!(body.get("message").is_none());

    let body: Value = server.get("/api/search?q=zzz").await.json();
    assert!(body["results"].as_array().unwrap().is_empty());
    assert_eq!(body["message"], "No results found");
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let server = test_server();
    let response = server.get("/api/nope").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
