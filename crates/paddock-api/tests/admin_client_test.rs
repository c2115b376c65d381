#![allow(clippy::unwrap_used)]
// Integration tests for `AdminClient` using wiremock.

use secrecy::SecretString;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use paddock_api::types::UserCreate;
use paddock_api::{AdminClient, Error, ListRequest};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, AdminClient) {
    let server = MockServer::start().await;
    let client = AdminClient::from_reqwest(&server.uri(), reqwest::Client::new())
        .unwrap()
        .with_token(SecretString::from("test-token"));
    (server, client)
}

fn user_json(email: &str) -> serde_json::Value {
    json!({
        "id": Uuid::new_v4(),
        "email": email,
        "name": "Test User",
        "isActive": true
    })
}

// ── Authentication tests ────────────────────────────────────────────

#[tokio::test]
async fn test_login_success_stores_token() {
    let server = MockServer::start().await;
    let client = AdminClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();

    Mock::given(method("POST"))
        .and(path("/api/admin/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "abc123",
            "name": "Admin",
            "role": "superadmin"
        })))
        .mount(&server)
        .await;

    assert!(!client.is_authenticated());

    let secret = SecretString::from("hunter2");
    let info = client.login("admin@example.com", &secret).await.unwrap();

    assert_eq!(info.token, "abc123");
    assert_eq!(info.role.as_deref(), Some("superadmin"));
    assert!(client.is_authenticated());
}

#[tokio::test]
async fn test_login_failure() {
    let server = MockServer::start().await;
    let client = AdminClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();

    Mock::given(method("POST"))
        .and(path("/api/admin/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "bad credentials" })),
        )
        .mount(&server)
        .await;

    let secret = SecretString::from("wrong");
    let result = client.login("admin@example.com", &secret).await;

    match result {
        Err(Error::Authentication { ref message }) => {
            assert!(message.contains("bad credentials"), "got: {message}");
        }
        other => panic!("expected Authentication error, got: {other:?}"),
    }
}

// ── List tests ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_users_data_pagination_shape() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/users"))
        .and(header("authorization", "Bearer test-token"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "10"))
        .and(query_param("search", "golden"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [user_json("a@example.com"), user_json("b@example.com")],
            "pagination": { "page": 2, "limit": 10, "total": 12, "totalPages": 2 }
        })))
        .mount(&server)
        .await;

    let req = ListRequest::new(2, 10).param("search", "golden");
    let page = client.list_users(&req).await.unwrap();

    assert_eq!(page.rows.len(), 2);
    assert_eq!(page.rows[0].email, "a@example.com");
    assert_eq!(page.meta.page, 2);
    assert_eq!(page.meta.total, 12);
    assert_eq!(page.meta.total_pages, 2);
}

#[tokio::test]
async fn test_list_users_items_total_shape() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "items": [user_json("c@example.com")],
            "total": 1,
            "totalPages": 1
        })))
        .mount(&server)
        .await;

    let page = client.list_users(&ListRequest::default()).await.unwrap();

    assert_eq!(page.rows.len(), 1);
    assert_eq!(page.meta.limit, 25);
    assert_eq!(page.meta.total_pages, 1);
}

#[tokio::test]
async fn test_malformed_multibyte_body_yields_deserialization_error() {
    let (server, client) = setup().await;

    // A 2xx body that is not JSON and whose 200th byte falls inside a
    // multibyte character (Arabic names are routine in this API).
    let body = "العربية ".repeat(40);
    Mock::given(method("GET"))
        .and(path("/api/admin/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let result = client.list_users(&ListRequest::default()).await;

    match result {
        Err(Error::Deserialization { ref message, .. }) => {
            assert!(message.contains("body preview"), "got: {message}");
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_business_error_on_http_200() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "tenant suspended",
            "code": "tenant.suspended"
        })))
        .mount(&server)
        .await;

    let result = client.list_users(&ListRequest::default()).await;

    match result {
        Err(ref err @ Error::Api { ref message, status, .. }) => {
            assert_eq!(status, 200);
            assert!(message.contains("tenant suspended"), "got: {message}");
            assert_eq!(err.api_error_code(), Some("tenant.suspended"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_session_expired_on_401() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client.list_users(&ListRequest::default()).await;

    assert!(
        matches!(result, Err(Error::SessionExpired)),
        "expected SessionExpired, got: {result:?}"
    );
}

// ── Mutation tests ──────────────────────────────────────────────────

#[tokio::test]
async fn test_create_user() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "message": "user created"
        })))
        .mount(&server)
        .await;

    let ack = client
        .create_user(&UserCreate {
            email: "new@example.com".into(),
            name: "New User".into(),
            phone: None,
            role: Some("staff".into()),
            password: "s3cret".into(),
        })
        .await
        .unwrap();

    assert_eq!(ack.message.as_deref(), Some("user created"));
}

#[tokio::test]
async fn test_delete_user_not_found() {
    let (server, client) = setup().await;
    let id = Uuid::new_v4();

    Mock::given(method("DELETE"))
        .and(path(format!("/api/admin/users/{id}")))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "user not found" })),
        )
        .mount(&server)
        .await;

    let result = client.delete_user(&id).await;

    match result {
        Err(ref err) => assert!(err.is_not_found(), "expected not-found, got: {err:?}"),
        Ok(ack) => panic!("expected error, got: {ack:?}"),
    }
}

#[tokio::test]
async fn test_set_user_active_patches_flag() {
    let (server, client) = setup().await;
    let id = Uuid::new_v4();

    Mock::given(method("PATCH"))
        .and(path(format!("/api/admin/users/{id}")))
        .and(wiremock::matchers::body_json(json!({ "isActive": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    client.set_user_active(&id, false).await.unwrap();
}

#[tokio::test]
async fn test_set_delivery_zone_active_puts_flag() {
    let (server, client) = setup().await;
    let id = Uuid::new_v4();

    Mock::given(method("PUT"))
        .and(path(format!("/api/admin/delivery-zones/{id}")))
        .and(wiremock::matchers::body_json(json!({ "isActive": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    client.set_delivery_zone_active(&id, true).await.unwrap();
}

// ── Upload tests ────────────────────────────────────────────────────

#[tokio::test]
async fn test_import_animals_csv_reports_summary() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/animals/import"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "import finished",
            "summary": { "created": 8, "skipped": 2, "errors": ["row 4: bad tag"] }
        })))
        .mount(&server)
        .await;

    let csv = b"name,tagNumber\nDolly,A-100\n".to_vec();
    let ack = client.import_animals_csv("herd.csv", csv).await.unwrap();

    let summary = ack.summary.unwrap();
    assert_eq!(summary.created, 8);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.errors.len(), 1);
}

// ── Content tests ───────────────────────────────────────────────────

#[tokio::test]
async fn test_get_legal_page_by_language() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/content/terms"))
        .and(query_param("lang", "ar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "slug": "terms", "lang": "ar", "body": "<p>الشروط</p>" }
        })))
        .mount(&server)
        .await;

    let page = client.get_legal_page("terms", "ar").await.unwrap();

    assert_eq!(page.slug, "terms");
    assert_eq!(page.lang, "ar");
    assert!(page.body.contains("الشروط"));
}
