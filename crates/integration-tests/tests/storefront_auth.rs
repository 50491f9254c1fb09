//! End-to-end tests for login, the dashboard gate and logout.

use corner_shop_core::Credential;
use corner_shop_integration_tests::{StatusCode, TestServer, error_message_markup, location};
use corner_shop_storefront::config::StorefrontConfig;
use secrecy::SecretString;

#[tokio::test]
async fn test_login_page_has_empty_error() {
    let server = TestServer::start().await;
    let client = TestServer::client();

    let (status, body) = server.get(&client, "/login.html").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"id="login-form""#));
    assert!(body.contains(r#"id="username""#));
    assert!(body.contains(r#"id="password""#));
    assert!(body.contains(&error_message_markup("")));
}

#[tokio::test]
async fn test_login_with_valid_credentials() {
    let server = TestServer::start().await;
    let client = TestServer::client();

    let resp = server.login(&client, "testuser", "password123").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/dashboard.html");

    let (status, body) = server.get(&client, "/dashboard.html").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<h2 id="welcome-message">Welcome, testuser!</h2>"#));
    assert!(body.contains(r#"id="logout-button""#));
}

#[tokio::test]
async fn test_login_with_invalid_credentials() {
    let server = TestServer::start().await;
    let client = TestServer::client();

    for (username, password) in [
        ("wronguser", "wrongpass"),
        ("testuser", "wrongpass"),
        ("wronguser", "password123"),
        ("TestUser", "password123"),
    ] {
        let resp = server.login(&client, username, password).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = resp.text().await.expect("Failed to read body");
        assert!(body.contains(&error_message_markup("Invalid username or password")));
    }

    // Still anonymous
    let resp = client
        .get(server.url("/dashboard.html"))
        .send()
        .await
        .expect("GET request failed");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_login_with_empty_fields() {
    let server = TestServer::start().await;
    let client = TestServer::client();

    for (username, password) in [("", ""), ("testuser", ""), ("", "password123")] {
        let resp = server.login(&client, username, password).await;
        assert_eq!(resp.status(), StatusCode::OK, "no navigation expected");
        let body = resp.text().await.expect("Failed to read body");
        assert!(body.contains(&error_message_markup("Username and Password are required")));
    }
}

#[tokio::test]
async fn test_login_with_missing_fields() {
    let server = TestServer::start().await;
    let client = TestServer::client();

    let resp = client
        .post(server.url("/login.html"))
        .form(&[("username", "testuser")])
        .send()
        .await
        .expect("Login request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains(&error_message_markup("Username and Password are required")));
    assert!(body.contains(r#"value="testuser""#));
}

#[tokio::test]
async fn test_dashboard_requires_login() {
    let server = TestServer::start().await;
    let client = TestServer::client();

    let resp = client
        .get(server.url("/dashboard.html"))
        .send()
        .await
        .expect("GET request failed");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login.html");
    let body = resp.text().await.expect("Failed to read body");
    assert!(!body.contains("welcome-message"));
}

#[tokio::test]
async fn test_logout_redirects_and_relocks_dashboard() {
    let server = TestServer::start().await;
    let client = TestServer::client();

    server.login(&client, "testuser", "password123").await;
    let (status, _) = server.get(&client, "/dashboard.html").await;
    assert_eq!(status, StatusCode::OK);

    let resp = server.logout(&client).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login.html");

    let resp = client
        .get(server.url("/dashboard.html"))
        .send()
        .await
        .expect("GET request failed");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login.html");
}

#[tokio::test]
async fn test_logout_keeps_cart() {
    let server = TestServer::start().await;
    let client = TestServer::client();

    server.add_to_cart(&client, "1").await;
    server.login(&client, "testuser", "password123").await;
    server.logout(&client).await;

    let (_, body) = server.get(&client, "/cart.html").await;
    assert!(body.contains("The Great Gatsby"));
}

#[tokio::test]
async fn test_sessions_are_per_client() {
    let server = TestServer::start().await;
    let alice = TestServer::client();
    let bob = TestServer::client();

    server.login(&alice, "testuser", "password123").await;

    let (status, _) = server.get(&alice, "/dashboard.html").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = server.get(&bob, "/dashboard.html").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_configured_credential() {
    let config = StorefrontConfig {
        credential: Credential::new("barista", SecretString::from("espresso!")),
        ..StorefrontConfig::default()
    };
    let server = TestServer::start_with(config).await;
    let client = TestServer::client();

    let resp = server.login(&client, "testuser", "password123").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = server.login(&client, "barista", "espresso!").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let (_, body) = server.get(&client, "/dashboard.html").await;
    assert!(body.contains("Welcome, barista!"));
}

#[tokio::test]
async fn test_welcome_message_is_escaped() {
    let config = StorefrontConfig {
        credential: Credential::new("<b>bold</b>", SecretString::from("pw")),
        ..StorefrontConfig::default()
    };
    let server = TestServer::start_with(config).await;
    let client = TestServer::client();

    server.login(&client, "<b>bold</b>", "pw").await;

    let (_, body) = server.get(&client, "/dashboard.html").await;
    assert!(body.contains(r#"<h2 id="welcome-message">Welcome, "#));
    assert!(body.contains("bold"));
    assert!(!body.contains("<b>bold</b>"));
}
