//! End-to-end tests for page routing, catalog rendering and middleware.

use corner_shop_core::CatalogKind;
use corner_shop_integration_tests::{StatusCode, TestServer, cart_count_markup};
use corner_shop_storefront::config::StorefrontConfig;

#[tokio::test]
async fn test_home_lists_books() {
    let server = TestServer::start().await;
    let client = TestServer::client();

    let (status, body) = server.get(&client, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"id="book-list""#));
    assert_eq!(body.matches(r#"class="book-item""#).count(), 4);
    assert_eq!(body.matches(r#"class="add-to-cart""#).count(), 4);
    assert!(body.contains("The Great Gatsby"));
    assert!(body.contains("by F. Scott Fitzgerald"));
    assert!(body.contains("<b>$12.50</b>"));
    assert!(body.contains(r#"data-id="4""#));
}

#[tokio::test]
async fn test_home_aliases() {
    let server = TestServer::start().await;
    let client = TestServer::client();

    for path in ["/", "/index.html", "/shop/index.html", "/shop/"] {
        let (status, body) = server.get(&client, path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert!(body.contains(r#"id="book-list""#), "{path}");
    }
}

#[tokio::test]
async fn test_pages_resolve_by_last_segment() {
    let server = TestServer::start().await;
    let client = TestServer::client();

    let (status, body) = server.get(&client, "/nested/path/cart.html").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"id="cart-items""#));

    let (status, body) = server.get(&client, "/nested/login.html").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"id="login-form""#));
}

#[tokio::test]
async fn test_login_form_posts_to_nested_login_page() {
    let server = TestServer::start().await;
    let client = TestServer::client();

    let resp = client
        .post(server.url("/nested/login.html"))
        .form(&[("username", "testuser"), ("password", "password123")])
        .send()
        .await
        .expect("Login request failed");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_unknown_page_is_not_found() {
    let server = TestServer::start().await;
    let client = TestServer::client();

    for path in ["/about.html", "/Cart.html", "/cart.html/extra"] {
        let (status, _) = server.get(&client, path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
    }
}

#[tokio::test]
async fn test_post_to_non_form_page_is_rejected() {
    let server = TestServer::start().await;
    let client = TestServer::client();

    let resp = client
        .post(server.url("/cart.html"))
        .send()
        .await
        .expect("POST request failed");
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_coffee_catalog() {
    let config = StorefrontConfig {
        catalog: CatalogKind::Coffee,
        ..StorefrontConfig::default()
    };
    let server = TestServer::start_with(config).await;
    let client = TestServer::client();

    let (_, body) = server.get(&client, "/index.html").await;
    assert!(body.contains("Online Coffee Store"));
    assert!(body.contains(r#"id="coffee-list""#));
    assert_eq!(body.matches(r#"class="coffee-item""#).count(), 4);
    assert!(body.contains("Dark roast"));

    server.add_to_cart(&client, "1").await;
    let (_, body) = server.get(&client, "/cart.html").await;
    assert!(body.contains("Ethiopian Yirgacheffe"));
    assert!(body.contains(&cart_count_markup(1)));
}

#[tokio::test]
async fn test_health() {
    let server = TestServer::start().await;
    let client = TestServer::client();

    let (status, body) = server.get(&client, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_response_headers() {
    let server = TestServer::start().await;
    let client = TestServer::client();

    let resp = client
        .get(server.url("/index.html"))
        .send()
        .await
        .expect("GET request failed");
    let headers = resp.headers();
    assert_eq!(headers["cache-control"], "no-store");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert!(headers.contains_key("content-security-policy"));
    assert!(headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = TestServer::start().await;
    let client = TestServer::client();

    let resp = client
        .get(server.url("/health"))
        .header("x-request-id", "abc-123")
        .send()
        .await
        .expect("GET request failed");
    assert_eq!(resp.headers()["x-request-id"], "abc-123");
}

#[tokio::test]
async fn test_session_cookie_only_after_write() {
    let server = TestServer::start().await;
    let client = TestServer::client();

    let resp = client
        .get(server.url("/index.html"))
        .send()
        .await
        .expect("GET request failed");
    assert!(resp.headers().get("set-cookie").is_none());

    let resp = server.add_to_cart(&client, "1").await;
    let cookie = resp
        .headers()
        .get("set-cookie")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(cookie.starts_with("corner_shop_session="));
    assert!(cookie.contains("HttpOnly"));
    assert!(!cookie.contains("Max-Age"));
}
