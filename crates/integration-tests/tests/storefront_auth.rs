//! Login flag round trip.

use lapgalaxy_integration_tests::TestContext;
use reqwest::StatusCode;

#[tokio::test]
async fn test_login_then_logout() {
    let ctx = TestContext::new().await;

    let (_, body) = ctx.get("/").await;
    assert!(body.contains("action=\"/auth/login\""));

    let resp = ctx.post_form("/auth/login", &[], false).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.url().path(), "/login");
    let body = resp.text().await.expect("body");
    assert!(body.contains("action=\"/auth/logout\""));
    assert!(body.contains("You are logged in."));

    let resp = ctx.post_form("/auth/logout", &[], false).await;
    assert_eq!(resp.url().path(), "/");
    let body = resp.text().await.expect("body");
    assert!(body.contains("action=\"/auth/login\""));
}

#[tokio::test]
async fn test_register_page_renders() {
    let ctx = TestContext::new().await;
    let (status, body) = ctx.get("/register").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Register</h1>"));
}
