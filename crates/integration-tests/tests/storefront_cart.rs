//! Cart and header badge.

use lapgalaxy_integration_tests::TestContext;
use reqwest::StatusCode;

#[tokio::test]
async fn test_add_to_cart_acknowledges_and_triggers_badge() {
    let ctx = TestContext::new().await;

    let resp = ctx.post_form("/cart/add", &[("product_id", "3")], true).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["hx-trigger"], "cart-updated");
    assert!(resp.text().await.expect("body").contains("Added to cart!"));

    let (_, count) = ctx.htmx_get("/cart/count").await;
    assert_eq!(count.trim(), "1");
}

#[tokio::test]
async fn test_cart_page_lists_lines_with_subtotals() {
    let ctx = TestContext::new().await;
    ctx.post_form("/cart/add", &[("product_id", "3")], true).await;
    ctx.post_form("/cart/add", &[("product_id", "3")], true).await;
    ctx.post_form("/cart/add", &[("product_id", "4")], true).await;

    let (status, body) = ctx.get("/cart").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Rs. 32000 x 2"));
    assert!(body.contains("Rs. 64000"));
    assert!(body.contains("Rs. 540000 x 1"));
    assert!(body.contains("Rs. 604000"));

    let (_, count) = ctx.htmx_get("/cart/count").await;
    assert_eq!(count.trim(), "3");
}

#[tokio::test]
async fn test_header_badge_reflects_cart() {
    let ctx = TestContext::new().await;
    ctx.post_form("/cart/add", &[("product_id", "1")], true).await;

    let (_, body) = ctx.get("/").await;
    assert!(body.contains("hx-swap=\"innerHTML\">1</span>"));
}

#[tokio::test]
async fn test_empty_cart() {
    let ctx = TestContext::new().await;
    let (_, body) = ctx.get("/cart").await;
    assert!(body.contains("Your cart is empty"));
}

#[tokio::test]
async fn test_unknown_product_is_not_added() {
    let ctx = TestContext::new().await;
    let resp = ctx.post_form("/cart/add", &[("product_id", "99")], true).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let (_, count) = ctx.htmx_get("/cart/count").await;
    assert_eq!(count.trim(), "0");
}

#[tokio::test]
async fn test_plain_form_post_redirects_to_cart() {
    let ctx = TestContext::new().await;
    let resp = ctx.post_form("/cart/add", &[("product_id", "2")], false).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.url().path(), "/cart");
    assert!(resp.text().await.expect("body").contains("ROG Strix G16"));
}
