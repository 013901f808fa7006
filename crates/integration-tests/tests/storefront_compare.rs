//! Product comparison.

use lapgalaxy_integration_tests::TestContext;
use reqwest::StatusCode;

#[tokio::test]
async fn test_compare_page_starts_empty() {
    let ctx = TestContext::new().await;
    let (status, body) = ctx.get("/compare").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("Select a laptop to view details").count(), 2);
    assert_eq!(body.matches("<option value=\"1\"").count(), 2);
}

#[tokio::test]
async fn test_selections_are_independent() {
    let ctx = TestContext::new().await;
    let (_, body) = ctx.get("/compare?left=1&right=3").await;

    assert!(body.contains("Zenbook 14 OLED</h2>"));
    assert!(body.contains("MX Master 3S</h2>"));
    assert!(body.contains("<span>Yes</span>"));
    assert!(body.contains("<span>No</span>"));
}

#[tokio::test]
async fn test_slot_fragment_renders_one_panel() {
    let ctx = TestContext::new().await;

    let (_, first) = ctx.htmx_get("/compare/slot?slot=1&left=4").await;
    let (_, second) = ctx.htmx_get("/compare/slot?slot=2&right=4").await;

    assert!(first.contains("id=\"compare-panel-1\""));
    assert!(first.contains("ThinkPad X1 Carbon"));
    assert_eq!(first.replace("compare-panel-1", "compare-panel-2"), second);
}

#[tokio::test]
async fn test_cleared_or_unknown_selection_empties_slot() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx.htmx_get("/compare/slot?slot=1&left=").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Select a laptop to view details"));

    let (_, body) = ctx.htmx_get("/compare/slot?slot=2&right=99").await;
    assert!(body.contains("Select a laptop to view details"));
}

#[tokio::test]
async fn test_slot_changes_reuse_page_snapshot() {
    let ctx = TestContext::new().await;
    ctx.get("/compare").await;
    assert_eq!(ctx.api.catalog_requests(), 1);

    let (_, first) = ctx.htmx_get("/compare/slot?slot=1&left=1").await;
    let (_, second) = ctx.htmx_get("/compare/slot?slot=2&left=1&right=2").await;
    let (_, cleared) = ctx.htmx_get("/compare/slot?slot=1&left=&right=2").await;

    assert!(first.contains("Zenbook 14 OLED"));
    assert!(second.contains("ROG Strix G16"));
    assert!(cleared.contains("Select a laptop to view details"));
    assert_eq!(ctx.api.catalog_requests(), 1);
}

#[tokio::test]
async fn test_slot_without_page_fetches_once() {
    let ctx = TestContext::new().await;

    ctx.htmx_get("/compare/slot?slot=1&left=4").await;
    ctx.htmx_get("/compare/slot?slot=2&right=3").await;

    assert_eq!(ctx.api.catalog_requests(), 1);
}

#[tokio::test]
async fn test_selectors_submit_as_plain_form() {
    let ctx = TestContext::new().await;
    let (_, body) = ctx.get("/compare").await;

    assert!(body.contains("<form class=\"compare\" action=\"/compare\" method=\"get\">"));
    assert!(body.contains("<noscript><button type=\"submit\""));
}
