//! Header search widget handlers.
//!
//! Each header layout (desktop and mobile) owns an independent widget whose
//! state lives in the session under its own key. The widget markup is
//! swapped in place by HTMX; only selecting a result navigates.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use lapgalaxy_core::ProductId;
use lapgalaxy_core::views::{AuthSession, SearchLayout, SearchWidget};

use crate::error::AppError;
use crate::filters;
use crate::middleware::CurrentAuth;
use crate::models::{session, session_keys};
use crate::routes::is_htmx;
use crate::routes::layout::{HeaderView, SearchWidgetView};
use crate::state::AppState;

/// Search dropdown fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/search_results.html")]
pub struct SearchResultsTemplate {
    pub widget: SearchWidgetView,
}

/// Search results page template, for submissions without JavaScript.
#[derive(Template, WebTemplate)]
#[template(path = "pages/search.html")]
pub struct SearchPageTemplate {
    pub header: HeaderView,
    pub widget: SearchWidgetView,
}

/// Which widget a request targets.
#[derive(Debug, Default, Deserialize)]
pub struct LayoutQuery {
    #[serde(default)]
    pub layout: SearchLayout,
}

/// Search input query parameters.
#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub layout: SearchLayout,
}

async fn load_widget(session: &Session, layout: SearchLayout) -> SearchWidget {
    session::load(session, session_keys::search_widget(layout)).await
}

async fn save_widget(session: &Session, layout: SearchLayout, widget: &SearchWidget) {
    session::store_or_warn(session, session_keys::search_widget(layout), widget).await;
}

/// Run a brand search for the typed query.
///
/// A blank query issues no request and leaves the dropdown as it was.
/// Without HTMX the results come back as a full page.
#[instrument(skip(state, session, auth, headers), fields(layout = %query.layout))]
pub async fn suggest(
    State(state): State<AppState>,
    session: Session,
    CurrentAuth(auth): CurrentAuth,
    headers: HeaderMap,
    Query(query): Query<SuggestQuery>,
) -> Response {
    if !is_htmx(&headers) {
        return results_page(&state, &session, auth, query).await.into_response();
    }

    let mut widget = load_widget(&session, query.layout).await;
    widget.set_query(query.q);
    widget.submit(state.products()).await;
    save_widget(&session, query.layout, &widget).await;

    SearchResultsTemplate {
        widget: SearchWidgetView::new(query.layout, &widget),
    }
    .into_response()
}

async fn results_page(
    state: &AppState,
    session: &Session,
    auth: AuthSession,
    query: SuggestQuery,
) -> SearchPageTemplate {
    // Loading the header starts both widgets fresh; the searched one is then refilled.
    let mut header = HeaderView::load(session, auth).await;
    let mut widget = SearchWidget::default();
    widget.set_query(query.q);
    widget.submit(state.products()).await;
    save_widget(session, query.layout, &widget).await;

    let view = SearchWidgetView::new(query.layout, &widget);
    match query.layout {
        SearchLayout::Desktop => header.desktop_search = view.clone(),
        SearchLayout::Mobile => header.mobile_search = view.clone(),
    }
    SearchPageTemplate { header, widget: view }
}

/// Hide the dropdown after a click outside the widget (HTMX).
#[instrument(skip(session))]
pub async fn dismiss(session: Session, Query(query): Query<LayoutQuery>) -> impl IntoResponse {
    let mut widget = load_widget(&session, query.layout).await;
    widget.dismiss();
    save_widget(&session, query.layout, &widget).await;

    SearchResultsTemplate {
        widget: SearchWidgetView::new(query.layout, &widget),
    }
}

/// Pick a result: reset the widget and go to the product page.
#[instrument(skip(session))]
pub async fn select(
    session: Session,
    Path(id): Path<String>,
    Query(query): Query<LayoutQuery>,
) -> Response {
    let Ok(id) = id.parse::<ProductId>() else {
        return AppError::BadRequest(format!("invalid product id: {id}"))
            .into_response();
    };

    let mut widget = load_widget(&session, query.layout).await;
    let route = widget.select(id);
    save_widget(&session, query.layout, &widget).await;

    Redirect::to(&route.path()).into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use lapgalaxy_core::{Price, SearchResult};

    use super::*;

    fn result(id: i64, name: &str) -> SearchResult {
        SearchResult {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Price::from(250_000),
            image_url: Some(format!("https://cdn.lapgalaxy.lk/{id}.jpg")),
        }
    }

    fn render(layout: SearchLayout, widget: &SearchWidget) -> String {
        SearchResultsTemplate {
            widget: SearchWidgetView::new(layout, widget),
        }
        .render()
        .unwrap()
    }

    #[test]
    fn test_results_render_with_select_links() {
        let mut widget = SearchWidget::default();
        widget.set_query("Dell");
        widget.begin();
        widget.complete::<std::convert::Infallible>(Ok(vec![result(7, "Dell XPS 13")]));

        let html = render(SearchLayout::Desktop, &widget);
        assert!(html.contains("id=\"search-results-desktop\""));
        assert!(html.contains("Dell XPS 13"));
        assert!(html.contains("Rs. 250000"));
        assert!(html.contains("/search/select/7?layout=desktop"));
    }

    #[test]
    fn test_empty_results_render_message() {
        let mut widget = SearchWidget::default();
        widget.set_query("Nokia");
        widget.begin();
        widget.complete(Err("HTTP 500"));

        let html = render(SearchLayout::Mobile, &widget);
        assert!(html.contains("id=\"search-results-mobile\""));
        assert!(html.contains("No products found"));
    }

    #[test]
    fn test_dismissed_dropdown_is_hidden() {
        let mut widget = SearchWidget::default();
        widget.set_query("HP");
        widget.begin();
        widget.complete::<std::convert::Infallible>(Ok(vec![result(1, "HP Spectre")]));
        widget.dismiss();

        let html = render(SearchLayout::Desktop, &widget);
        assert!(!html.contains("HP Spectre"));
        assert!(!html.contains("No products found"));
    }

    #[test]
    fn test_layout_query_defaults_to_desktop() {
        let query: LayoutQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.layout, SearchLayout::Desktop);
    }
}
