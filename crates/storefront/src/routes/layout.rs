//! Site header shared by every full page.

use tower_sessions::Session;

use lapgalaxy_core::route::{NAV_LINKS, NavLink};
use lapgalaxy_core::views::{AuthSession, SearchLayout, SearchWidget, Theme};
use lapgalaxy_core::{Cart, SearchResult};

use crate::models::{session, session_keys};

/// Contact number shown in the mobile menu.
pub const CONTACT_PHONE: &str = "+94 112 584 406";

/// Header display data for templates.
#[derive(Clone)]
pub struct HeaderView {
    pub auth: AuthSession,
    pub nav_links: &'static [NavLink],
    pub cart_count: u32,
    pub desktop_search: SearchWidgetView,
    pub mobile_search: SearchWidgetView,
    pub contact_phone: &'static str,
    pub theme: Theme,
}

impl HeaderView {
    /// Build the header for a freshly rendered page.
    ///
    /// A full page load starts both search widgets from scratch, so any
    /// state left over from the previous page is discarded here.
    pub async fn load(session: &Session, auth: AuthSession) -> Self {
        for layout in [SearchLayout::Desktop, SearchLayout::Mobile] {
            session::reset(session, session_keys::search_widget(layout)).await;
        }
        let cart: Cart = session::load(session, session_keys::CART).await;

        Self {
            auth,
            nav_links: NAV_LINKS,
            cart_count: cart.item_count(),
            desktop_search: SearchWidgetView::new(SearchLayout::Desktop, &SearchWidget::default()),
            mobile_search: SearchWidgetView::new(SearchLayout::Mobile, &SearchWidget::default()),
            contact_phone: CONTACT_PHONE,
            theme: session::load(session, session_keys::THEME).await,
        }
    }
}

/// Search widget display data for templates.
///
/// One template renders both layouts; `layout` only changes ids and styling.
#[derive(Clone)]
pub struct SearchWidgetView {
    pub layout: SearchLayout,
    pub query: String,
    pub results: Vec<SearchResult>,
    pub show_results: bool,
    pub is_searching: bool,
}

impl SearchWidgetView {
    #[must_use]
    pub fn new(layout: SearchLayout, widget: &SearchWidget) -> Self {
        Self {
            layout,
            query: widget.query().to_string(),
            results: widget.results().to_vec(),
            show_results: widget.show_results(),
            is_searching: widget.is_searching(),
        }
    }

    /// Link that selects `result` from this widget's dropdown.
    #[must_use]
    pub fn select_href(&self, result: &SearchResult) -> String {
        format!("/search/select/{}?layout={}", result.id, self.layout)
    }
}

#[cfg(test)]
impl HeaderView {
    /// Header for a guest with an empty cart, for template tests.
    pub(crate) fn guest() -> Self {
        Self {
            auth: AuthSession::guest(),
            nav_links: NAV_LINKS,
            cart_count: 0,
            desktop_search: SearchWidgetView::new(SearchLayout::Desktop, &SearchWidget::default()),
            mobile_search: SearchWidgetView::new(SearchLayout::Mobile, &SearchWidget::default()),
            contact_phone: CONTACT_PHONE,
            theme: Theme::Light,
        }
    }
}
