//! Catalog route handlers: shelves of products grouped by category.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::IntoResponse};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use lapgalaxy_core::views::catalog::max_scroll_for;
use lapgalaxy_core::views::{AuthSession, CatalogView, ScrollDirection, Shelf, ShelfScroll};
use lapgalaxy_core::{Price, Product, ProductId, Route};

use crate::filters;
use crate::middleware::CurrentAuth;
use crate::models::{session, session_keys};
use crate::routes::layout::HeaderView;
use crate::state::AppState;

/// Product tile display data for templates.
#[derive(Clone)]
pub struct TileView {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub image: Option<String>,
    pub availability: String,
    pub available: bool,
    pub price: Price,
    pub detail_href: String,
}

impl From<&Product> for TileView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            brand: product.brand.clone(),
            image: product.image_src(),
            availability: product.availability.label().to_string(),
            available: product.availability.is_available(),
            price: product.price,
            detail_href: Route::Product(product.id).path(),
        }
    }
}

/// Shelf display data for templates.
#[derive(Clone)]
pub struct ShelfView {
    /// Position on the page; used for element ids since category names are free text.
    pub index: usize,
    pub category: String,
    pub tiles: Vec<TileView>,
}

impl ShelfView {
    fn new(index: usize, shelf: &Shelf) -> Self {
        Self {
            index,
            category: shelf.category.clone(),
            tiles: shelf.products.iter().map(TileView::from).collect(),
        }
    }
}

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/catalog.html")]
pub struct CatalogTemplate {
    pub header: HeaderView,
    pub title: String,
    pub shelves: Vec<ShelfView>,
}

/// Shelf scroll offset marker (HTMX fragment).
///
/// `static/js/shelf.js` picks the offset up after the swap and smooth-scrolls
/// the matching strip.
#[derive(Template, WebTemplate)]
#[template(path = "partials/shelf_offset.html")]
pub struct ShelfOffsetTemplate {
    pub index: usize,
    pub offset: i64,
}

/// Which slice of the catalog a page shows.
#[derive(Debug, Clone, Copy)]
enum CatalogFilter {
    All,
    Category(&'static str),
}

/// Render a catalog page.
async fn render_catalog(
    state: &AppState,
    session: &Session,
    auth: AuthSession,
    title: &str,
    filter: CatalogFilter,
) -> CatalogTemplate {
    let catalog = CatalogView::load(state.products()).await;
    let shelves = match filter {
        CatalogFilter::All => catalog.shelves(),
        CatalogFilter::Category(keyword) => catalog.shelves_matching(keyword),
    };

    // Freshly rendered shelves start at the left edge
    session::reset(session, session_keys::SHELF_SCROLL).await;

    CatalogTemplate {
        header: HeaderView::load(session, auth).await,
        title: title.to_string(),
        shelves: shelves
            .iter()
            .enumerate()
            .map(|(index, shelf)| ShelfView::new(index, shelf))
            .collect(),
    }
}

/// Home page: every category.
#[instrument(skip(state, session, auth))]
pub async fn home(
    State(state): State<AppState>,
    session: Session,
    CurrentAuth(auth): CurrentAuth,
) -> impl IntoResponse {
    render_catalog(
        &state,
        &session,
        auth,
        "Browse Products by Category",
        CatalogFilter::All,
    )
    .await
}

/// Laptop shelves.
#[instrument(skip(state, session, auth))]
pub async fn laptops(
    State(state): State<AppState>,
    session: Session,
    CurrentAuth(auth): CurrentAuth,
) -> impl IntoResponse {
    render_catalog(&state, &session, auth, "Laptops", CatalogFilter::Category("laptop")).await
}

/// Gaming shelves.
#[instrument(skip(state, session, auth))]
pub async fn gaming(
    State(state): State<AppState>,
    session: Session,
    CurrentAuth(auth): CurrentAuth,
) -> impl IntoResponse {
    render_catalog(&state, &session, auth, "Gaming", CatalogFilter::Category("gaming")).await
}

/// Accessory shelves.
#[instrument(skip(state, session, auth))]
pub async fn accessories(
    State(state): State<AppState>,
    session: Session,
    CurrentAuth(auth): CurrentAuth,
) -> impl IntoResponse {
    render_catalog(
        &state,
        &session,
        auth,
        "Accessories",
        CatalogFilter::Category("accessor"),
    )
    .await
}

/// Offers page: every category.
#[instrument(skip(state, session, auth))]
pub async fn offers(
    State(state): State<AppState>,
    session: Session,
    CurrentAuth(auth): CurrentAuth,
) -> impl IntoResponse {
    render_catalog(&state, &session, auth, "Offers", CatalogFilter::All).await
}

/// Scroll control form data.
#[derive(Debug, Deserialize)]
pub struct ScrollForm {
    pub category: String,
    pub index: usize,
    /// Number of tiles on the shelf, used to bound the offset when the
    /// browser does not report its own limit.
    pub tiles: usize,
    pub direction: ScrollDirection,
    /// The strip's measured `scrollWidth - clientWidth`.
    pub visible_max: Option<i64>,
    /// The strip's current `scrollLeft`.
    pub position: Option<i64>,
}

impl ScrollForm {
    fn max_offset(&self) -> i64 {
        self.visible_max
            .map_or_else(|| max_scroll_for(self.tiles), |max| max.max(0))
    }
}

/// Shift one shelf left or right (HTMX).
#[instrument(skip(session))]
pub async fn scroll(session: Session, Form(form): Form<ScrollForm>) -> impl IntoResponse {
    let mut offsets: ShelfScroll = session::load(&session, session_keys::SHELF_SCROLL).await;
    let max = form.max_offset();
    if let Some(position) = form.position {
        offsets.sync(&form.category, position, max);
    }
    let offset = offsets.scroll_by(&form.category, form.direction.delta(), max);
    session::store_or_warn(&session, session_keys::SHELF_SCROLL, &offsets).await;

    ShelfOffsetTemplate {
        index: form.index,
        offset,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use lapgalaxy_core::Availability;

    use super::*;

    fn product(id: i64, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Laptop {id}"),
            brand: "Lenovo".to_string(),
            category: category.to_string(),
            price: Price::from(1000),
            availability: Availability::Label("In Stock".to_string()),
            description: String::new(),
            image: None,
        }
    }

    fn render(products: &[Product]) -> String {
        let shelves = CatalogView::new(products.to_vec()).shelves();
        CatalogTemplate {
            header: HeaderView::guest(),
            title: "Browse Products by Category".to_string(),
            shelves: shelves
                .iter()
                .enumerate()
                .map(|(i, s)| ShelfView::new(i, s))
                .collect(),
        }
        .render()
        .unwrap()
    }

    #[test]
    fn test_catalog_renders_one_shelf_per_category() {
        let html = render(&[product(1, "Laptops"), product(2, "Gaming"), product(3, "Laptops")]);
        assert!(html.contains("id=\"shelf-0\""));
        assert!(html.contains("id=\"shelf-1\""));
        assert!(!html.contains("id=\"shelf-2\""));
        assert_eq!(html.matches("class=\"tile\"").count(), 3);
    }

    #[test]
    fn test_add_to_cart_is_outside_tile_link() {
        let html = render(&[product(4, "Laptops")]);
        let link_start = html.find("class=\"tile__link\"").unwrap();
        let link_end = link_start + html[link_start..].find("</a>").unwrap();
        let link = &html[link_start..link_end];

        assert!(link.contains("href=\"/product/4\""));
        assert!(!link.contains("/cart/add"));
        assert!(html[link_end..].contains("hx-post=\"/cart/add\""));
    }

    #[test]
    fn test_empty_catalog_renders_no_shelves() {
        let html = render(&[]);
        assert!(!html.contains("class=\"shelf\""));
    }

    #[test]
    fn test_offset_marker() {
        let html = ShelfOffsetTemplate { index: 2, offset: 600 }.render().unwrap();
        assert!(html.contains("id=\"shelf-offset-2\""));
        assert!(html.contains("data-shelf-offset=\"600\""));
    }

    #[test]
    fn test_scroll_bound_prefers_measured_limit() {
        let mut form = ScrollForm {
            category: "Laptops".to_string(),
            index: 0,
            tiles: 4,
            direction: ScrollDirection::Right,
            visible_max: None,
            position: None,
        };
        assert_eq!(form.max_offset(), max_scroll_for(4));

        form.visible_max = Some(272);
        assert_eq!(form.max_offset(), 272);

        form.visible_max = Some(-10);
        assert_eq!(form.max_offset(), 0);
    }

    #[test]
    fn test_tile_view_uses_availability_label() {
        let tile = TileView::from(&product(1, "Laptops"));
        assert_eq!(tile.availability, "In Stock");
        assert!(tile.available);
        assert_eq!(tile.detail_href, "/product/1");
    }
}
