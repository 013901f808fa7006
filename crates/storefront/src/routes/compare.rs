//! Product comparison handlers.
//!
//! The page offers the catalog in two independent selectors. Changing one
//! swaps only that slot's detail panel (HTMX); the selection is carried in
//! the query string so a comparison can be linked.
//!
//! The catalog is fetched once per page render and kept in the session;
//! panel refreshes look products up in that snapshot.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Deserializer};
use tower_sessions::Session;
use tracing::instrument;

use lapgalaxy_core::views::{ComparisonView, Slot};
use lapgalaxy_core::{Price, Product, ProductId};

use crate::filters;
use crate::middleware::CurrentAuth;
use crate::models::{session, session_keys};
use crate::routes::layout::HeaderView;
use crate::state::AppState;

/// Query parameter carrying each slot's selection.
const fn slot_field(slot: Slot) -> &'static str {
    match slot {
        Slot::First => "left",
        Slot::Second => "right",
    }
}

/// Selector option display data.
#[derive(Clone)]
pub struct SelectOption {
    pub id: ProductId,
    pub name: String,
    pub selected: bool,
}

/// Detail panel data for a selected product.
#[derive(Clone)]
pub struct ComparedProduct {
    pub name: String,
    pub brand: String,
    pub image: Option<String>,
    pub price: Price,
    pub availability: &'static str,
    pub description: String,
}

impl From<&Product> for ComparedProduct {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            brand: product.brand.clone(),
            image: product.image_src(),
            price: product.price,
            availability: product.availability.yes_no(),
            description: product.description.clone(),
        }
    }
}

/// One comparison column: its selector and detail panel.
#[derive(Clone)]
pub struct SlotView {
    pub number: u8,
    pub field: &'static str,
    pub options: Vec<SelectOption>,
    pub product: Option<ComparedProduct>,
}

impl SlotView {
    fn new(view: &ComparisonView, slot: Slot) -> Self {
        let selected = view.selected(slot);
        Self {
            number: slot.number(),
            field: slot_field(slot),
            options: view
                .products()
                .iter()
                .map(|p| SelectOption {
                    id: p.id,
                    name: p.name.clone(),
                    selected: selected.is_some_and(|s| s.id == p.id),
                })
                .collect(),
            product: selected.map(ComparedProduct::from),
        }
    }
}

/// Comparison page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/compare.html")]
pub struct CompareTemplate {
    pub header: HeaderView,
    pub slots: Vec<SlotView>,
}

/// Single detail panel fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/compare_panel.html")]
pub struct ComparePanelTemplate {
    pub slot: SlotView,
}

/// Deserialize an empty selector value as `None`.
fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<ProductId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Current selections.
#[derive(Debug, Default, Deserialize)]
pub struct CompareQuery {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub left: Option<ProductId>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub right: Option<ProductId>,
}

/// Panel refresh query: which slot changed plus the selections.
#[derive(Debug, Deserialize)]
pub struct SlotQuery {
    pub slot: Slot,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub left: Option<ProductId>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub right: Option<ProductId>,
}

fn select_all(mut view: ComparisonView, query: &CompareQuery) -> ComparisonView {
    view.select(Slot::First, query.left);
    view.select(Slot::Second, query.right);
    view
}

/// Display the comparison page.
#[instrument(skip(state, session, auth))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    CurrentAuth(auth): CurrentAuth,
    Query(query): Query<CompareQuery>,
) -> impl IntoResponse {
    let view = ComparisonView::load(state.products()).await;
    session::store_or_warn(&session, session_keys::COMPARE_SNAPSHOT, &view.products()).await;
    let view = select_all(view, &query);
    render_page(HeaderView::load(&session, auth).await, &view)
}

fn render_page(header: HeaderView, view: &ComparisonView) -> CompareTemplate {
    CompareTemplate {
        header,
        slots: [Slot::First, Slot::Second]
            .into_iter()
            .map(|slot| SlotView::new(view, slot))
            .collect(),
    }
}

/// The snapshot taken when the page was rendered.
///
/// A session without one (expired, or the fragment requested directly)
/// fetches the catalog once and keeps it for later refreshes.
async fn snapshot(state: &AppState, session: &Session) -> ComparisonView {
    let stored: Option<Vec<Product>> = session::load(session, session_keys::COMPARE_SNAPSHOT).await;
    if let Some(products) = stored {
        return ComparisonView::new(products);
    }
    let view = ComparisonView::load(state.products()).await;
    session::store_or_warn(session, session_keys::COMPARE_SNAPSHOT, &view.products()).await;
    view
}

/// Refresh one slot's detail panel after its selector changed (HTMX).
#[instrument(skip(state, session))]
pub async fn slot(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<SlotQuery>,
) -> impl IntoResponse {
    let selection = CompareQuery {
        left: query.left,
        right: query.right,
    };
    let view = select_all(snapshot(&state, &session).await, &selection);
    ComparePanelTemplate {
        slot: SlotView::new(&view, query.slot),
    }
}
