//! Cart route handlers.
//!
//! The cart lives in the session as a list of line items. Adding uses HTMX:
//! the tile's form posts here, gets a short acknowledgement back, and an
//! `HX-Trigger` tells the header badge to refresh.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use lapgalaxy_core::{Cart, CartLineItem, Price, ProductId, ProductRepository, Route};

use crate::error::add_breadcrumb;
use crate::filters;
use crate::middleware::CurrentAuth;
use crate::models::{session, session_keys};
use crate::routes::is_htmx;
use crate::routes::layout::HeaderView;
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartLineView {
    pub name: String,
    pub image: Option<String>,
    pub unit_price: Price,
    pub quantity: u32,
    pub subtotal: Price,
}

impl From<&CartLineItem> for CartLineView {
    fn from(line: &CartLineItem) -> Self {
        Self {
            name: line.name.clone(),
            image: line.image.clone(),
            unit_price: line.unit_price,
            quantity: line.quantity.get(),
            subtotal: line.subtotal(),
        }
    }
}

/// Cart summary display data for templates.
#[derive(Clone)]
pub struct CartSummaryView {
    pub lines: Vec<CartLineView>,
    pub total: Price,
    pub item_count: u32,
}

impl From<&Cart> for CartSummaryView {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().iter().map(CartLineView::from).collect(),
            total: cart.total(),
            item_count: cart.item_count(),
        }
    }
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/cart.html")]
pub struct CartShowTemplate {
    pub header: HeaderView,
    pub cart: CartSummaryView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Add-to-cart acknowledgement fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_ack.html")]
pub struct CartAckTemplate {
    pub added: bool,
    pub message: &'static str,
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: ProductId,
}

/// Display cart page.
#[instrument(skip(session, auth))]
pub async fn show(session: Session, CurrentAuth(auth): CurrentAuth) -> impl IntoResponse {
    let cart: Cart = session::load(&session, session_keys::CART).await;
    CartShowTemplate {
        header: HeaderView::load(&session, auth).await,
        cart: CartSummaryView::from(&cart),
    }
}

/// Cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    let cart: Cart = session::load(&session, session_keys::CART).await;
    CartCountTemplate {
        count: cart.item_count(),
    }
}

/// Add a product to the cart.
///
/// The product is looked up again so the stored line carries the current
/// name and price. Without JavaScript the form falls back to a redirect to
/// the cart page.
#[instrument(skip(state, session, headers), fields(product_id = %form.product_id))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Form(form): Form<AddToCartForm>,
) -> Response {
    let product = match state.products().get_product(form.product_id).await {
        Ok(Some(product)) => product,
        Ok(None) => {
            tracing::warn!("Add to cart for unknown product");
            return (
                StatusCode::NOT_FOUND,
                CartAckTemplate {
                    added: false,
                    message: "Product not found",
                },
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load product for cart");
            return (
                StatusCode::BAD_GATEWAY,
                CartAckTemplate {
                    added: false,
                    message: "Error adding to cart",
                },
            )
                .into_response();
        }
    };

    let mut cart: Cart = session::load(&session, session_keys::CART).await;
    cart.add(&product);
    if let Err(e) = session::store(&session, session_keys::CART, &cart).await {
        tracing::error!(error = %e, "Failed to save cart to session");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            CartAckTemplate {
                added: false,
                message: "Error adding to cart",
            },
        )
            .into_response();
    }

    let product_id = form.product_id.to_string();
    add_breadcrumb(
        "cart",
        "Added to cart",
        Some(&[("product_id", product_id.as_str())][..]),
    );

    if !is_htmx(&headers) {
        return Redirect::to(&Route::Cart.path()).into_response();
    }

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartAckTemplate {
            added: true,
            message: "Added to cart!",
        },
    )
        .into_response()
}
