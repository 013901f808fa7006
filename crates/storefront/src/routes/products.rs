//! Product detail handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tower_sessions::Session;
use tracing::instrument;

use lapgalaxy_core::{Price, Product, ProductId, ProductRepository};

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::CurrentAuth;
use crate::routes::layout::HeaderView;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub description: String,
    pub price: Price,
    pub image: Option<String>,
    pub availability: String,
    pub available: bool,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            brand: product.brand.clone(),
            category: product.category.clone(),
            description: product.description.clone(),
            price: product.price,
            image: product.image_src(),
            availability: product.availability.label().to_string(),
            available: product.availability.is_available(),
        }
    }
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/product.html")]
pub struct ProductShowTemplate {
    pub header: HeaderView,
    pub product: ProductView,
}

/// Display product detail page.
#[instrument(skip(state, session, auth))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    CurrentAuth(auth): CurrentAuth,
    Path(id): Path<String>,
) -> Result<ProductShowTemplate> {
    let id: ProductId = id
        .parse()
        .map_err(|e: lapgalaxy_core::ParseIdError| AppError::BadRequest(e.to_string()))?;

    let product = state
        .products()
        .get_product(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(ProductShowTemplate {
        header: HeaderView::load(&session, auth).await,
        product: ProductView::from(&product),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use lapgalaxy_core::{Availability, ProductImage};

    use super::*;

    fn product() -> Product {
        Product {
            id: ProductId::new(11),
            name: "ThinkPad X1 Carbon".to_string(),
            brand: "Lenovo".to_string(),
            category: "Laptops".to_string(),
            price: Price::from(540_000),
            availability: Availability::Label("Out of Stock".to_string()),
            description: "Gen 12, 32GB RAM".to_string(),
            image: Some(ProductImage {
                base64: "aGVsbG8=".to_string(),
                mime_type: "image/png".to_string(),
            }),
        }
    }

    #[test]
    fn test_detail_page_renders_product() {
        let html = ProductShowTemplate {
            header: HeaderView::guest(),
            product: ProductView::from(&product()),
        }
        .render()
        .unwrap();

        assert!(html.contains("ThinkPad X1 Carbon"));
        assert!(html.contains("Rs. 540000"));
        assert!(html.contains("Out of Stock"));
        assert!(html.contains("src=\"data:image/png;base64,aGVsbG8=\""));
        assert!(html.contains("name=\"product_id\" value=\"11\""));
    }

    #[test]
    fn test_out_of_stock_label_is_not_available() {
        let view = ProductView::from(&product());
        assert!(!view.available);
    }
}
