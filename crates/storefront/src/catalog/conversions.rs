//! Wire type to domain type conversions.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use lapgalaxy_core::types::product::DEFAULT_IMAGE_MIME;
use lapgalaxy_core::{Product, ProductImage, SearchResult};

use super::types::{ApiProduct, ApiSearchResult};

/// Shelf name for products the API left uncategorized.
pub const UNCATEGORIZED: &str = "Uncategorized";

pub fn convert_product(api: ApiProduct) -> Product {
    let image = convert_image(api.image_base64, api.image_type);
    Product {
        id: api.id,
        name: api.name,
        brand: api.brand.unwrap_or_default(),
        category: api
            .category
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| UNCATEGORIZED.to_string()),
        price: api.price,
        availability: api.product_available.unwrap_or_default(),
        description: api.description.unwrap_or_default(),
        image,
    }
}

pub fn convert_search_result(api: ApiSearchResult) -> SearchResult {
    SearchResult {
        id: api.id,
        name: api.name,
        price: api.price,
        image_url: api.image_url.filter(|url| !url.trim().is_empty()),
    }
}

/// Keep the image only when the payload is valid base64.
fn convert_image(payload: Option<String>, mime_type: Option<String>) -> Option<ProductImage> {
    let payload = payload.filter(|p| !p.is_empty())?;
    if let Err(e) = STANDARD.decode(payload.as_bytes()) {
        tracing::debug!(error = %e, "Dropping product image with invalid base64 payload");
        return None;
    }
    Some(ProductImage {
        base64: payload,
        mime_type: mime_type
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE_MIME.to_string()),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use lapgalaxy_core::{Availability, Price, ProductId};
    use serde_json::json;

    use super::*;

    fn api_product(value: serde_json::Value) -> ApiProduct {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_convert_full_product() {
        let product = convert_product(api_product(json!({
            "id": 7,
            "name": "Dell XPS 13",
            "brand": "Dell",
            "category": "Laptops",
            "price": 450000,
            "productAvailable": "In Stock",
            "description": "Thin and light",
            "imageBase64": "aGVsbG8=",
            "imageType": "image/png"
        })));

        assert_eq!(product.id, ProductId::new(7));
        assert_eq!(product.price, Price::from(450_000));
        assert!(product.availability.is_available());
        assert_eq!(
            product.image_src().as_deref(),
            Some("data:image/png;base64,aGVsbG8=")
        );
    }

    #[test]
    fn test_convert_boolean_availability_and_missing_fields() {
        let product = convert_product(api_product(json!({
            "id": 1,
            "name": "Mystery",
            "price": 10,
            "productAvailable": false,
            "brand": null,
            "category": null
        })));

        assert_eq!(product.availability, Availability::Flag(false));
        assert_eq!(product.brand, "");
        assert_eq!(product.category, UNCATEGORIZED);
        assert!(product.image.is_none());
    }

    #[test]
    fn test_missing_mime_defaults_to_jpeg() {
        let image = convert_image(Some("aGVsbG8=".to_string()), None).unwrap();
        assert_eq!(image.mime_type, "image/jpeg");
    }

    #[test]
    fn test_invalid_base64_drops_image() {
        assert!(convert_image(Some("not base64!!".to_string()), None).is_none());
        assert!(convert_image(Some(String::new()), None).is_none());
    }

    #[test]
    fn test_convert_search_result_blank_image_url() {
        let result = convert_search_result(
            serde_json::from_value(json!({
                "id": 3,
                "name": "HP Victus",
                "price": 320000,
                "imageUrl": ""
            }))
            .unwrap(),
        );
        assert_eq!(result.image_url, None);
        assert_eq!(result.name, "HP Victus");
    }
}
