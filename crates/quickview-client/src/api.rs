//! Remote storefront resources.
//!
//! The quick view touches three endpoints: the per-product detail
//! resource, the cart-add resource, and the cart summary. They are modeled
//! as the [`StorefrontApi`] trait so the pipeline can be driven against an
//! in-memory implementation in tests; [`HttpStorefront`] is the
//! production implementation.

use async_trait::async_trait;
use quickview_core::product::ProductSnapshot;
use quickview_core::{ProductHandle, VariantId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::StorefrontConfig;

/// Transport-level failure talking to the storefront.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-success HTTP status.
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    /// Connection, DNS, or protocol failure.
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body was not the JSON we expect.
    #[error("malformed response body: {0}")]
    Body(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

/// One line item for the cart-add resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Variant to add.
    pub id: VariantId,
    /// How many units.
    pub quantity: i64,
}

/// Body of a cart-add POST: `{"items":[{"id":…,"quantity":…}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartAddRequest {
    pub items: Vec<LineItem>,
}

impl CartAddRequest {
    /// A request adding one line item.
    pub fn single(id: VariantId, quantity: i64) -> Self {
        Self {
            items: vec![LineItem { id, quantity }],
        }
    }
}

/// Cart summary as returned by the cart resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    /// Total number of units across all line items.
    pub item_count: i64,
}

/// The storefront resources the quick view consumes.
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// Read the product detail resource.
    async fn product_detail(&self, handle: &ProductHandle) -> Result<ProductSnapshot, ApiError>;

    /// Add line items to the cart. All-or-nothing per call.
    async fn add_to_cart(&self, request: &CartAddRequest) -> Result<(), ApiError>;

    /// Read the cart summary.
    async fn cart_summary(&self) -> Result<CartSummary, ApiError>;
}

/// `StorefrontApi` over HTTP, against the storefront's JSON endpoints.
pub struct HttpStorefront {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStorefront {
    /// Build a client for the configured storefront.
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl StorefrontApi for HttpStorefront {
    async fn product_detail(&self, handle: &ProductHandle) -> Result<ProductSnapshot, ApiError> {
        let url = self.url(&format!("/products/{}.js", handle));
        debug!(%url, "fetching product detail");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                url,
            });
        }
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Body(e.to_string()))
    }

    async fn add_to_cart(&self, request: &CartAddRequest) -> Result<(), ApiError> {
        let url = self.url("/cart/add.js");
        debug!(%url, items = request.items.len(), "posting cart add");

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                url,
            });
        }
        // The body is JSON but nothing in it is consumed; parse only to
        // confirm the service answered in kind.
        let body = response.bytes().await?;
        serde_json::from_slice::<serde_json::Value>(&body)
            .map_err(|e| ApiError::Body(e.to_string()))?;
        Ok(())
    }

    async fn cart_summary(&self) -> Result<CartSummary, ApiError> {
        let url = self.url("/cart.js");
        debug!(%url, "fetching cart summary");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                url,
            });
        }
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Body(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_add_request_wire_shape() {
        let request = CartAddRequest::single(VariantId::new(5), 2);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"items": [{"id": 5, "quantity": 2}]})
        );
    }

    #[test]
    fn test_cart_summary_wire_shape() {
        let summary: CartSummary = serde_json::from_str(r#"{"item_count": 3}"#).unwrap();
        assert_eq!(summary.item_count, 3);
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let api = HttpStorefront::new(&StorefrontConfig::new("https://shop.example.com/"));
        assert_eq!(
            api.url("/products/crew-tee.js"),
            "https://shop.example.com/products/crew-tee.js"
        );
    }
}
