//! Failure taxonomy for the quick-view pipelines.

use quickview_core::ProductHandle;
use thiserror::Error;

use crate::api::ApiError;

/// Why the bundled add-on could not be added.
#[derive(Debug, Error)]
pub enum BundleError {
    /// Fetching the bundled product or posting its line item failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The bundled product has no variants to add.
    #[error("bundled product {0} has no variants")]
    NoVariants(ProductHandle),
}

/// Everything that can go wrong between a shopper action and the cart.
///
/// The `Display` text of each variant is the notification shown to the
/// shopper; transport detail travels in the `source` chain. The pipeline
/// is the catch boundary: every failure is converted to exactly one
/// notification and a typed return, never an unhandled propagation.
#[derive(Debug, Error)]
pub enum QuickViewError {
    /// The product detail fetch failed; the modal never opens.
    #[error("Failed to load product details")]
    FetchFailed(#[source] ApiError),

    /// Add-to-cart was requested while the selection pins down no
    /// variant. No network call is made.
    #[error("Please select all options")]
    SelectionIncomplete,

    /// The primary cart-add POST failed; the cart is untouched.
    #[error("Failed to add to cart")]
    AddFailed(#[source] ApiError),

    /// The bundled add-on failed after the primary add had already
    /// succeeded; distinct from [`QuickViewError::AddFailed`] so the
    /// primary add is not silently disowned.
    #[error("Added to cart, but the bundled item could not be added")]
    BundleAddFailed(#[source] BundleError),

    /// The cart summary refresh failed after a successful add.
    #[error("Failed to update cart")]
    CartRefreshFailed(#[source] ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text_is_the_notification_message() {
        let e = QuickViewError::FetchFailed(ApiError::Http {
            status: 404,
            url: "/products/crew-tee.js".to_string(),
        });
        assert_eq!(e.to_string(), "Failed to load product details");
        assert_eq!(
            QuickViewError::SelectionIncomplete.to_string(),
            "Please select all options"
        );
    }

    #[test]
    fn test_source_chain_keeps_transport_detail() {
        use std::error::Error as _;

        let e = QuickViewError::AddFailed(ApiError::Http {
            status: 503,
            url: "/cart/add.js".to_string(),
        });
        let source = e.source().expect("source");
        assert!(source.to_string().contains("503"));
    }
}
