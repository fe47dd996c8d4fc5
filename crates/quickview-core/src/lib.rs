//! Domain types and logic for the storefront quick view.
//!
//! This crate is the pure half of the quick-view widget:
//!
//! - **Catalog**: product snapshots, variants, option axes
//! - **Selection**: the shopper's working option choices, variant
//!   resolution, per-value availability
//! - **Session**: reducer-style state for one open quick view
//! - **Rendering**: the modal body markup
//! - **Bundling**: declarative cross-sell rules
//!
//! Nothing here performs I/O or reads a clock. The asynchronous storefront
//! calls and the modal lifecycle around them live in `quickview-client`.
//!
//! # Example
//!
//! ```rust,ignore
//! use quickview_core::prelude::*;
//!
//! let mut session = QuickViewSession::new(product);
//! let updates = session.apply(SessionEvent::OptionSelected {
//!     name: "Color".to_string(),
//!     value: "Black".to_string(),
//! });
//! // `updates` tells the rendering layer which controls to repaint.
//! ```

pub mod bundle;
pub mod error;
pub mod ids;
pub mod money;
pub mod product;
pub mod quantity;
pub mod resolve;
pub mod selection;
pub mod session;
pub mod view;

pub use error::CatalogError;
pub use ids::{ProductHandle, VariantId};
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::{ProductHandle, VariantId};
    pub use crate::money::Money;

    pub use crate::product::{ProductOption, ProductSnapshot, Variant, VariantImage};

    pub use crate::bundle::BundleRule;
    pub use crate::quantity::{Quantity, MAX_QUANTITY, MIN_QUANTITY};
    pub use crate::resolve::{is_value_available, resolve_variant};
    pub use crate::selection::{SelectedOption, SelectionSet};
    pub use crate::session::{AddToCartState, QuickViewSession, SessionEvent, UiUpdate};
    pub use crate::view::render_quick_view;
}
