//! Asynchronous storefront client for the quick view.
//!
//! This crate wires the pure domain from `quickview-core` to a remote
//! storefront: the product detail fetch, the cart mutations with their
//! bundling rule, and the modal/notification lifecycle around them.
//!
//! - [`api`]: the [`StorefrontApi`] seam and its HTTP implementation
//! - [`surface`]: the [`UiSurface`] seam the pipeline drives, plus a
//!   headless in-memory implementation
//! - [`pipeline`]: the [`QuickView`] orchestrator and its modal state
//!   machine
//! - [`error`]: the failure taxonomy; each failure's `Display` text is
//!   the notification shown for it

pub mod api;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod surface;

pub use api::{ApiError, CartAddRequest, CartSummary, HttpStorefront, LineItem, StorefrontApi};
pub use config::StorefrontConfig;
pub use error::{BundleError, QuickViewError};
pub use pipeline::{ModalState, QuickView};
pub use surface::{
    HeadlessSurface, Notification, NotificationKind, UiSurface, NOTIFICATION_TTL,
};
