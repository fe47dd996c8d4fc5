//! The fetch and cart-mutation pipelines behind the quick view.
//!
//! [`QuickView`] owns the single active session and drives the
//! [`UiSurface`] through its lifecycle: fetching a product, rendering the
//! modal, routing interactions, committing the cart mutation, and
//! refreshing the cart count. All entry points take `&self`; pipeline
//! runs triggered by different user actions may overlap at their
//! suspension points, and a monotonically increasing token marks which
//! run is current. Completions carrying a stale token are discarded, so
//! the most recent user action always wins.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use quickview_core::bundle::{winter_jacket_promotion, BundleRule};
use quickview_core::session::{QuickViewSession, SessionEvent, UiUpdate};
use quickview_core::view::render_quick_view;
use quickview_core::ProductHandle;
use tracing::{debug, warn};

use crate::api::{CartAddRequest, StorefrontApi};
use crate::error::{BundleError, QuickViewError};
use crate::surface::{Notification, UiSurface};

/// Where the modal session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    /// No session; the modal is hidden.
    Closed,
    /// A product is on display, awaiting interaction.
    Idle,
    /// An add-to-cart run is in flight.
    Submitting,
}

#[derive(Debug)]
struct ModalSession {
    session: Option<QuickViewSession>,
    state: ModalState,
}

/// Orchestrates one quick-view session at a time.
pub struct QuickView<A, S> {
    api: A,
    surface: S,
    bundle_rules: Vec<BundleRule>,
    /// Token of the current session; bumped on every open.
    epoch: AtomicU64,
    modal: Mutex<ModalSession>,
}

impl<A: StorefrontApi, S: UiSurface> QuickView<A, S> {
    /// Build a quick view with the stock promotion rules.
    pub fn new(api: A, surface: S) -> Self {
        Self::with_rules(api, surface, vec![winter_jacket_promotion()])
    }

    /// Build a quick view with an explicit bundle rule list.
    pub fn with_rules(api: A, surface: S, bundle_rules: Vec<BundleRule>) -> Self {
        Self {
            api,
            surface,
            bundle_rules,
            epoch: AtomicU64::new(0),
            modal: Mutex::new(ModalSession {
                session: None,
                state: ModalState::Closed,
            }),
        }
    }

    /// Current position in the modal state machine.
    pub fn state(&self) -> ModalState {
        self.modal().state
    }

    /// Snapshot of the active session, for inspection.
    pub fn session(&self) -> Option<QuickViewSession> {
        self.modal().session.clone()
    }

    /// The surface this quick view drives.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The storefront this quick view talks to.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch a product and open the modal on it.
    ///
    /// Replaces any session already on display. On failure the modal stays
    /// closed and one error notification is shown. If another open starts
    /// while the fetch is in flight, this run's completion is discarded.
    pub async fn open(&self, handle: &ProductHandle) -> Result<(), QuickViewError> {
        let token = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(product = %handle, "opening quick view");
        self.surface.show_loading();

        let fetched = self.api.product_detail(handle).await;

        if !self.is_current(token) {
            debug!(product = %handle, "discarding superseded quick-view fetch");
            return Ok(());
        }
        self.surface.hide_loading();

        let product = match fetched {
            Ok(product) => product,
            Err(e) => {
                warn!(product = %handle, error = %e, "product detail fetch failed");
                return self.fail(QuickViewError::FetchFailed(e));
            }
        };

        for violation in product.check_integrity() {
            warn!(product = %handle, %violation, "catalog integrity violation");
        }

        let body = render_quick_view(&product);
        {
            let mut modal = self.modal();
            modal.session = Some(QuickViewSession::new(product));
            modal.state = ModalState::Idle;
        }
        self.surface.show_modal(&body);
        Ok(())
    }

    /// Route a modal interaction to the session reducer.
    ///
    /// Returns the UI mutations the rendering layer must apply; empty when
    /// no session is open.
    pub fn handle_event(&self, event: SessionEvent) -> Vec<UiUpdate> {
        let mut modal = self.modal();
        match modal.session.as_mut() {
            Some(session) => session.apply(event),
            None => Vec::new(),
        }
    }

    /// Commit the current selection to the cart.
    ///
    /// With no resolved variant this makes no network call. Otherwise the
    /// run posts the primary line item, evaluates the bundle rules, and
    /// refreshes the cart count; the first failing step stops the run and
    /// leaves the modal open for retry. On full success the modal closes
    /// and a success notification is shown.
    pub async fn add_to_cart(&self) -> Result<(), QuickViewError> {
        let token = self.epoch.load(Ordering::SeqCst);

        let picked = {
            let mut modal = self.modal();
            let picked = modal.session.as_ref().and_then(|session| {
                session.purchasable_variant().map(|variant| {
                    (
                        variant.id,
                        session.quantity(),
                        self.bundle_rules
                            .iter()
                            .find(|rule| rule.matches(session.selection()))
                            .cloned(),
                    )
                })
            });
            if picked.is_some() {
                modal.state = ModalState::Submitting;
            }
            picked
        };
        let Some((variant_id, quantity, bundle)) = picked else {
            return self.fail(QuickViewError::SelectionIncomplete);
        };

        self.surface.show_loading();
        debug!(variant = %variant_id, quantity, "adding to cart");

        let added = self
            .api
            .add_to_cart(&CartAddRequest::single(variant_id, quantity))
            .await;
        if !self.is_current(token) {
            debug!(variant = %variant_id, "discarding superseded cart add");
            return Ok(());
        }
        if let Err(e) = added {
            warn!(variant = %variant_id, error = %e, "cart add failed");
            return self.fail_back_to_idle(QuickViewError::AddFailed(e));
        }

        if let Some(rule) = bundle {
            debug!(product = %rule.product, "selection matches bundle rule");
            let bundled = self.add_bundled(&rule).await;
            if !self.is_current(token) {
                return Ok(());
            }
            if let Err(e) = bundled {
                warn!(product = %rule.product, error = %e, "bundled add failed");
                return self.fail_back_to_idle(QuickViewError::BundleAddFailed(e));
            }
        }

        let summary = self.api.cart_summary().await;
        if !self.is_current(token) {
            return Ok(());
        }
        let summary = match summary {
            Ok(summary) => summary,
            Err(e) => {
                warn!(error = %e, "cart summary refresh failed");
                return self.fail_back_to_idle(QuickViewError::CartRefreshFailed(e));
            }
        };
        self.surface.set_cart_count(summary.item_count);

        self.surface.hide_loading();
        self.close();
        self.surface.notify(Notification::success("Added to cart!"));
        Ok(())
    }

    /// Close the modal and drop the session.
    pub fn close(&self) {
        self.surface.close_modal();
        let mut modal = self.modal();
        modal.session = None;
        modal.state = ModalState::Closed;
    }

    /// Fetch the bundled product and add its first declared variant.
    async fn add_bundled(&self, rule: &BundleRule) -> Result<(), BundleError> {
        let product = self.api.product_detail(&rule.product).await?;
        let variant = product
            .variants
            .first()
            .ok_or_else(|| BundleError::NoVariants(rule.product.clone()))?;
        self.api
            .add_to_cart(&CartAddRequest::single(variant.id, rule.quantity))
            .await?;
        Ok(())
    }

    fn is_current(&self, token: u64) -> bool {
        self.epoch.load(Ordering::SeqCst) == token
    }

    fn modal(&self) -> MutexGuard<'_, ModalSession> {
        self.modal.lock().expect("modal state poisoned")
    }

    /// Convert a failure into its notification; the modal stays as it was.
    fn fail(&self, failure: QuickViewError) -> Result<(), QuickViewError> {
        self.surface.notify(Notification::error(failure.to_string()));
        Err(failure)
    }

    /// A submit step failed: clear loading, reopen for retry, notify.
    fn fail_back_to_idle(&self, failure: QuickViewError) -> Result<(), QuickViewError> {
        self.surface.hide_loading();
        self.modal().state = ModalState::Idle;
        self.fail(failure)
    }
}
