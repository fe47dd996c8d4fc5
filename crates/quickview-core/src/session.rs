//! Quick-view session state and its event reducer.
//!
//! One `QuickViewSession` holds everything the open modal knows: the
//! fetched snapshot plus the shopper's working selection and quantity.
//! Interactions are applied through [`QuickViewSession::apply`], which
//! returns the UI mutations they cause, so the reaction logic is testable
//! without any rendering surface.

use crate::money::Money;
use crate::product::{ProductSnapshot, Variant};
use crate::quantity::Quantity;
use crate::resolve::resolve_variant;
use crate::selection::SelectionSet;

/// Add-to-cart control state derived from availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddToCartState {
    /// Whether the control accepts clicks.
    pub enabled: bool,
    /// Label text on the control.
    pub label: &'static str,
}

impl AddToCartState {
    /// Control state for a purchasable or sold-out item.
    pub fn for_availability(available: bool) -> Self {
        if available {
            Self {
                enabled: true,
                label: "ADD TO CART",
            }
        } else {
            Self {
                enabled: false,
                label: "SOLD OUT",
            }
        }
    }
}

/// A user interaction inside the open modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A variant selector changed.
    OptionSelected { name: String, value: String },
    /// The "+" quantity button was clicked.
    QuantityIncreased,
    /// The "-" quantity button was clicked.
    QuantityDecreased,
    /// Text was committed into the quantity field.
    QuantityEntered(String),
}

/// A UI mutation the rendering layer must apply in response to an event.
#[derive(Debug, Clone, PartialEq)]
pub enum UiUpdate {
    /// Replace the displayed price text.
    Price(Money),
    /// Swap the displayed product image.
    Image(String),
    /// Update the add-to-cart control's label and disabled state.
    AddToCart(AddToCartState),
    /// Write the normalized quantity back into the input.
    Quantity(i64),
}

/// State for one open quick view.
///
/// Exactly one session exists at a time; opening a different product
/// replaces it wholesale, and closing the modal drops it. The snapshot is
/// immutable for the session's lifetime; only the selection and quantity
/// move.
#[derive(Debug, Clone)]
pub struct QuickViewSession {
    product: ProductSnapshot,
    selection: SelectionSet,
    quantity: Quantity,
}

impl QuickViewSession {
    /// Start a session on a freshly fetched snapshot, with nothing
    /// selected and quantity 1.
    pub fn new(product: ProductSnapshot) -> Self {
        Self {
            product,
            selection: SelectionSet::new(),
            quantity: Quantity::new(),
        }
    }

    /// The snapshot on display.
    pub fn product(&self) -> &ProductSnapshot {
        &self.product
    }

    /// The selection as it currently stands.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// The quantity to submit.
    pub fn quantity(&self) -> i64 {
        self.quantity.get()
    }

    /// The variant the current selection pins down, if any.
    pub fn resolved_variant(&self) -> Option<&Variant> {
        resolve_variant(&self.product, &self.selection)
    }

    /// The variant an add-to-cart should submit.
    ///
    /// Products with selectors require a value for every option before the
    /// resolver's wildcard matching is allowed to pick one; a sole variant
    /// is always submittable.
    pub fn purchasable_variant(&self) -> Option<&Variant> {
        if self.product.has_multiple_variants()
            && self.selection.len() < self.product.options.len()
        {
            return None;
        }
        self.resolved_variant()
    }

    /// Apply one interaction and report the UI mutations it causes.
    ///
    /// An option change that resolves a variant repaints price, add-to-cart
    /// state, and image (the variant's own image when it has one, else the
    /// product's featured image). A change that resolves nothing leaves the
    /// controls untouched.
    pub fn apply(&mut self, event: SessionEvent) -> Vec<UiUpdate> {
        match event {
            SessionEvent::OptionSelected { name, value } => {
                self.selection.select(name, value);
                match resolve_variant(&self.product, &self.selection) {
                    Some(variant) => vec![
                        UiUpdate::Price(variant.price_or(self.product.price)),
                        UiUpdate::AddToCart(AddToCartState::for_availability(variant.available)),
                        UiUpdate::Image(self.product.display_image(variant).to_string()),
                    ],
                    None => Vec::new(),
                }
            }
            SessionEvent::QuantityIncreased => {
                self.quantity.increase();
                vec![UiUpdate::Quantity(self.quantity.get())]
            }
            SessionEvent::QuantityDecreased => {
                self.quantity.decrease();
                vec![UiUpdate::Quantity(self.quantity.get())]
            }
            SessionEvent::QuantityEntered(raw) => {
                self.quantity.set_from_input(&raw);
                vec![UiUpdate::Quantity(self.quantity.get())]
            }
        }
    }
}
