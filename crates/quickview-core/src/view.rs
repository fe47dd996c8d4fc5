//! Modal body rendering.

use crate::product::ProductSnapshot;
use crate::quantity::{MAX_QUANTITY, MIN_QUANTITY};
use crate::resolve::is_value_available;
use crate::session::AddToCartState;

/// Render the complete modal body for a fetched product.
///
/// The markup replaces the previous body wholesale on every invocation;
/// there is no incremental patching. Class and data-attribute names are a
/// stable contract with the page script that injects the markup and binds
/// its controls. The description is an HTML fragment from the storefront
/// and passes through unescaped; every other text field is escaped.
pub fn render_quick_view(product: &ProductSnapshot) -> String {
    format!(
        r#"<div class="quick-view-product">
  <div class="product-image">
    <img
      src="{image}"
      alt="{title}"
      width="600"
      height="600"
      class="modal-product-image"
      loading="lazy" />
  </div>
  <div class="product-details">
    <h2 class="product-title">{title}</h2>
    <p class="price">{price}</p>
    <div class="product-description">{description}</div>
    {selectors}{quantity}
    {add_to_cart}
  </div>
</div>"#,
        image = escape_html(&product.featured_image),
        title = escape_html(&product.title),
        price = product.price.display(),
        description = product.description,
        selectors = render_option_selectors(product),
        quantity = render_quantity_controls(),
        add_to_cart = render_add_to_cart(product.available),
    )
}

/// One selector per option, with unpurchasable values disabled.
///
/// Products with at most one variant get no selectors; the sole variant is
/// considered resolved without them.
fn render_option_selectors(product: &ProductSnapshot) -> String {
    if !product.has_multiple_variants() {
        return String::new();
    }

    product
        .options
        .iter()
        .enumerate()
        .map(|(position, option)| {
            let values: String = option
                .values
                .iter()
                .map(|value| {
                    let disabled = if is_value_available(product, position, value) {
                        ""
                    } else {
                        " disabled"
                    };
                    format!(
                        r#"<option value="{value}"{disabled}>{value}</option>"#,
                        value = escape_html(value),
                        disabled = disabled,
                    )
                })
                .collect();
            format!(
                r#"<div class="variant-selector">
      <label for="option{position}">{name}</label>
      <select id="option{position}" class="variant-select" data-option="{name}">{values}</select>
    </div>
    "#,
                position = position,
                name = escape_html(&option.name),
                values = values,
            )
        })
        .collect()
}

fn render_quantity_controls() -> String {
    format!(
        r#"<div class="quantity-selector">
      <label>Quantity</label>
      <div class="quantity-controls">
        <button class="quantity-btn minus" aria-label="Decrease quantity">-</button>
        <input type="number" class="quantity-input" value="1" min="{min}" max="{max}" aria-label="Product quantity" />
        <button class="quantity-btn plus" aria-label="Increase quantity">+</button>
      </div>
    </div>"#,
        min = MIN_QUANTITY,
        max = MAX_QUANTITY,
    )
}

fn render_add_to_cart(available: bool) -> String {
    let state = AddToCartState::for_availability(available);
    let disabled = if state.enabled { "" } else { " disabled" };
    format!(
        r#"<button class="add-to-cart-button"{disabled}>{label}</button>"#,
        disabled = disabled,
        label = state.label,
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
