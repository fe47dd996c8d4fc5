//! Product snapshot types, as served by the storefront's product detail
//! resource.

use crate::error::CatalogError;
use crate::ids::VariantId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A named axis of variation (e.g. Color) with its ordered values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductOption {
    /// Option name (e.g., "Size", "Color").
    pub name: String,
    /// Possible values, in display order.
    pub values: Vec<String>,
}

/// A variant-specific image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VariantImage {
    /// Image URL.
    pub src: String,
}

/// One concrete purchasable combination of option values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variant {
    /// Identifier used by the cart-add resource.
    pub id: VariantId,
    /// Variant price; absent in sparse payloads, in which case the
    /// product price applies.
    #[serde(default)]
    pub price: Option<Money>,
    /// Whether this combination is purchasable.
    pub available: bool,
    /// Variant-specific image, when the variant has one.
    #[serde(default)]
    pub featured_image: Option<VariantImage>,
    /// Value at option position 0.
    #[serde(default)]
    pub option1: Option<String>,
    /// Value at option position 1.
    #[serde(default)]
    pub option2: Option<String>,
    /// Value at option position 2.
    #[serde(default)]
    pub option3: Option<String>,
}

impl Variant {
    /// Value this variant carries at the given option position.
    ///
    /// Position *i* corresponds to the product's option *i*; the wire
    /// format caps products at three option axes.
    pub fn option_value(&self, position: usize) -> Option<&str> {
        match position {
            0 => self.option1.as_deref(),
            1 => self.option2.as_deref(),
            2 => self.option3.as_deref(),
            _ => None,
        }
    }

    /// All positional values present, in order.
    pub fn option_values(&self) -> impl Iterator<Item = &str> {
        [&self.option1, &self.option2, &self.option3]
            .into_iter()
            .filter_map(|v| v.as_deref())
    }

    /// Price to display for this variant, falling back to the product
    /// price when the payload carried none.
    pub fn price_or(&self, product_price: Money) -> Money {
        self.price.unwrap_or(product_price)
    }
}

/// A catalog item as fetched for the quick view.
///
/// Immutable for the duration of one modal session; opening a different
/// product replaces the snapshot wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSnapshot {
    /// Product title.
    pub title: String,
    /// URL of the product's primary image.
    pub featured_image: String,
    /// Description as an HTML fragment; rendered without escaping.
    pub description: String,
    /// Product-level price, shown until a variant is resolved.
    pub price: Money,
    /// Top-level purchasability flag.
    pub available: bool,
    /// Option axes, in display order.
    #[serde(default)]
    pub options: Vec<ProductOption>,
    /// Purchasable combinations, in declared order.
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl ProductSnapshot {
    /// Position of a named option, if the product declares it.
    pub fn option_position(&self, name: &str) -> Option<usize> {
        self.options.iter().position(|o| o.name == name)
    }

    /// Whether the quick view needs option selectors at all.
    pub fn has_multiple_variants(&self) -> bool {
        self.variants.len() > 1
    }

    /// The only variant, when the product has zero or one.
    pub fn sole_variant(&self) -> Option<&Variant> {
        if self.variants.len() <= 1 {
            self.variants.first()
        } else {
            None
        }
    }

    /// Image to display for a resolved variant, falling back to the
    /// product's featured image.
    pub fn display_image<'a>(&'a self, variant: &'a Variant) -> &'a str {
        variant
            .featured_image
            .as_ref()
            .map(|image| image.src.as_str())
            .unwrap_or(&self.featured_image)
    }

    /// Check every variant against the declared options.
    ///
    /// A conforming variant carries exactly one value per option, each
    /// listed under the corresponding option. Returns all violations found;
    /// an empty vector means the snapshot is consistent.
    pub fn check_integrity(&self) -> Vec<CatalogError> {
        let mut violations = Vec::new();
        for variant in &self.variants {
            let got = variant.option_values().count();
            if got != self.options.len() {
                violations.push(CatalogError::OptionArityMismatch {
                    variant_id: variant.id,
                    expected: self.options.len(),
                    got,
                });
                continue;
            }
            for (position, option) in self.options.iter().enumerate() {
                if let Some(value) = variant.option_value(position) {
                    if !option.values.iter().any(|v| v == value) {
                        violations.push(CatalogError::UnknownOptionValue {
                            variant_id: variant.id,
                            option: option.name.clone(),
                            value: value.to_string(),
                        });
                    }
                }
            }
        }
        violations
    }
}
