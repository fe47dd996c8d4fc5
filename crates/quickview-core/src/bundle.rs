//! Promotional cross-sell rules.
//!
//! A rule is data: the option values that must all be present in the
//! shopper's final selection, and the product added to the cart when they
//! are. The pipeline evaluates the rule list at add time; nothing about a
//! rule lives in control flow.

use crate::ids::ProductHandle;
use crate::selection::SelectionSet;
use serde::{Deserialize, Serialize};

/// Adds a companion product to the cart when the selection matches a
/// trigger pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleRule {
    /// Values that must all appear among the selected option values,
    /// compared case-insensitively. Each may be satisfied by a different
    /// option.
    pub trigger_values: Vec<String>,
    /// Product whose first declared variant is added.
    pub product: ProductHandle,
    /// Quantity of the companion product to add.
    pub quantity: i64,
}

impl BundleRule {
    /// Create a rule adding one unit of `product`.
    pub fn new<I, T>(trigger_values: I, product: impl Into<ProductHandle>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            trigger_values: trigger_values.into_iter().map(Into::into).collect(),
            product: product.into(),
            quantity: 1,
        }
    }

    /// Evaluate against the selection as it stands at add time.
    ///
    /// Only the current entries count; values the shopper selected earlier
    /// and then changed away from do not.
    pub fn matches(&self, selection: &SelectionSet) -> bool {
        self.trigger_values.iter().all(|trigger| {
            selection
                .values()
                .any(|value| value.eq_ignore_ascii_case(trigger))
        })
    }
}

/// The winter-jacket promotion: a black, medium-sized selection also puts
/// one Soft Winter Jacket in the cart.
pub fn winter_jacket_promotion() -> BundleRule {
    BundleRule::new(["black", "medium"], "soft-winter-jacket")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(pairs: &[(&str, &str)]) -> SelectionSet {
        let mut s = SelectionSet::new();
        for (name, value) in pairs {
            s.select(*name, *value);
        }
        s
    }

    #[test]
    fn test_matches_across_different_options() {
        let rule = winter_jacket_promotion();
        assert!(rule.matches(&selection(&[("Color", "Black"), ("Size", "Medium")])));
    }

    #[test]
    fn test_comparison_is_case_insensitive() {
        let rule = winter_jacket_promotion();
        assert!(rule.matches(&selection(&[("Color", "BLACK"), ("Size", "medium")])));
    }

    #[test]
    fn test_one_trigger_value_is_not_enough() {
        let rule = winter_jacket_promotion();
        assert!(!rule.matches(&selection(&[("Color", "Black"), ("Size", "Small")])));
        assert!(!rule.matches(&selection(&[("Size", "Medium")])));
        assert!(!rule.matches(&SelectionSet::new()));
    }

    #[test]
    fn test_only_the_final_selection_counts() {
        let rule = winter_jacket_promotion();
        let mut s = selection(&[("Color", "Black"), ("Size", "Medium")]);
        assert!(rule.matches(&s));

        // The shopper changes their mind; the earlier Medium no longer counts.
        s.select("Size", "Small");
        assert!(!rule.matches(&s));
    }

    #[test]
    fn test_both_triggers_may_come_from_one_option() {
        // The rule checks presence across the whole set, not which option
        // a value belongs to.
        let rule = BundleRule::new(["black"], "soft-winter-jacket");
        assert!(rule.matches(&selection(&[("Trim", "Black")])));
    }
}
