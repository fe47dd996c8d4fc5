//! Variant resolution and per-value availability.

use crate::product::{ProductSnapshot, Variant};
use crate::selection::SelectionSet;

/// Find the variant the selection pins down.
///
/// A variant matches when its value at each selected option's position
/// equals the chosen value; options absent from the selection act as
/// wildcards. The first match in declared order wins; option combinations
/// are expected to be unique, so this is a tie-break for inconsistent
/// data, not an error. An empty selection resolves nothing. Products with
/// at most one variant resolve their sole variant without any selection.
pub fn resolve_variant<'a>(
    product: &'a ProductSnapshot,
    selection: &SelectionSet,
) -> Option<&'a Variant> {
    if product.variants.len() <= 1 {
        return product.sole_variant();
    }
    if selection.is_empty() {
        return None;
    }
    product.variants.iter().find(|variant| {
        selection.entries().iter().all(|chosen| {
            product
                .option_position(&chosen.name)
                .and_then(|position| variant.option_value(position))
                .is_some_and(|value| value == chosen.value)
        })
    })
}

/// Whether at least one purchasable variant carries `value` at option
/// position `position`.
///
/// Drives the disabled state of selector entries; values with no
/// purchasable combination are shown disabled, not hidden, so the shopper
/// still sees the full option space.
pub fn is_value_available(product: &ProductSnapshot, position: usize, value: &str) -> bool {
    product
        .variants
        .iter()
        .any(|variant| variant.available && variant.option_value(position) == Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::VariantId;
    use crate::money::Money;
    use crate::product::ProductOption;

    fn variant(id: i64, color: &str, size: &str, available: bool) -> Variant {
        Variant {
            id: VariantId::new(id),
            price: None,
            available,
            featured_image: None,
            option1: Some(color.to_string()),
            option2: Some(size.to_string()),
            option3: None,
        }
    }

    fn tee() -> ProductSnapshot {
        ProductSnapshot {
            title: "Crew Tee".to_string(),
            featured_image: "https://cdn.example.com/tee.jpg".to_string(),
            description: String::new(),
            price: Money::new(2000),
            available: true,
            options: vec![
                ProductOption {
                    name: "Color".to_string(),
                    values: vec!["Black".to_string(), "Red".to_string()],
                },
                ProductOption {
                    name: "Size".to_string(),
                    values: vec!["Small".to_string(), "Medium".to_string()],
                },
            ],
            variants: vec![
                variant(1, "Black", "Small", true),
                variant(2, "Black", "Medium", true),
                variant(3, "Red", "Small", false),
                variant(4, "Red", "Medium", true),
            ],
        }
    }

    #[test]
    fn test_full_selection_resolves_unique_variant() {
        let product = tee();
        let mut selection = SelectionSet::new();
        selection.select("Color", "Black");
        selection.select("Size", "Medium");

        let resolved = resolve_variant(&product, &selection).unwrap();
        assert_eq!(resolved.id, VariantId::new(2));
    }

    #[test]
    fn test_partial_selection_matches_first_in_order() {
        let product = tee();
        let mut selection = SelectionSet::new();
        selection.select("Size", "Small");

        // Color is a wildcard; variants 1 and 3 both match, 1 is declared first.
        let resolved = resolve_variant(&product, &selection).unwrap();
        assert_eq!(resolved.id, VariantId::new(1));
    }

    #[test]
    fn test_empty_selection_resolves_nothing() {
        let product = tee();
        assert!(resolve_variant(&product, &SelectionSet::new()).is_none());
    }

    #[test]
    fn test_sole_variant_resolves_without_selection() {
        let mut product = tee();
        product.variants.truncate(1);

        let resolved = resolve_variant(&product, &SelectionSet::new()).unwrap();
        assert_eq!(resolved.id, VariantId::new(1));
    }

    #[test]
    fn test_no_variants_resolves_nothing() {
        let mut product = tee();
        product.variants.clear();
        assert!(resolve_variant(&product, &SelectionSet::new()).is_none());
    }

    #[test]
    fn test_undeclared_option_matches_nothing() {
        let product = tee();
        let mut selection = SelectionSet::new();
        selection.select("Material", "Wool");

        assert!(resolve_variant(&product, &selection).is_none());
    }

    #[test]
    fn test_nonexistent_combination_resolves_nothing() {
        let mut product = tee();
        product.variants.retain(|v| v.id != VariantId::new(2));
        let mut selection = SelectionSet::new();
        selection.select("Color", "Black");
        selection.select("Size", "Medium");

        assert!(resolve_variant(&product, &selection).is_none());
    }

    #[test]
    fn test_value_with_only_unavailable_variants_is_not_available() {
        let mut product = tee();
        product.variants[3].available = false;

        // "Red" now appears only in unavailable variants 3 and 4.
        assert!(!is_value_available(&product, 0, "Red"));
        assert!(is_value_available(&product, 0, "Black"));
    }

    #[test]
    fn test_one_available_variant_makes_value_available() {
        let product = tee();
        // Variant 3 (Red/Small) is unavailable, but 4 (Red/Medium) is not.
        assert!(is_value_available(&product, 0, "Red"));
        assert!(is_value_available(&product, 1, "Small"));
    }

    #[test]
    fn test_out_of_range_position_is_not_available() {
        let product = tee();
        assert!(!is_value_available(&product, 5, "Black"));
    }
}
