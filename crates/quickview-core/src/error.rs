//! Catalog integrity errors.

use crate::ids::VariantId;
use thiserror::Error;

/// Violations of the product/variant data contract.
///
/// Every variant must carry one option value per declared option, and each
/// value must be listed under the corresponding option. Violations are
/// reported for logging; they do not abort a quick-view session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A variant carries a different number of option values than the
    /// product declares options.
    #[error("variant {variant_id} has {got} option values, product declares {expected} options")]
    OptionArityMismatch {
        variant_id: VariantId,
        expected: usize,
        got: usize,
    },

    /// A variant names a value that is not listed under the corresponding
    /// option.
    #[error("variant {variant_id} value {value:?} is not listed under option {option:?}")]
    UnknownOptionValue {
        variant_id: VariantId,
        option: String,
        value: String,
    },
}
