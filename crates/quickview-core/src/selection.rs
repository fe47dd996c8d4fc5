//! The shopper's working choice of option values.

use serde::{Deserialize, Serialize};

/// One chosen option value, keyed by option name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    /// Option name (the canonical selection key).
    pub name: String,
    /// Chosen value.
    pub value: String,
}

/// Mapping from option name to chosen value.
///
/// At most one value per option; may cover only part of the product's
/// options at any time before a match is required. Entries keep the order
/// in which options were first selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    entries: Vec<SelectedOption>,
}

impl SelectionSet {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose a value for an option, replacing any previous choice for the
    /// same option.
    pub fn select(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.value = value,
            None => self.entries.push(SelectedOption { name, value }),
        }
    }

    /// The chosen value for an option, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.value.as_str())
    }

    /// Number of options with a chosen value.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been chosen yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in first-selected order.
    pub fn entries(&self) -> &[SelectedOption] {
        &self.entries
    }

    /// All chosen values, ignoring which option they belong to.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.value.as_str())
    }
}
