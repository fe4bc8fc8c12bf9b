//! The user's chosen option per catalog setting

use std::collections::BTreeMap;

use crate::catalog;
use crate::error::{SelectionError, SelectionResult};

/// Mapping from catalog id to the chosen option
///
/// Only ids and options present in [`catalog::CATALOG`] can be stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selections {
    chosen: BTreeMap<String, String>,
}

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and collect an arbitrary id/option map
    ///
    /// Empty option strings are skipped rather than rejected.
    pub fn from_map<I, K, V>(entries: I) -> SelectionResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut selections = Self::new();
        for (id, option) in entries {
            selections.select(id.as_ref(), option.as_ref())?;
        }
        Ok(selections)
    }

    /// Choose `option` for setting `id`; an empty option clears it
    pub fn select(&mut self, id: &str, option: &str) -> SelectionResult<()> {
        let entry = catalog::find(id).ok_or_else(|| SelectionError::UnknownSetting { id: id.to_string() })?;

        if option.is_empty() {
            self.chosen.remove(id);
            return Ok(());
        }

        if !entry.has_option(option) {
            return Err(SelectionError::InvalidOption {
                id: id.to_string(),
                option: option.to_string(),
            });
        }

        self.chosen.insert(id.to_string(), option.to_string());
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.chosen.get(id).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.chosen.clear();
    }

    /// Number of settings with a chosen option
    pub fn filled_count(&self) -> usize {
        self.chosen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }
}
