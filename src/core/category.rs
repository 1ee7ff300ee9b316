use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::core::models::ShoppingList;

/// Remembered item -> category assignments. Outlives the list itself so a
/// re-added item picks up its old category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryBook {
    entries: IndexMap<String, String>,
}

impl CategoryBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, item: &str) -> Option<&str> {
        self.entries.get(item.trim()).map(String::as_str)
    }

    /// Blank categories are ignored.
    pub fn set(&mut self, item: &str, category: &str) {
        let item = item.trim();
        let category = category.trim();
        if item.is_empty() || category.is_empty() {
            return;
        }
        self.entries.insert(item.to_string(), category.to_string());
    }

    pub fn remove(&mut self, item: &str) -> Option<String> {
        self.entries.shift_remove(item.trim())
    }

    pub fn contains(&self, item: &str) -> bool {
        self.entries.contains_key(item.trim())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Unique category labels, sorted.
    pub fn distinct(&self) -> Vec<&str> {
        self.entries
            .values()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// The item's own category, falling back to the remembered one.
    pub fn effective<'a>(&'a self, list: &'a ShoppingList, item: &str) -> Option<&'a str> {
        list.category_of(item).or_else(|| self.get(item))
    }
}
