use crate::errors::{Error, Result};
use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub quantity: u32,
    pub category: Option<String>,
    pub price: Option<f64>,
}

impl Item {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
            category: None,
            price: None,
        }
    }

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    pub fn with_price(mut self, price: Option<f64>) -> Self {
        self.price = price;
        self
    }

    /// Price times quantity, if the item is priced.
    pub fn subtotal(&self) -> Option<f64> {
        self.price.map(|p| p * self.quantity as f64)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{}", self.name, self.quantity)?;
        if let Some(category) = &self.category {
            write!(f, " [{category}]")?;
        }
        if let Some(price) = self.price {
            write!(f, " @ {price:.2} ₪")?;
        }
        Ok(())
    }
}

/// What `remove_item` did to the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Deleted,
    Decreased(u32),
}

/// Item name -> item, in the order items were first added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingList {
    items: IndexMap<String, Item>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    fn clean_name(name: &str) -> Result<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(Error::parse("Item name must not be empty."));
        }
        Ok(trimmed.to_string())
    }

    fn clean_category(category: Option<&str>) -> Option<String> {
        category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
    }

    /// Adds `quantity` units. Category and price overwrite the stored ones
    /// only when given.
    pub fn add_item(
        &mut self,
        name: &str,
        quantity: u32,
        category: Option<&str>,
        price: Option<f64>,
    ) -> Result<&Item> {
        if quantity == 0 {
            return Err(Error::parse("Quantity must be at least 1."));
        }
        let name = Self::clean_name(name)?;
        let category = Self::clean_category(category);

        let entry = self
            .items
            .entry(name.clone())
            .or_insert_with(|| Item::new(name, 0));
        entry.quantity = entry.quantity.saturating_add(quantity);
        if category.is_some() {
            entry.category = category;
        }
        if price.is_some() {
            entry.price = price;
        }
        Ok(entry)
    }

    pub fn remove_item(&mut self, name: &str, quantity: u32) -> Result<Removal> {
        let key = name.trim();
        let item = self
            .items
            .get_mut(key)
            .ok_or_else(|| Error::not_found(key))?;
        if quantity >= item.quantity {
            self.items.shift_remove(key);
            return Ok(Removal::Deleted);
        }
        item.quantity -= quantity;
        Ok(Removal::Decreased(item.quantity))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.get(name.trim())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name.trim())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn category_of(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|i| i.category.as_deref())
    }

    pub fn set_category(&mut self, name: &str, category: Option<&str>) -> Result<()> {
        let key = name.trim();
        let item = self
            .items
            .get_mut(key)
            .ok_or_else(|| Error::not_found(key))?;
        item.category = Self::clean_category(category);
        Ok(())
    }

    /// Distinct item-level categories, sorted.
    pub fn categories(&self) -> Vec<&str> {
        self.items
            .values()
            .filter_map(|i| i.category.as_deref())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn total(&self) -> f64 {
        self.items.values().filter_map(Item::subtotal).sum()
    }

    /// Inserts a fully formed item, replacing any entry with the same name.
    /// Zero-quantity items are dropped.
    pub(crate) fn restore(&mut self, item: Item) {
        if item.quantity == 0 || item.name.trim().is_empty() {
            return;
        }
        self.items.insert(item.name.clone(), item);
    }
}
