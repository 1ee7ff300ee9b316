use crate::config::Config;
use crate::core::category::CategoryBook;
use crate::core::models::ShoppingList;
use crate::core::types::Price;

/// Turns domain data into table cells.
#[derive(Debug, Default, Clone)]
pub struct DisplayDataBuilder;

impl DisplayDataBuilder {
    pub fn new() -> Self {
        Self
    }

    /// NAME | QTY | CATEGORY | PRICE, in list order. The category column shows
    /// the remembered category when the item has none of its own.
    pub fn list_rows(&self, list: &ShoppingList, book: &CategoryBook) -> Vec<Vec<String>> {
        list.iter()
            .map(|item| {
                vec![
                    item.name.clone(),
                    item.quantity.to_string(),
                    book.effective(list, &item.name)
                        .unwrap_or("-")
                        .to_string(),
                    item.price
                        .map(|p| Price(p).to_string())
                        .unwrap_or_else(|| "-".to_string()),
                ]
            })
            .collect()
    }

    pub fn category_rows(&self, book: &CategoryBook) -> Vec<Vec<String>> {
        book.iter()
            .map(|(item, category)| vec![item.to_string(), category.to_string()])
            .collect()
    }

    pub fn config_rows(&self, config: &Config) -> Vec<Vec<String>> {
        config
            .rows()
            .iter()
            .map(|(key, description, value)| vec![key.clone(), description.clone(), value.clone()])
            .collect()
    }
}
