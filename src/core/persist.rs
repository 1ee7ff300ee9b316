use crate::core::category::CategoryBook;
use crate::core::models::{Item, ShoppingList};
use crate::errors::Result;
use chrono::{DateTime, Local};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// An `items` entry. Older desk files stored a detail object per item; the
/// shared format stores a bare count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredItem {
    Count(u32),
    Detailed {
        quantity: u32,
        #[serde(default)]
        category: Option<String>,
        #[serde(default)]
        price: Option<f64>,
    },
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ListFile {
    #[serde(default)]
    pub items: IndexMap<String, StoredItem>,
    #[serde(default)]
    pub categories: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub prices: IndexMap<String, f64>,
}

impl From<&ShoppingList> for ListFile {
    fn from(list: &ShoppingList) -> Self {
        let mut file = ListFile::default();
        for item in list.iter() {
            file.items
                .insert(item.name.clone(), StoredItem::Count(item.quantity));
            if let Some(category) = &item.category {
                file.categories.insert(item.name.clone(), category.clone());
            }
            if let Some(price) = item.price {
                file.prices.insert(item.name.clone(), price);
            }
        }
        file
    }
}

impl ListFile {
    pub fn into_list(self) -> ShoppingList {
        let ListFile {
            items,
            categories,
            prices,
        } = self;
        let mut list = ShoppingList::new();
        for (name, stored) in items {
            let (quantity, category, price) = match stored {
                StoredItem::Count(q) => (q, None, None),
                StoredItem::Detailed {
                    quantity,
                    category,
                    price,
                } => (quantity, category, price),
            };
            let category = category.or_else(|| categories.get(&name).cloned());
            let price = price.or_else(|| prices.get(&name).copied());
            list.restore(
                Item::new(name, quantity)
                    .with_category(category)
                    .with_price(price),
            );
        }
        list
    }
}

pub fn save_list(list: &ShoppingList, path: &Path) -> Result<PathBuf> {
    write_pretty(&ListFile::from(list), path)
}

/// A missing file is an empty list.
pub fn load_list(path: &Path) -> Result<ShoppingList> {
    match read_if_exists(path)? {
        Some(contents) => {
            let file: ListFile = serde_json::from_str(&contents)?;
            Ok(file.into_list())
        }
        None => Ok(ShoppingList::new()),
    }
}

pub fn save_categories(book: &CategoryBook, path: &Path) -> Result<PathBuf> {
    write_pretty(book, path)
}

pub fn load_categories(path: &Path) -> Result<CategoryBook> {
    match read_if_exists(path)? {
        Some(contents) => Ok(serde_json::from_str(&contents)?),
        None => Ok(CategoryBook::new()),
    }
}

/// `shopping_list_YYYYmmdd_HHMMSS.json` inside `dir`.
pub fn snapshot_path(dir: &Path, now: DateTime<Local>) -> PathBuf {
    dir.join(format!("shopping_list_{}.json", now.format("%Y%m%d_%H%M%S")))
}

fn read_if_exists(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn write_pretty<T: Serialize>(value: &T, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    fs::write(path, buf)?;
    Ok(path.to_path_buf())
}
