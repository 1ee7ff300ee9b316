use crate::core::category::CategoryBook;
use crate::core::models::{Item, ShoppingList};
use crate::extensions::string::EscapeMarkdown;
use std::collections::BTreeMap;
use std::fmt::Write;

pub const NO_CATEGORY: &str = "ללא קטגוריה";

struct Grouped<'a> {
    by_category: BTreeMap<&'a str, Vec<&'a Item>>,
    uncategorized: Vec<&'a Item>,
}

fn group<'a>(list: &'a ShoppingList, book: &'a CategoryBook) -> Grouped<'a> {
    let mut by_category: BTreeMap<&str, Vec<&Item>> = BTreeMap::new();
    let mut uncategorized = Vec::new();
    for item in list.iter() {
        match book.effective(list, &item.name) {
            Some(category) => by_category.entry(category).or_default().push(item),
            None => uncategorized.push(item),
        }
    }
    Grouped {
        by_category,
        uncategorized,
    }
}

fn price_suffix(item: &Item) -> String {
    match item.price {
        Some(price) => format!(" (מחיר: {price:.2} ₪ ליחידה)"),
        None => String::new(),
    }
}

/// Plain-text rendering, grouped by effective category.
pub fn plain_summary(list: &ShoppingList, book: &CategoryBook) -> String {
    if list.is_empty() {
        return "הרשימה ריקה".to_string();
    }

    let mut out = String::from("רשימת הקניות שלך:\n");
    let grouped = group(list, book);
    let line = |out: &mut String, item: &Item| {
        let _ = writeln!(out, "- {}: {}{}", item.name, item.quantity, price_suffix(item));
    };

    if grouped.by_category.is_empty() {
        for item in &grouped.uncategorized {
            line(&mut out, item);
        }
    } else {
        for (category, items) in &grouped.by_category {
            let _ = write!(out, "\nקטגוריה: {category}\n");
            for item in items {
                line(&mut out, item);
            }
        }
        if !grouped.uncategorized.is_empty() {
            let _ = write!(out, "\n{NO_CATEGORY}\n");
            for item in &grouped.uncategorized {
                line(&mut out, item);
            }
        }
    }

    let total = list.total();
    if total > 0.0 {
        let _ = write!(out, "\nסכום כולל: {total:.2} ₪");
    }
    out
}

/// Telegram Markdown rendering used when pushing the list to a chat.
pub fn chat_summary(list: &ShoppingList, book: &CategoryBook) -> String {
    if list.is_empty() {
        return "📝 הרשימה ריקה".to_string();
    }

    let mut out = String::from("📝 *רשימת קניות*\n\n");
    let grouped = group(list, book);
    let line = |out: &mut String, item: &Item| {
        let _ = writeln!(
            out,
            "• {}: {}{}",
            item.name.escape_markdown(),
            item.quantity,
            price_suffix(item)
        );
    };

    if grouped.by_category.is_empty() {
        for item in &grouped.uncategorized {
            line(&mut out, item);
        }
    } else {
        for (category, items) in &grouped.by_category {
            let _ = writeln!(out, "*{}:*", category.escape_markdown());
            for item in items {
                line(&mut out, item);
            }
        }
        if !grouped.uncategorized.is_empty() {
            let _ = writeln!(out, "*{NO_CATEGORY}:*");
            for item in &grouped.uncategorized {
                line(&mut out, item);
            }
        }
    }

    let total = list.total();
    if total > 0.0 {
        let _ = write!(out, "\n*סכום כולל:* {total:.2} ₪");
    }
    out
}
