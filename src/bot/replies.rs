use crate::bot::api::Reply;
use crate::core::category::CategoryBook;
use crate::core::models::ShoppingList;
use crate::core::summary::NO_CATEGORY;
use crate::extensions::string::EscapeMarkdown;
use std::fmt::Write;

pub const UNAUTHORIZED: &str = "❌ לא מורשה להשתמש בבוט.";
pub const NOT_UNDERSTOOD: &str =
    "🤔 לא הבנתי. כתוב שם פריט להוספה, 'קניתי' ושם פריט להסרה, או 'רשימה'.";
pub const GENERIC_ERROR: &str = "❌ אירעה שגיאה בעיבוד ההודעה. אנא נסה שוב.";
pub const EMPTY_LIST: &str = "📝 הרשימה ריקה";
pub const LIST_CLEARED: &str = "✅ הרשימה נוקתה בהצלחה!";
pub const NO_CATEGORIES: &str = "📝 אין קטגוריות מוגדרות";
pub const CHOOSE_CATEGORY: &str = "📝 בחר קטגוריה כדי לראות את הפריטים שלה:";
pub const CHOOSE_ITEM_TO_RECATEGORIZE: &str = "📝 בחר פריט לשינוי קטגוריה:";
pub const CHOOSE_ITEM_TO_UNCATEGORIZE: &str = "📝 בחר פריט למחיקת הקטגוריה שלו:";
pub const ADD_CANCELLED: &str = "❌ ביטלתי את ההוספה.";
pub const NEW_CATEGORY_BUTTON: &str = "➕ קטגוריה חדשה";
pub const CONFIRM_YES: &str = "✅ כן, הוסף";
pub const CONFIRM_NO: &str = "❌ לא, אל תוסיף";

pub fn welcome(chat_id: i64) -> String {
    format!(
        "מזהה הצ'אט שלך הוא: {chat_id}\n\n\
         👋 שלום! אני בוט רשימת קניות משותפת.\n\n\
         אני מבין הודעות טבעיות בעברית:\n\n\
         • כתוב שם פריט להוספה (למשל: 'חלב' או 'חלב 2')\n\
         • כתוב 'קניתי' או 'מחק' ואחריו שם הפריט (למשל: 'קניתי חלב' או 'מחק חלב 2')\n\
         • כתוב 'פריט: קטגוריה' כדי להוסיף פריט עם קטגוריה\n\
         • כתוב 'רשימה' כדי לראות את כל הפריטים\n\
         • כתוב 'קטגוריות', 'שנה קטגוריה' או 'מחק קטגוריה' לניהול קטגוריות\n\
         • כתוב 'מחק רשימה' כדי לנקות את כל הרשימה\n\n\
         אם תנסה להוסיף פריט שכבר קיים, אשאל אותך אם להוסיף אותו בכל זאת!\n\n\
         הרשימה משותפת עם בן/בת הזוג שלך!"
    )
}

/// The full list, one line per item with its effective category.
pub fn list(list: &ShoppingList, book: &CategoryBook) -> Reply {
    if list.is_empty() {
        return Reply::plain(EMPTY_LIST);
    }
    let mut text = String::from("📝 *רשימת קניות*\n\n");
    for item in list.iter() {
        let category = book.effective(list, &item.name).unwrap_or(NO_CATEGORY);
        let _ = writeln!(
            text,
            "• {} ({}): {}",
            item.name.escape_markdown(),
            category.escape_markdown(),
            item.quantity
        );
    }
    Reply::markdown(text)
}

pub fn category_items(list: &ShoppingList, book: &CategoryBook, category: &str) -> Reply {
    let lines: Vec<String> = list
        .iter()
        .filter(|item| book.effective(list, &item.name) == Some(category))
        .map(|item| format!("• {}: {}", item.name.escape_markdown(), item.quantity))
        .collect();
    if lines.is_empty() {
        return Reply::plain(format!("📝 אין פריטים בקטגוריה {category}"));
    }
    Reply::markdown(format!(
        "📝 *פריטים בקטגוריה {}:*\n\n{}",
        category.escape_markdown(),
        lines.join("\n")
    ))
}

pub fn added(item: &str) -> String {
    format!("✅ הוספתי {item} לרשימה")
}

pub fn added_with_category(item: &str, category: &str) -> String {
    format!("✅ הוספתי {item} לרשימה עם הקטגוריה: {category}")
}

pub fn added_quantity(item: &str, quantity: u32) -> String {
    format!("✅ הוספתי {quantity} {item} לרשימה!")
}

pub fn already_listed(item: &str) -> String {
    format!("❌ {item} כבר קיים ברשימה")
}

pub fn confirm_again(item: &str, current: u32) -> String {
    format!("⚠️ {item} כבר ברשימה (כמות: {current}). להוסיף בכל זאת?")
}

pub fn removed(item: &str) -> String {
    format!("✅ הסרתי {item} מהרשימה")
}

pub fn decreased(item: &str, remaining: u32) -> String {
    format!("✅ הסרתי {item} מהרשימה (נשארו {remaining})")
}

pub fn not_listed(item: &str) -> String {
    format!("❌ {item} לא נמצא ברשימה")
}

pub fn choose_new_category(item: &str) -> String {
    format!("📝 בחר קטגוריה חדשה עבור {item}:")
}

pub fn ask_category_name(item: &str) -> String {
    format!("✏️ כתוב את שם הקטגוריה החדשה עבור {item}:")
}

pub fn category_saved(item: &str, category: &str) -> String {
    format!("✅ שמרתי את הקטגוריה של {item} כ-{category}")
}

pub fn category_changed(item: &str, category: &str) -> String {
    format!("✅ שיניתי את הקטגוריה של {item} ל-{category}")
}

pub fn category_dropped(item: &str) -> String {
    format!("✅ מחקתי את הקטגוריה של {item}")
}

pub fn no_category_for(item: &str) -> String {
    format!("❌ לא נמצאה קטגוריה עבור {item}")
}
