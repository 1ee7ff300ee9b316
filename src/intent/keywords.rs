use once_cell::sync::Lazy;
use regex::Regex;

pub const LIST_PHRASES: &[&str] = &["רשימה", "הצג רשימה", "הראה רשימה"];
pub const CLEAR_PHRASES: &[&str] = &["מחק רשימה", "נקה רשימה", "אפס רשימה"];
pub const CATEGORIES_PHRASES: &[&str] = &["קטגוריות", "הצג קטגוריות", "הראה קטגוריות"];
pub const CHANGE_CATEGORY_PHRASES: &[&str] = &["החלף קטגוריה", "שנה קטגוריה", "עדכן קטגוריה"];
pub const DELETE_CATEGORY_PHRASES: &[&str] = &["מחק קטגוריה", "הסר קטגוריה", "הסר קטגוריות"];

/// Verbs meaning "bought it" or "delete it".
pub const REMOVAL_WORDS: &[&str] = &[
    "קניתי", "קנית", "קנו", "קנתה", "קנה", "מחק", "הסר", "הסרתי", "הסיר",
];

/// Any removal word standing as a whole word; `\b` is Unicode-aware, so
/// `מחקים` does not match `מחק`.
pub static REMOVAL_WORD_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = REMOVAL_WORDS.join("|");
    Regex::new(&format!(r"\b(?:{alternation})\b")).expect("removal word pattern is valid")
});

/// ASCII digits only, so the match always parses as `u32` unless it overflows.
pub static QUANTITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+").expect("quantity pattern is valid"));
