use crate::errors::{Error, Result};
use crate::extensions::string::NormalizeWhitespace;
use crate::intent::keywords::{QUANTITY_RE, REMOVAL_WORD_RE};
use crate::intent::models::Intent;

/// Text handed to resolvers is already trimmed and whitespace-collapsed.
pub trait IntentResolver {
    fn can_resolve(&self, text: &str) -> bool;
    fn resolve(&self, text: &str) -> Result<Intent>;
}

/// Whole-message phrases such as `רשימה` or `מחק רשימה`.
pub struct PhraseResolver {
    phrases: &'static [&'static str],
    intent: Intent,
}

impl PhraseResolver {
    pub fn new(phrases: &'static [&'static str], intent: Intent) -> Self {
        Self { phrases, intent }
    }
}

impl IntentResolver for PhraseResolver {
    fn can_resolve(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.phrases.iter().any(|p| *p == lowered)
    }

    fn resolve(&self, _text: &str) -> Result<Intent> {
        Ok(self.intent.clone())
    }
}

/// `item: category`, split at the first colon.
pub struct CategorizedItemResolver;

impl IntentResolver for CategorizedItemResolver {
    fn can_resolve(&self, text: &str) -> bool {
        text.contains(':')
    }

    fn resolve(&self, text: &str) -> Result<Intent> {
        let (item, category) = text
            .split_once(':')
            .ok_or_else(|| Error::parse(format!("Expected 'item: category' in '{text}'.")))?;
        let item = item.normalize_whitespace();
        let category = category.normalize_whitespace();
        if item.is_empty() {
            return Err(Error::parse(format!("Missing item name before ':' in '{text}'.")));
        }
        if category.is_empty() {
            return Err(Error::parse(format!("Missing category after ':' in '{text}'.")));
        }
        Ok(Intent::AddCategorized { item, category })
    }
}

/// Fallback: an item name with an optional count, removed when a removal
/// verb is present and added otherwise.
pub struct ItemActionResolver;

impl IntentResolver for ItemActionResolver {
    fn can_resolve(&self, _text: &str) -> bool {
        true
    }

    fn resolve(&self, text: &str) -> Result<Intent> {
        let removing = REMOVAL_WORD_RE.is_match(text);
        let stripped = REMOVAL_WORD_RE.replace_all(text, " ");
        let (quantity, rest) = extract_quantity(&stripped)?;
        let item = rest.normalize_whitespace();
        if item.is_empty() {
            return Err(Error::parse(format!("No item name in '{text}'.")));
        }
        Ok(if removing {
            Intent::Remove { item, quantity }
        } else {
            Intent::Add { item, quantity }
        })
    }
}

/// First digit run is the count (default 1); returns the text without it.
pub fn extract_quantity(text: &str) -> Result<(u32, String)> {
    let Some(found) = QUANTITY_RE.find(text) else {
        return Ok((1, text.to_string()));
    };
    let quantity: u32 = found
        .as_str()
        .parse()
        .map_err(|_| Error::parse(format!("Quantity '{}' is too large.", found.as_str())))?;
    if quantity == 0 {
        return Err(Error::parse("Quantity must be at least 1."));
    }
    let rest = format!("{} {}", &text[..found.start()], &text[found.end()..]);
    Ok((quantity, rest))
}
