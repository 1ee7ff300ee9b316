use crate::errors::{Error, Result};
use crate::extensions::string::NormalizeWhitespace;
use crate::intent::intent_resolver::{
    CategorizedItemResolver, IntentResolver, ItemActionResolver, PhraseResolver,
};
use crate::intent::keywords::{
    CATEGORIES_PHRASES, CHANGE_CATEGORY_PHRASES, CLEAR_PHRASES, DELETE_CATEGORY_PHRASES,
    LIST_PHRASES,
};
use crate::intent::models::Intent;

/// Resolvers are tried in order; the first that accepts the text decides.
pub struct IntentParser {
    registry: Vec<Box<dyn IntentResolver>>,
}

impl Default for IntentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentParser {
    pub fn new() -> Self {
        Self {
            registry: vec![
                Box::new(PhraseResolver::new(LIST_PHRASES, Intent::ShowList)),
                Box::new(PhraseResolver::new(CLEAR_PHRASES, Intent::ClearList)),
                Box::new(PhraseResolver::new(CATEGORIES_PHRASES, Intent::ShowCategories)),
                Box::new(PhraseResolver::new(
                    CHANGE_CATEGORY_PHRASES,
                    Intent::ChangeCategory,
                )),
                Box::new(PhraseResolver::new(
                    DELETE_CATEGORY_PHRASES,
                    Intent::DeleteCategory,
                )),
                Box::new(CategorizedItemResolver),
                Box::new(ItemActionResolver),
            ],
        }
    }

    pub fn parse(&self, text: &str) -> Result<Intent> {
        let normalized = text.normalize_whitespace();
        if normalized.is_empty() {
            return Err(Error::parse("Empty message."));
        }
        for r in &self.registry {
            if r.can_resolve(&normalized) {
                return r.resolve(&normalized);
            }
        }
        Err(Error::UnknownCommand(normalized))
    }
}
