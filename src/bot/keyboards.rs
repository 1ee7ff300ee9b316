use crate::bot::api::{InlineKeyboardButton, InlineKeyboardMarkup};
use crate::bot::callback::CallbackAction;
use crate::bot::replies;

/// One button per row; buttons whose data would exceed the callback limit are
/// left out and reported through `skipped`.
#[derive(Debug, Default)]
pub struct KeyboardBuilder {
    rows: Vec<Vec<InlineKeyboardButton>>,
    skipped: Vec<String>,
}

impl KeyboardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(mut self, buttons: &[(&str, CallbackAction)]) -> Self {
        let row: Vec<_> = buttons
            .iter()
            .filter_map(|(text, action)| self.button(text, action))
            .collect();
        if !row.is_empty() {
            self.rows.push(row);
        }
        self
    }

    pub fn button_row(self, text: &str, action: CallbackAction) -> Self {
        self.row(&[(text, action)])
    }

    fn button(&mut self, text: &str, action: &CallbackAction) -> Option<InlineKeyboardButton> {
        match action.encode_checked() {
            Some(callback_data) => Some(InlineKeyboardButton {
                text: text.to_string(),
                callback_data,
            }),
            None => {
                self.skipped.push(text.to_string());
                None
            }
        }
    }

    pub fn build(self) -> Keyboard {
        Keyboard {
            markup: InlineKeyboardMarkup {
                inline_keyboard: self.rows,
            },
            skipped: self.skipped,
        }
    }
}

#[derive(Debug)]
pub struct Keyboard {
    pub markup: InlineKeyboardMarkup,
    pub skipped: Vec<String>,
}

pub fn categories<'a>(categories: impl IntoIterator<Item = &'a str>) -> Keyboard {
    categories
        .into_iter()
        .fold(KeyboardBuilder::new(), |kb, category| {
            kb.button_row(category, CallbackAction::ShowCategory(category.to_string()))
        })
        .build()
}

pub fn items<'a>(names: impl IntoIterator<Item = &'a str>) -> Keyboard {
    names
        .into_iter()
        .fold(KeyboardBuilder::new(), |kb, name| {
            kb.button_row(name, CallbackAction::PickItem(name.to_string()))
        })
        .build()
}

/// Known categories for `item`, then a button to type a new one.
pub fn category_choices<'a>(item: &str, categories: impl IntoIterator<Item = &'a str>) -> Keyboard {
    categories
        .into_iter()
        .fold(KeyboardBuilder::new(), |kb, category| {
            kb.button_row(
                category,
                CallbackAction::SetCategory {
                    item: item.to_string(),
                    category: category.to_string(),
                },
            )
        })
        .button_row(
            replies::NEW_CATEGORY_BUTTON,
            CallbackAction::NewCategory(item.to_string()),
        )
        .build()
}

pub fn drop_category<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Keyboard {
    entries
        .into_iter()
        .fold(KeyboardBuilder::new(), |kb, (item, category)| {
            kb.button_row(
                &format!("{item} ({category})"),
                CallbackAction::DropCategory(item.to_string()),
            )
        })
        .build()
}

pub fn confirm_add(item: &str, quantity: u32) -> Keyboard {
    KeyboardBuilder::new()
        .row(&[
            (
                replies::CONFIRM_YES,
                CallbackAction::ConfirmAdd {
                    item: item.to_string(),
                    quantity,
                },
            ),
            (replies::CONFIRM_NO, CallbackAction::CancelAdd),
        ])
        .build()
}
