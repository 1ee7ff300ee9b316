use crate::core::types::{Price, Quantity};
use crate::errors::Result;
use crate::prompter::models::{AddItemState, Flow, FlowCtrl};
use crate::ui::chrome::UiChrome;

/// What the form collected. Blank answers stay `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub quantity: u32,
    pub category: Option<String>,
    pub price: Option<f64>,
}

/// Asks for name, quantity, category and price one line at a time. Bad
/// numbers re-ask the same question; `cancel` or `exit` drops the draft.
pub struct AddItemForm {
    chrome: UiChrome,
    state: AddItemState,
    name: String,
    quantity: u32,
    category: Option<String>,
    price: Option<f64>,
    cancelled: bool,
}

impl Default for AddItemForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AddItemForm {
    pub fn new() -> Self {
        Self {
            chrome: UiChrome::new(),
            state: AddItemState::AskName,
            name: String::new(),
            quantity: 1,
            category: None,
            price: None,
            cancelled: false,
        }
    }

    pub fn state(&self) -> AddItemState {
        self.state
    }

    /// The finished draft; `None` until every question is answered or after
    /// a cancel.
    pub fn draft(&self) -> Option<ItemDraft> {
        if self.cancelled || self.state != AddItemState::Done {
            return None;
        }
        Some(ItemDraft {
            name: self.name.clone(),
            quantity: self.quantity,
            category: self.category.clone(),
            price: self.price,
        })
    }

    fn question(&self) -> &'static str {
        match self.state {
            AddItemState::AskName => "Item name ('cancel' or 'exit' to stop): ",
            AddItemState::AskQuantity => "Quantity [1]: ",
            AddItemState::AskCategory => "Category (blank for none): ",
            AddItemState::AskPrice => "Price per unit (blank for none): ",
            AddItemState::Done => "",
        }
    }

    fn optional(input: &str) -> Option<String> {
        let trimmed = input.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    fn answer(&mut self, input: &str) -> Result<()> {
        match self.state {
            AddItemState::AskName => {
                let name = input.split_whitespace().collect::<Vec<_>>().join(" ");
                if name.is_empty() {
                    println!("Name must not be empty.");
                    return Ok(());
                }
                self.name = name;
                self.state = AddItemState::AskQuantity;
            }
            AddItemState::AskQuantity => {
                if !input.is_empty() {
                    self.quantity = Quantity::try_from_str(input)?.0;
                }
                self.state = AddItemState::AskCategory;
            }
            AddItemState::AskCategory => {
                self.category = Self::optional(input);
                self.state = AddItemState::AskPrice;
            }
            AddItemState::AskPrice => {
                if let Some(raw) = Self::optional(input) {
                    self.price = Some(Price::try_from_str(&raw)?.0);
                }
                self.state = AddItemState::Done;
            }
            AddItemState::Done => {}
        }
        Ok(())
    }
}

impl Flow for AddItemForm {
    fn render(&mut self) -> Result<()> {
        if self.state != AddItemState::Done {
            self.chrome.print_prompt(self.question());
        }
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        self.chrome.end_prompt();
        let input = input.trim();
        if input.eq_ignore_ascii_case("cancel") || input.eq_ignore_ascii_case("exit") {
            self.cancelled = true;
            println!("Cancelled.");
            return Ok(FlowCtrl::Abort);
        }

        if let Err(err) = self.answer(input) {
            println!("{err}");
        }
        Ok(if self.state == AddItemState::Done {
            FlowCtrl::Finish
        } else {
            FlowCtrl::Continue
        })
    }
}
