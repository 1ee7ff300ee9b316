use crate::config::Config;
use crate::core::category::CategoryBook;
use crate::core::models::ShoppingList;
use crate::core::types::Price;
use crate::ui::display_data::DisplayDataBuilder;
use crate::ui::table_printer::{Table, TablePrinter};
use crate::ui::width_util::WidthUtil;
use std::io::{self, IsTerminal, Write};

pub const LIST_HEADERS: [&str; 4] = ["NAME", "QTY", "CATEGORY", "PRICE"];
pub const CATEGORY_HEADERS: [&str; 2] = ["ITEM", "CATEGORY"];
pub const CONFIG_HEADERS: [&str; 3] = ["KEY", "DESCRIPTION", "VALUE"];

/// Builds and prints the desk tables; centered in the terminal when stdout
/// is one.
#[derive(Debug, Clone)]
pub struct DisplayManager {
    pub printer: TablePrinter,
    pub util: WidthUtil,
    pub data: DisplayDataBuilder,
    centered: bool,
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self {
            printer: TablePrinter::default(),
            util: WidthUtil,
            data: DisplayDataBuilder::default(),
            centered: io::stdout().is_terminal(),
        }
    }
}

impl DisplayManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_table(&self, list: &ShoppingList, book: &CategoryBook) -> Table<'static> {
        Table::new("Shopping list", &LIST_HEADERS, self.data.list_rows(list, book))
            .empty_message("The list is empty.")
            .footer(format!("Items: {}   Total: {}", list.len(), Price(list.total())))
    }

    pub fn categories_table(&self, book: &CategoryBook) -> Table<'static> {
        Table::new("Categories", &CATEGORY_HEADERS, self.data.category_rows(book))
            .empty_message("No categories remembered yet.")
    }

    pub fn config_table(&self, config: &Config) -> Table<'static> {
        Table::new("Config", &CONFIG_HEADERS, self.data.config_rows(config))
            .empty_message("No config items found.")
    }

    pub fn render_list<W: Write>(
        &self,
        list: &ShoppingList,
        book: &CategoryBook,
        out: &mut W,
    ) -> io::Result<()> {
        self.printer.render(&self.list_table(list, book), out)
    }

    pub fn display_list(&self, list: &ShoppingList, book: &CategoryBook) {
        self.show(&self.list_table(list, book));
    }

    pub fn display_categories(&self, book: &CategoryBook) {
        self.show(&self.categories_table(book));
    }

    pub fn display_config(&self, config: &Config) {
        self.show(&self.config_table(config));
    }

    fn show(&self, table: &Table<'_>) {
        if self.centered {
            self.display_centered(table);
        } else {
            self.printer.print(table);
        }
    }

    /// Prints `table` centered in the terminal and returns its width so
    /// prompts can line up with it.
    pub fn display_centered(&self, table: &Table<'_>) -> usize {
        let width = self.printer.table_width(table);
        let pad = self.util.center_pad(width);
        self.printer.with_left_pad(pad).print(table);
        width
    }
}
