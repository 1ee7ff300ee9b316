use crate::bot;
use crate::bot::api::TelegramClient;
use crate::bot::settings::BotSettings;
use crate::config::ConfigKey;
use crate::core::context::AppContext;
use crate::core::models::Removal;
use crate::core::persist::{load_list, save_list, snapshot_path};
use crate::core::summary::plain_summary;
use crate::core::types::{DeskCommand, Price, Quantity};
use crate::errors::{Error, Result};
use crate::extensions::string::split_args;
use crate::logging::{LogTarget, Logger};
use crate::prompter::flows::add_item::{AddItemForm, ItemDraft};
use crate::prompter::models::{Flow, FlowCtrl};
use crate::ui::chrome::UiChrome;
use crate::ui::display_manager::DisplayManager;
use chrono::Local;
use std::path::PathBuf;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// The desk console: one command per line, with the add-item form nested
/// inside while it is open.
pub struct DeskFlow<'a> {
    ctx: &'a mut AppContext,
    dm: DisplayManager,
    chrome: UiChrome,
    logger: Logger,
    form: Option<AddItemForm>,
}

impl<'a> DeskFlow<'a> {
    pub fn new(ctx: &'a mut AppContext) -> Self {
        let logger = ctx.logger.scoped("desk");
        Self {
            ctx,
            dm: DisplayManager::new(),
            chrome: UiChrome::new(),
            logger,
            form: None,
        }
    }

    pub fn form_open(&self) -> bool {
        self.form.is_some()
    }
}

impl<'a> Flow for DeskFlow<'a> {
    fn render(&mut self) -> Result<()> {
        self.print_startup();
        match self.form.as_mut() {
            Some(form) => form.render(),
            None => {
                self.chrome.print_prompt("> ");
                Ok(())
            }
        }
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        if self.form.is_some() {
            self.handle_form_input(input)?;
            return Ok(FlowCtrl::Continue);
        }

        self.chrome.end_prompt();
        let line = input.trim();
        let words = split_args(line);
        let Some((head, args)) = words.split_first() else {
            return Ok(FlowCtrl::Continue);
        };

        let command = match DeskCommand::try_from(head) {
            Ok(command) => command,
            Err(err) => {
                self.logger.error(format!("{err}"), LogTarget::ConsoleOnly);
                return Ok(FlowCtrl::Continue);
            }
        };

        self.logger
            .info(format!("Command run: {line}"), LogTarget::FileOnly);
        if let Err(err) = self.execute(command, args) {
            self.report_failure(command, err);
        }
        Ok(FlowCtrl::Continue)
    }

    fn captures_exit(&self) -> bool {
        self.form_open()
    }
}

impl<'a> DeskFlow<'a> {
    fn print_startup(&mut self) {
        if self.ctx.startup_displayed {
            return;
        }
        self.chrome.clear_screen();
        self.chrome.print_banner();
        println!();
        println!("Type 'help' for commands, 'exit' to quit.");
        println!();
        println!("Config path: {}", self.ctx.config_path.display());
        println!("List path: {}", self.ctx.config.list_path().display());
        println!("Logs path: {}", self.ctx.logs_dir.display());
        println!();
        self.ctx.startup_displayed = true;
    }

    fn handle_form_input(&mut self, input: &str) -> Result<()> {
        let Some(form) = self.form.as_mut() else {
            return Ok(());
        };
        match form.handle_input(input)? {
            FlowCtrl::Continue => {}
            FlowCtrl::Finish => {
                let draft = form.draft();
                self.form = None;
                if let Some(draft) = draft {
                    if let Err(err) = self.apply_draft(draft) {
                        self.report_failure(DeskCommand::Add, err);
                    }
                }
            }
            FlowCtrl::Abort => self.form = None,
        }
        Ok(())
    }

    fn report_failure(&self, command: DeskCommand, err: Error) {
        self.logger.error(
            format!("Command '{command}' failed. {err}"),
            LogTarget::ConsoleAndFile,
        );
        if matches!(err, Error::Parse(_)) {
            println!("Usage: {}", command.usage());
        }
    }

    fn execute(&mut self, command: DeskCommand, args: &[String]) -> Result<()> {
        match command {
            DeskCommand::Add => {
                self.form = Some(AddItemForm::new());
                Ok(())
            }
            DeskCommand::Del => self.remove(args),
            DeskCommand::Clear => {
                self.ctx.reload()?;
                self.ctx.list.clear();
                self.ctx.save_list()?;
                self.chrome.success("List cleared.");
                Ok(())
            }
            DeskCommand::List => {
                self.ctx.reload()?;
                self.dm.display_list(&self.ctx.list, &self.ctx.categories);
                Ok(())
            }
            DeskCommand::Total => {
                self.ctx.reload()?;
                println!("Total: {:.2} ₪", self.ctx.list.total());
                Ok(())
            }
            DeskCommand::Summary => {
                self.ctx.reload()?;
                println!("{}", plain_summary(&self.ctx.list, &self.ctx.categories));
                Ok(())
            }
            DeskCommand::Categories => {
                self.ctx.reload()?;
                self.dm.display_categories(&self.ctx.categories);
                Ok(())
            }
            DeskCommand::Save => {
                self.ctx.reload()?;
                let path = self.ctx.save_list()?;
                self.chrome
                    .success(&format!("Saved the list to {}.", path.display()));
                Ok(())
            }
            DeskCommand::Snapshot => {
                self.ctx.reload()?;
                let path = snapshot_path(self.ctx.config.snapshot_dir(), Local::now());
                let path = save_list(&self.ctx.list, &path)?;
                self.logger.info(
                    format!("Snapshot written to {}", path.display()),
                    LogTarget::FileOnly,
                );
                self.chrome
                    .success(&format!("Snapshot written to {}.", path.display()));
                Ok(())
            }
            DeskCommand::Load => self.load(args),
            DeskCommand::Send => self.send(args),
            DeskCommand::Config => self.config(args),
            DeskCommand::Help => {
                println!("Commands:");
                for command in DeskCommand::iter() {
                    println!("  {}", command.usage());
                }
                println!("  exit                leave the console");
                Ok(())
            }
        }
    }

    fn apply_draft(&mut self, draft: ItemDraft) -> Result<()> {
        self.ctx.reload()?;
        let category = draft
            .category
            .clone()
            .or_else(|| self.ctx.categories.get(&draft.name).map(str::to_string));
        let item = self
            .ctx
            .list
            .add_item(&draft.name, draft.quantity, category.as_deref(), draft.price)?
            .clone();
        if let Some(category) = &draft.category {
            self.ctx.categories.set(&draft.name, category);
            self.ctx.save_categories()?;
        }
        self.ctx.save_list()?;
        self.logger
            .info(format!("Added {item}"), LogTarget::FileOnly);
        self.chrome.success(&format!("Added {item}."));
        Ok(())
    }

    /// `del <name words...> [qty]`
    fn remove(&mut self, args: &[String]) -> Result<()> {
        let (name, quantity) = match args {
            [] => return Err(Error::parse("Missing item name.")),
            [name] => (name.clone(), 1),
            [rest @ .., last] => match Quantity::try_from_str(last) {
                Ok(q) => (rest.join(" "), q.0),
                Err(_) => (args.join(" "), 1),
            },
        };

        self.ctx.reload()?;
        let removal = match self.ctx.list.remove_item(&name, quantity) {
            Ok(removal) => removal,
            Err(err @ Error::ItemNotFound { .. }) => {
                self.logger.warn(err.to_string(), LogTarget::ConsoleOnly);
                return Ok(());
            }
            Err(err) => return Err(err),
        };
        self.ctx.save_list()?;
        match removal {
            Removal::Deleted => self.chrome.success(&format!("Removed {name}.")),
            Removal::Decreased(left) => self
                .chrome
                .success(&format!("Removed {quantity} {name}; {left} left.")),
        }
        Ok(())
    }

    fn load(&mut self, args: &[String]) -> Result<()> {
        let [raw] = args else {
            return Err(Error::parse("Expected exactly one path."));
        };
        let path = PathBuf::from(raw);
        if !path.is_file() {
            return Err(Error::Domain(format!("File '{}' not found.", path.display())));
        }
        self.ctx.list = load_list(&path)?;
        self.ctx.save_list()?;
        self.chrome.success(&format!(
            "Loaded {} item(s) from {}.",
            self.ctx.list.len(),
            path.display()
        ));
        Ok(())
    }

    fn send(&mut self, args: &[String]) -> Result<()> {
        let chat_id = match args {
            [] => None,
            [raw] => Some(
                raw.parse::<i64>()
                    .map_err(|_| Error::parse(format!("Invalid chat id: '{raw}'.")))?,
            ),
            _ => return Err(Error::parse("Expected at most one chat id.")),
        };
        let settings = BotSettings::from_env()?;
        let client = TelegramClient::new(&settings.token, 0)?;
        self.ctx.reload()?;
        let target = bot::send_summary(&client, self.ctx, &settings, chat_id)?;
        self.logger.info(
            format!(
                "Sent the list ({} item(s), total {}) to chat {target}",
                self.ctx.list.len(),
                Price(self.ctx.list.total())
            ),
            LogTarget::FileOnly,
        );
        self.chrome
            .success(&format!("Sent the list to chat {target}."));
        Ok(())
    }

    fn config(&mut self, args: &[String]) -> Result<()> {
        let (key, value) = match args {
            [] => {
                self.dm.display_config(&self.ctx.config);
                return Ok(());
            }
            [_] => return Err(Error::parse("Expected a key and a value.")),
            [key, rest @ ..] => (key, rest.join(" ")),
        };
        self.ctx.config.set(key, &value)?;
        if let Some((key, old, new)) = self.ctx.config.take_last_change() {
            self.log_config_change(&key, &old, &new);
        }
        if matches!(
            ConfigKey::from_str(key),
            Ok(ConfigKey::ListPath | ConfigKey::CategoriesPath)
        ) {
            self.ctx.reload()?;
        }
        self.chrome
            .success(&format!("Updated {}.", key.to_uppercase()));
        Ok(())
    }

    /// Turning file logging off still records the change; turning it on
    /// records it in the new file.
    fn log_config_change(&self, key: &str, old: &str, new: &str) {
        let enabled = self.ctx.config.file_logging_enabled();
        if enabled {
            self.ctx.logger.set_file_logging_enabled(true);
        }
        self.logger.info(
            format!("Config '{key}' updated: '{old}' -> '{new}'"),
            LogTarget::FileOnly,
        );
        self.ctx.logger.set_file_logging_enabled(enabled);
    }
}
