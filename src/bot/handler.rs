use crate::bot::api::{CallbackQuery, Outgoing, Reply, Update};
use crate::bot::callback::CallbackAction;
use crate::bot::keyboards::{self, Keyboard};
use crate::bot::replies;
use crate::core::context::AppContext;
use crate::core::models::Removal;
use crate::errors::{Error, Result};
use crate::extensions::string::NormalizeWhitespace;
use crate::intent::intent_parser::IntentParser;
use crate::intent::models::Intent;
use crate::logging::{LogTarget, Logger};
use std::collections::HashMap;

/// Turns updates into outgoing actions. Holds no list state of its own: the
/// shared files are re-read on every update and written after each change.
pub struct BotHandler {
    partners: Vec<i64>,
    parser: IntentParser,
    awaiting_category: HashMap<i64, String>,
    logger: Logger,
}

impl BotHandler {
    pub fn new(partners: Vec<i64>, logger: Logger) -> Self {
        Self {
            partners,
            parser: IntentParser::new(),
            awaiting_category: HashMap::new(),
            logger,
        }
    }

    pub fn is_partner(&self, chat_id: i64) -> bool {
        self.partners.contains(&chat_id)
    }

    /// The item a chat will name a category for, if it pressed "new category".
    pub fn pending_category(&self, chat_id: i64) -> Option<&str> {
        self.awaiting_category.get(&chat_id).map(String::as_str)
    }

    pub fn handle_update(&mut self, ctx: &mut AppContext, update: &Update) -> Vec<Outgoing> {
        if let Some(message) = &update.message {
            return match message.text.as_deref() {
                Some(text) => self.handle_text(ctx, message.chat.id, text),
                None => Vec::new(),
            };
        }
        if let Some(query) = &update.callback_query {
            return self.handle_callback(ctx, query);
        }
        Vec::new()
    }

    pub fn handle_text(&mut self, ctx: &mut AppContext, chat_id: i64, text: &str) -> Vec<Outgoing> {
        let text = text.trim();
        if text.starts_with('/') {
            return self.handle_command(chat_id, text);
        }

        if !self.is_partner(chat_id) {
            self.logger.warn(
                Error::Unauthorized { chat_id }.to_string(),
                LogTarget::ConsoleAndFile,
            );
            return vec![send(chat_id, Reply::plain(replies::UNAUTHORIZED))];
        }

        let reply = match self.answer_text(ctx, chat_id, text) {
            Ok(reply) => reply,
            Err(Error::Parse(msg)) => {
                self.logger
                    .info(format!("chat {chat_id}: {msg}"), LogTarget::FileOnly);
                Reply::plain(replies::NOT_UNDERSTOOD)
            }
            Err(err) => {
                self.logger.error(
                    format!("chat {chat_id}: failed to handle '{text}': {err}"),
                    LogTarget::ConsoleAndFile,
                );
                Reply::plain(replies::GENERIC_ERROR)
            }
        };
        vec![send(chat_id, reply)]
    }

    fn handle_command(&self, chat_id: i64, text: &str) -> Vec<Outgoing> {
        let command = text
            .split_whitespace()
            .next()
            .and_then(|word| word.split('@').next())
            .unwrap_or_default();
        match command {
            "/start" | "/help" => vec![send(chat_id, Reply::plain(replies::welcome(chat_id)))],
            _ => Vec::new(),
        }
    }

    fn answer_text(&mut self, ctx: &mut AppContext, chat_id: i64, text: &str) -> Result<Reply> {
        ctx.reload()?;

        if let Some(item) = self.awaiting_category.remove(&chat_id) {
            return self.store_typed_category(ctx, &item, text);
        }

        let intent = self.parser.parse(text)?;
        // List changes are echoed to the console running the bot.
        let target = if intent.mutates_list() {
            LogTarget::ConsoleAndFile
        } else {
            LogTarget::FileOnly
        };
        self.logger.info(format!("chat {chat_id}: {intent}"), target);

        match intent {
            Intent::ShowList => Ok(replies::list(&ctx.list, &ctx.categories)),
            Intent::ClearList => {
                ctx.list.clear();
                ctx.save_list()?;
                Ok(Reply::plain(replies::LIST_CLEARED))
            }
            Intent::ShowCategories => {
                if ctx.categories.is_empty() {
                    return Ok(Reply::plain(replies::NO_CATEGORIES));
                }
                let keyboard = keyboards::categories(ctx.categories.distinct());
                Ok(self.with_keyboard(replies::CHOOSE_CATEGORY, keyboard))
            }
            Intent::ChangeCategory => {
                if ctx.list.is_empty() {
                    return Ok(Reply::plain(replies::EMPTY_LIST));
                }
                let keyboard = keyboards::items(ctx.list.names());
                Ok(self.with_keyboard(replies::CHOOSE_ITEM_TO_RECATEGORIZE, keyboard))
            }
            Intent::DeleteCategory => {
                if ctx.categories.is_empty() {
                    return Ok(Reply::plain(replies::NO_CATEGORIES));
                }
                let keyboard = keyboards::drop_category(ctx.categories.iter());
                Ok(self.with_keyboard(replies::CHOOSE_ITEM_TO_UNCATEGORIZE, keyboard))
            }
            Intent::AddCategorized { item, category } => {
                if ctx.list.contains(&item) {
                    return Ok(Reply::plain(replies::already_listed(&item)));
                }
                ctx.list.add_item(&item, 1, Some(&category), None)?;
                ctx.categories.set(&item, &category);
                ctx.save_list()?;
                ctx.save_categories()?;
                Ok(Reply::plain(replies::added_with_category(&item, &category)))
            }
            Intent::Add { item, quantity } => {
                if let Some(existing) = ctx.list.get(&item) {
                    let text = replies::confirm_again(&item, existing.quantity);
                    return Ok(self.with_keyboard(&text, keyboards::confirm_add(&item, quantity)));
                }
                let remembered = ctx.categories.get(&item).map(str::to_string);
                ctx.list
                    .add_item(&item, quantity, remembered.as_deref(), None)?;
                ctx.save_list()?;
                Ok(Reply::plain(replies::added(&item)))
            }
            Intent::Remove { item, quantity } => {
                if !ctx.list.contains(&item) {
                    return Ok(Reply::plain(replies::not_listed(&item)));
                }
                let removal = ctx.list.remove_item(&item, quantity)?;
                ctx.save_list()?;
                Ok(Reply::plain(match removal {
                    Removal::Deleted => replies::removed(&item),
                    Removal::Decreased(remaining) => replies::decreased(&item, remaining),
                }))
            }
        }
    }

    fn store_typed_category(&self, ctx: &mut AppContext, item: &str, text: &str) -> Result<Reply> {
        let category = text.normalize_whitespace();
        if category.is_empty() {
            return Err(Error::parse("Category name must not be empty."));
        }
        ctx.categories.set(item, &category);
        ctx.save_categories()?;
        if ctx.list.contains(item) {
            ctx.list.set_category(item, Some(&category))?;
            ctx.save_list()?;
        }
        Ok(Reply::plain(replies::category_saved(item, &category)))
    }

    pub fn handle_callback(&mut self, ctx: &mut AppContext, query: &CallbackQuery) -> Vec<Outgoing> {
        let mut out = vec![Outgoing::AckCallback {
            id: query.id.clone(),
        }];
        let Some(message) = &query.message else {
            return out;
        };
        let chat_id = message.chat.id;
        if !self.is_partner(chat_id) {
            self.logger.warn(
                Error::Unauthorized { chat_id }.to_string(),
                LogTarget::ConsoleAndFile,
            );
            return out;
        }

        let data = query.data.as_deref().unwrap_or_default();
        let outcome = CallbackAction::decode(data)
            .and_then(|action| self.answer_callback(ctx, chat_id, action));
        let reply = match outcome {
            Ok(reply) => reply,
            Err(Error::Parse(msg)) => {
                self.logger.warn(
                    format!("Ignoring callback '{data}' from chat {chat_id}: {msg}"),
                    LogTarget::ConsoleAndFile,
                );
                return out;
            }
            Err(err) => {
                self.logger.error(
                    format!("chat {chat_id}: callback '{data}' failed: {err}"),
                    LogTarget::ConsoleAndFile,
                );
                Reply::plain(replies::GENERIC_ERROR)
            }
        };
        out.push(Outgoing::Edit {
            chat_id,
            message_id: message.message_id,
            reply,
        });
        out
    }

    fn answer_callback(
        &mut self,
        ctx: &mut AppContext,
        chat_id: i64,
        action: CallbackAction,
    ) -> Result<Reply> {
        ctx.reload()?;
        self.logger
            .info(format!("chat {chat_id}: button {action}"), LogTarget::FileOnly);

        match action {
            CallbackAction::ShowCategory(category) => Ok(replies::category_items(
                &ctx.list,
                &ctx.categories,
                &category,
            )),
            CallbackAction::PickItem(item) => {
                let keyboard = keyboards::category_choices(&item, ctx.categories.distinct());
                Ok(self.with_keyboard(&replies::choose_new_category(&item), keyboard))
            }
            CallbackAction::SetCategory { item, category } => {
                ctx.categories.set(&item, &category);
                ctx.save_categories()?;
                if ctx.list.contains(&item) {
                    ctx.list.set_category(&item, Some(&category))?;
                    ctx.save_list()?;
                }
                Ok(Reply::plain(replies::category_changed(&item, &category)))
            }
            CallbackAction::NewCategory(item) => {
                let text = replies::ask_category_name(&item);
                self.awaiting_category.insert(chat_id, item);
                Ok(Reply::plain(text))
            }
            CallbackAction::DropCategory(item) => {
                let remembered = ctx.categories.remove(&item).is_some();
                let listed = ctx.list.category_of(&item).is_some();
                if !remembered && !listed {
                    return Ok(Reply::plain(replies::no_category_for(&item)));
                }
                if remembered {
                    ctx.save_categories()?;
                }
                if listed {
                    ctx.list.set_category(&item, None)?;
                    ctx.save_list()?;
                }
                Ok(Reply::plain(replies::category_dropped(&item)))
            }
            CallbackAction::ConfirmAdd { item, quantity } => {
                let remembered = ctx.categories.get(&item).map(str::to_string);
                ctx.list
                    .add_item(&item, quantity, remembered.as_deref(), None)?;
                ctx.save_list()?;
                Ok(Reply::plain(replies::added_quantity(&item, quantity)))
            }
            CallbackAction::CancelAdd => Ok(Reply::plain(replies::ADD_CANCELLED)),
        }
    }

    fn with_keyboard(&self, text: &str, keyboard: Keyboard) -> Reply {
        if !keyboard.skipped.is_empty() {
            self.logger.warn(
                format!(
                    "Left out {} button(s) over the callback size limit: {}",
                    keyboard.skipped.len(),
                    keyboard.skipped.join(", ")
                ),
                LogTarget::ConsoleAndFile,
            );
        }
        Reply::with_keyboard(text, keyboard.markup)
    }
}

fn send(chat_id: i64, reply: Reply) -> Outgoing {
    Outgoing::Send { chat_id, reply }
}
