pub mod api;
pub mod callback;
pub mod handler;
pub mod keyboards;
pub mod replies;
pub mod runner;
pub mod settings;

use crate::bot::api::{ChatApi, Reply, TelegramClient};
use crate::bot::runner::BotRunner;
use crate::bot::settings::BotSettings;
use crate::core::context::AppContext;
use crate::core::summary::chat_summary;
use crate::errors::{Error, Result};
use crate::logging::LogTarget;

/// Entry point for `shoplist bot`.
pub fn run(ctx: &mut AppContext) -> Result<()> {
    let settings = BotSettings::from_env()?;
    let client = TelegramClient::new(&settings.token, ctx.config.poll_timeout_secs())?;
    ctx.logger.info(
        format!("Bot started; {} chat(s) allowed.", settings.partners.len()),
        LogTarget::ConsoleAndFile,
    );
    BotRunner::new(ctx, client, settings.partners).run()
}

/// Pushes the current list summary to `chat_id`, or to the first partner.
pub fn send_summary<A: ChatApi>(
    api: &A,
    ctx: &AppContext,
    settings: &BotSettings,
    chat_id: Option<i64>,
) -> Result<i64> {
    let target = chat_id
        .or_else(|| settings.primary_chat())
        .ok_or_else(|| Error::config("No chat id to send to."))?;
    let text = chat_summary(&ctx.list, &ctx.categories);
    api.send_message(target, &Reply::markdown(text))?;
    Ok(target)
}
