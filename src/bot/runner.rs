use crate::bot::api::{ChatApi, Outgoing};
use crate::bot::handler::BotHandler;
use crate::core::context::AppContext;
use crate::errors::Result;
use crate::logging::{LogTarget, Logger};
use std::thread;
use std::time::Duration;

const RETRY_PAUSE: Duration = Duration::from_secs(3);

/// Sequential long-polling loop: fetch a batch, handle each update, deliver.
pub struct BotRunner<'a, A: ChatApi> {
    ctx: &'a mut AppContext,
    api: A,
    handler: BotHandler,
    logger: Logger,
    offset: i64,
    retry_pause: Duration,
}

impl<'a, A: ChatApi> BotRunner<'a, A> {
    pub fn new(ctx: &'a mut AppContext, api: A, partners: Vec<i64>) -> Self {
        let logger = ctx.logger.scoped("bot");
        let handler = BotHandler::new(partners, logger.clone());
        Self {
            ctx,
            api,
            handler,
            logger,
            offset: 0,
            retry_pause: RETRY_PAUSE,
        }
    }

    pub fn with_retry_pause(mut self, pause: Duration) -> Self {
        self.retry_pause = pause;
        self
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn handler(&self) -> &BotHandler {
        &self.handler
    }

    /// One `getUpdates` round. Returns how many updates were handled.
    pub fn poll_once(&mut self) -> Result<usize> {
        let timeout = self.ctx.config.poll_timeout_secs();
        let updates = self.api.get_updates(self.offset, timeout)?;

        for update in &updates {
            self.offset = self.offset.max(update.update_id + 1);
            let outgoing = self.handler.handle_update(self.ctx, update);
            self.deliver(&outgoing);
        }
        Ok(updates.len())
    }

    fn deliver(&self, outgoing: &[Outgoing]) {
        for action in outgoing {
            if let Err(err) = self.api.deliver(action) {
                self.logger
                    .error(format!("Delivery failed: {err}"), LogTarget::ConsoleAndFile);
            }
        }
    }

    /// Polls until the process is stopped.
    pub fn run(&mut self) -> Result<()> {
        self.logger.info(
            format!(
                "Polling for updates ({}s long poll).",
                self.ctx.config.poll_timeout_secs()
            ),
            LogTarget::ConsoleAndFile,
        );
        loop {
            if let Err(err) = self.poll_once() {
                self.logger
                    .warn(format!("Polling failed: {err}"), LogTarget::ConsoleAndFile);
                thread::sleep(self.retry_pause);
            }
        }
    }
}
