//! Blocking client for the Telegram Bot API.
//!
//! Only the four methods the bot needs are wrapped. Everything goes through
//! [`ChatApi`] so the runner can be driven by a fake in tests.

use crate::errors::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

const API_BASE: &str = "https://api.telegram.org";

// ── Incoming ──

#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(default = "Option::default")]
    pub result: Option<T>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub callback_query: Option<CallbackQuery>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    #[serde(default)]
    pub from: Option<User>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub data: Option<String>,
}

// ── Outgoing ──

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    pub callback_data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

/// Text plus presentation, independent of whether it is sent or edited in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub markdown: bool,
    pub keyboard: Option<InlineKeyboardMarkup>,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markdown: false,
            keyboard: None,
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markdown: true,
            keyboard: None,
        }
    }

    pub fn with_keyboard(text: impl Into<String>, keyboard: InlineKeyboardMarkup) -> Self {
        Self {
            text: text.into(),
            markdown: false,
            keyboard: Some(keyboard),
        }
    }

    fn parse_mode(&self) -> Option<&'static str> {
        self.markdown.then_some("Markdown")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outgoing {
    Send { chat_id: i64, reply: Reply },
    Edit { chat_id: i64, message_id: i64, reply: Reply },
    AckCallback { id: String },
}

#[derive(Serialize)]
struct GetUpdatesRequest {
    offset: i64,
    timeout: u64,
    allowed_updates: [&'static str; 2],
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_markup: Option<&'a InlineKeyboardMarkup>,
}

#[derive(Serialize)]
struct EditMessageTextRequest<'a> {
    chat_id: i64,
    message_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_markup: Option<&'a InlineKeyboardMarkup>,
}

#[derive(Serialize)]
struct AnswerCallbackQueryRequest<'a> {
    callback_query_id: &'a str,
}

pub trait ChatApi {
    fn get_updates(&self, offset: i64, timeout_secs: u64) -> Result<Vec<Update>>;
    fn send_message(&self, chat_id: i64, reply: &Reply) -> Result<()>;
    fn edit_message(&self, chat_id: i64, message_id: i64, reply: &Reply) -> Result<()>;
    fn answer_callback(&self, callback_id: &str) -> Result<()>;

    fn deliver(&self, outgoing: &Outgoing) -> Result<()> {
        match outgoing {
            Outgoing::Send { chat_id, reply } => self.send_message(*chat_id, reply),
            Outgoing::Edit {
                chat_id,
                message_id,
                reply,
            } => self.edit_message(*chat_id, *message_id, reply),
            Outgoing::AckCallback { id } => self.answer_callback(id),
        }
    }
}

/// Reusable blocking client bound to one bot token.
pub struct TelegramClient {
    client: reqwest::blocking::Client,
    base: String,
}

impl TelegramClient {
    /// The HTTP timeout leaves headroom over the long-poll timeout.
    pub fn new(token: &str, poll_timeout_secs: u64) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(poll_timeout_secs + 15))
            .build()?;
        Ok(Self {
            client,
            base: format!("{API_BASE}/bot{token}"),
        })
    }

    fn call<B: Serialize, T: DeserializeOwned>(&self, method: &str, body: &B) -> Result<T> {
        let url = format!("{}/{method}", self.base);
        let response: ApiResponse<T> = self
            .client
            .post(url)
            .json(body)
            .send()
            .and_then(|resp| resp.json())
            // The URL carries the token; keep it out of error text and logs.
            .map_err(|err| Error::Http(err.without_url()))?;
        if !response.ok {
            return Err(Error::Telegram(
                response
                    .description
                    .unwrap_or_else(|| format!("{method} failed")),
            ));
        }
        response
            .result
            .ok_or_else(|| Error::Telegram(format!("{method} returned no result")))
    }
}

impl ChatApi for TelegramClient {
    fn get_updates(&self, offset: i64, timeout_secs: u64) -> Result<Vec<Update>> {
        self.call(
            "getUpdates",
            &GetUpdatesRequest {
                offset,
                timeout: timeout_secs,
                allowed_updates: ["message", "callback_query"],
            },
        )
    }

    fn send_message(&self, chat_id: i64, reply: &Reply) -> Result<()> {
        let _: serde_json::Value = self.call(
            "sendMessage",
            &SendMessageRequest {
                chat_id,
                text: &reply.text,
                parse_mode: reply.parse_mode(),
                reply_markup: reply.keyboard.as_ref(),
            },
        )?;
        Ok(())
    }

    fn edit_message(&self, chat_id: i64, message_id: i64, reply: &Reply) -> Result<()> {
        let _: serde_json::Value = self.call(
            "editMessageText",
            &EditMessageTextRequest {
                chat_id,
                message_id,
                text: &reply.text,
                parse_mode: reply.parse_mode(),
                reply_markup: reply.keyboard.as_ref(),
            },
        )?;
        Ok(())
    }

    fn answer_callback(&self, callback_id: &str) -> Result<()> {
        let _: serde_json::Value = self.call(
            "answerCallbackQuery",
            &AnswerCallbackQueryRequest {
                callback_query_id: callback_id,
            },
        )?;
        Ok(())
    }
}

// The base URL embeds the token.
impl fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramClient")
            .field("base", &API_BASE)
            .finish_non_exhaustive()
    }
}
