use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error set shared by the list model, the desk console and the bot.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Parsing & Routing --------------------------------------------------
    /// Free text or command arguments that could not be understood.
    #[error("Parse error: {0}")]
    Parse(String),

    /// No desk command matched the typed word.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    // ---- List / Domain ------------------------------------------------------
    /// The named item is not on the list.
    #[error("Item '{name}' is not on the list.")]
    ItemNotFound { name: String },

    /// A chat outside the partner allow-list tried to use the bot.
    #[error("Chat {chat_id} is not allowed to use the bot.")]
    Unauthorized { chat_id: i64 },

    // ---- Config -------------------------------------------------------------
    /// Any issue initializing/reading config (invalid JSON, bad value, etc.)
    #[error("Config error: {0}")]
    Config(String),

    /// A required setting (config key or environment variable) is absent.
    #[error("Missing configuration item: {item}")]
    ConfigItemMissing { item: &'static str },

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// The Bot API answered with `ok: false`.
    #[error("Telegram error: {0}")]
    Telegram(String),

    /// Generic domain error when you want to bubble a message without a new variant.
    #[error("{0}")]
    Domain(String),

    /// IO passthrough (read/write files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough (list/category/config files).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport failures talking to the Bot API.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
    pub fn not_found<S: Into<String>>(name: S) -> Self {
        Error::ItemNotFound { name: name.into() }
    }
}

// ----------------------- Small result helpers --------------------------------

/// Map an `Option<T>` into `Result<T, Error::ConfigItemMissing>` with a static key.
pub fn require_config_item<T>(opt: Option<T>, item: &'static str) -> Result<T> {
    opt.ok_or_else(|| Error::ConfigItemMissing { item })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_constructor_wraps_message() {
        let err = Error::parse("bad args");
        match err {
            Error::Parse(msg) => assert_eq!(msg, "bad args"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn telegram_error_keeps_api_description() {
        let err = Error::Telegram("Bad Request: chat not found".into());
        assert_eq!(err.to_string(), "Telegram error: Bad Request: chat not found");
    }

    #[test]
    fn not_found_formats_item_name() {
        let err = Error::not_found("חלב");
        assert_eq!(err.to_string(), "Item 'חלב' is not on the list.");
    }

    #[test]
    fn unauthorized_formats_chat_id() {
        let err = Error::Unauthorized { chat_id: -42 };
        assert_eq!(err.to_string(), "Chat -42 is not allowed to use the bot.");
    }

    #[test]
    fn require_config_item_passes_value_through() {
        let token = require_config_item(Some("123:abc".to_string()), "BOT_TOKEN").unwrap();
        assert_eq!(token, "123:abc");
    }

    #[test]
    fn require_config_item_errors_with_key() {
        let err = require_config_item::<i32>(None, "BOT_TOKEN").unwrap_err();
        match err {
            Error::ConfigItemMissing { item } => assert_eq!(item, "BOT_TOKEN"),
            other => panic!("expected config item missing error, got {other:?}"),
        }
    }

    #[test]
    fn io_error_converts_with_question_mark() {
        fn read_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here.json")?)
        }
        assert!(matches!(read_missing(), Err(Error::Io(_))));
    }

    #[test]
    fn json_error_formats_message() {
        let raw = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
        let expected = format!("JSON error: {}", raw);
        let err = Error::from(raw);
        assert_eq!(err.to_string(), expected);
    }
}
