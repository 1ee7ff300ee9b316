use crate::errors::{Error, Result, require_config_item};
use std::fmt;

pub const TOKEN_VAR: &str = "BOT_TOKEN";
pub const PARTNERS_VAR: &str = "PARTNER_CHAT_ID";

/// Secrets and the chat allow-list, read from the environment.
#[derive(Clone, PartialEq, Eq)]
pub struct BotSettings {
    pub token: String,
    pub partners: Vec<i64>,
}

impl BotSettings {
    /// Reads `BOT_TOKEN` and `PARTNER_CHAT_ID`; call `dotenvy::dotenv()` first
    /// to honor a `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            std::env::var(TOKEN_VAR).ok(),
            std::env::var(PARTNERS_VAR).ok(),
        )
    }

    pub fn from_values(token: Option<String>, partners: Option<String>) -> Result<Self> {
        let token = require_config_item(
            token.map(|t| t.trim().to_string()).filter(|t| !t.is_empty()),
            TOKEN_VAR,
        )?;
        let partners = parse_partner_ids(&partners.unwrap_or_default())?;
        if partners.is_empty() {
            return Err(Error::ConfigItemMissing { item: PARTNERS_VAR });
        }
        Ok(Self { token, partners })
    }

    pub fn is_partner(&self, chat_id: i64) -> bool {
        self.partners.contains(&chat_id)
    }

    /// First allow-listed chat; the default target for `send`.
    pub fn primary_chat(&self) -> Option<i64> {
        self.partners.first().copied()
    }
}

// Keep the token out of logs.
impl fmt::Debug for BotSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotSettings")
            .field("token", &"<redacted>")
            .field("partners", &self.partners)
            .finish()
    }
}

/// Comma-separated chat ids; blanks are skipped.
pub fn parse_partner_ids(raw: &str) -> Result<Vec<i64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .map_err(|_| Error::config(format!("Invalid chat id in {PARTNERS_VAR}: '{s}'.")))
        })
        .collect()
}
