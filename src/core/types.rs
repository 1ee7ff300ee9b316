use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum RunMode {
    #[strum(serialize = "desk", to_string = "desk")]
    Desk,
    #[strum(serialize = "bot", to_string = "bot")]
    Bot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum DeskCommand {
    #[strum(serialize = "add", to_string = "add")]
    Add,
    #[strum(serialize = "del", serialize = "remove", to_string = "del")]
    Del,
    #[strum(serialize = "clear", to_string = "clear")]
    Clear,
    #[strum(serialize = "list", serialize = "ls", to_string = "list")]
    List,
    #[strum(serialize = "total", to_string = "total")]
    Total,
    #[strum(serialize = "summary", to_string = "summary")]
    Summary,
    #[strum(serialize = "categories", to_string = "categories")]
    Categories,
    #[strum(serialize = "save", to_string = "save")]
    Save,
    #[strum(serialize = "snapshot", to_string = "snapshot")]
    Snapshot,
    #[strum(serialize = "load", to_string = "load")]
    Load,
    #[strum(serialize = "send", to_string = "send")]
    Send,
    #[strum(serialize = "config", to_string = "config")]
    Config,
    #[strum(serialize = "help", to_string = "help")]
    Help,
}

impl DeskCommand {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::UnknownCommand(format!(
                "'{}'. Valid commands: {}",
                s.trim(),
                valid_csv::<DeskCommand>()
            ))
        })
    }

    pub fn usage(&self) -> &'static str {
        match self {
            DeskCommand::Add => "add                 open the add-item form",
            DeskCommand::Del => "del <name> [qty]    remove units of an item",
            DeskCommand::Clear => "clear               empty the list",
            DeskCommand::List => "list                show the list with prices",
            DeskCommand::Total => "total               show the priced total",
            DeskCommand::Summary => "summary             print the list grouped by category",
            DeskCommand::Categories => "categories          show remembered categories",
            DeskCommand::Save => "save                write the shared list file",
            DeskCommand::Snapshot => "snapshot            write a timestamped copy",
            DeskCommand::Load => "load <path>         replace the list from a file",
            DeskCommand::Send => "send [chat_id]      send the summary to a chat",
            DeskCommand::Config => "config [KEY value]  show or change settings",
            DeskCommand::Help => "help                show this text",
        }
    }
}

/// A positive unit count as typed by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(pub u32);

impl Quantity {
    pub fn try_from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let n: u32 = trimmed
            .parse()
            .map_err(|_| Error::Parse(format!("Invalid quantity: '{trimmed}'.")))?;
        if n == 0 {
            return Err(Error::Parse("Quantity must be at least 1.".into()));
        }
        Ok(Quantity(n))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-unit price in shekels. Accepts `4.5`, `4,5` and a trailing `₪`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price(pub f64);

impl Price {
    pub fn try_from_str(s: &str) -> Result<Self> {
        let cleaned = s.trim().trim_end_matches('₪').trim().replace(',', ".");
        let value: f64 = cleaned
            .parse()
            .map_err(|_| Error::Parse(format!("Invalid price: '{}'.", s.trim())))?;
        if !value.is_finite() || value < 0.0 {
            return Err(Error::Parse(format!(
                "Price must be a non-negative number, got '{}'.",
                s.trim()
            )));
        }
        Ok(Price(value))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} ₪", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s.trim()) {
            Ok(fmt) => Ok(Bool(fmt.to_bool())),
            Err(_) => Err(Error::Parse(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", serialize = "yes", to_string = "True")]
    TextTrue,

    #[strum(serialize = "false", serialize = "no", to_string = "False")]
    TextFalse,
}

impl BoolFormat {
    #[inline]
    fn to_bool(self) -> bool {
        matches!(self, BoolFormat::TextTrue)
    }
}
