use crate::errors::{Error, Result};
use std::fmt;

/// Telegram rejects `callback_data` longer than this many bytes.
pub const CALLBACK_DATA_LIMIT: usize = 64;

/// What an inline button does when pressed.
///
/// Wire form is `<verb>:<args>`. Both names in `set` may contain `:`, so the
/// item carries its byte length: `set:<len>:<item>:<category>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackAction {
    ShowCategory(String),
    PickItem(String),
    SetCategory { item: String, category: String },
    NewCategory(String),
    DropCategory(String),
    ConfirmAdd { item: String, quantity: u32 },
    CancelAdd,
}

impl CallbackAction {
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// `None` when the encoding does not fit a button.
    pub fn encode_checked(&self) -> Option<String> {
        let data = self.encode();
        (data.len() <= CALLBACK_DATA_LIMIT).then_some(data)
    }

    pub fn decode(data: &str) -> Result<Self> {
        if data == "cancel" {
            return Ok(Self::CancelAdd);
        }
        let (verb, rest) = data
            .split_once(':')
            .ok_or_else(|| Error::parse(format!("Malformed callback data '{data}'.")))?;
        if rest.is_empty() {
            return Err(Error::parse(format!("Callback '{verb}' has no argument.")));
        }

        match verb {
            "show" => Ok(Self::ShowCategory(rest.to_string())),
            "pick" => Ok(Self::PickItem(rest.to_string())),
            "new" => Ok(Self::NewCategory(rest.to_string())),
            "drop" => Ok(Self::DropCategory(rest.to_string())),
            "set" => {
                let (item, category) = split_sized(rest)
                    .filter(|(item, category)| !item.is_empty() && !category.is_empty())
                    .ok_or_else(|| Error::parse(format!("Malformed set callback '{data}'.")))?;
                Ok(Self::SetCategory {
                    item: item.to_string(),
                    category: category.to_string(),
                })
            }
            "add" => {
                let (quantity, item) = rest
                    .split_once(':')
                    .filter(|(_, item)| !item.is_empty())
                    .ok_or_else(|| Error::parse(format!("Malformed add callback '{data}'.")))?;
                let quantity = quantity
                    .parse::<u32>()
                    .ok()
                    .filter(|q| *q > 0)
                    .ok_or_else(|| Error::parse(format!("Bad quantity in '{data}'.")))?;
                Ok(Self::ConfirmAdd {
                    item: item.to_string(),
                    quantity,
                })
            }
            other => Err(Error::parse(format!("Unknown callback verb '{other}'."))),
        }
    }
}

/// Splits `<len>:<head>:<tail>` where `head` is exactly `len` bytes.
fn split_sized(raw: &str) -> Option<(&str, &str)> {
    let (len, body) = raw.split_once(':')?;
    let len = len.parse::<usize>().ok()?;
    let head = body.get(..len)?;
    let tail = body.get(len..)?.strip_prefix(':')?;
    Some((head, tail))
}

impl fmt::Display for CallbackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShowCategory(category) => write!(f, "show:{category}"),
            Self::PickItem(item) => write!(f, "pick:{item}"),
            Self::SetCategory { item, category } => {
                write!(f, "set:{}:{item}:{category}", item.len())
            }
            Self::NewCategory(item) => write!(f, "new:{item}"),
            Self::DropCategory(item) => write!(f, "drop:{item}"),
            Self::ConfirmAdd { item, quantity } => write!(f, "add:{quantity}:{item}"),
            Self::CancelAdd => f.write_str("cancel"),
        }
    }
}
