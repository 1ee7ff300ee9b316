use std::str::FromStr;

use strum::IntoEnumIterator;

trait EnumValidCsv: IntoEnumIterator + AsRef<str> + Sized {
    fn valid_csv() -> String {
        Self::iter()
            .map(|v| v.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
impl<T> EnumValidCsv for T where T: IntoEnumIterator + AsRef<str> + Sized {}

pub fn valid_csv<T>() -> String
where
    T: IntoEnumIterator + AsRef<str> + Sized,
{
    <T as EnumValidCsv>::valid_csv()
}

/// Parse a strum enum, describing the valid spellings when it fails.
pub fn parse_variant<T>(raw: &str, what: &str) -> Result<T, String>
where
    T: FromStr + IntoEnumIterator + AsRef<str>,
{
    let trimmed = raw.trim();
    T::from_str(trimmed)
        .map_err(|_| format!("Unsupported {what}: '{trimmed}'. Valid values: {}", valid_csv::<T>()))
}
