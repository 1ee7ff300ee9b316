use crate::core::types::RunMode;
use crate::extensions::enums::parse_variant;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub mode: RunMode,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl CliArgs {
    pub fn from_env() -> Result<Self, String> {
        Self::from_args(std::env::args().skip(1))
    }

    /// `[desk|bot] [--config PATH] [--logs DIR]`
    pub fn from_args<I>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = String>,
    {
        let mut parsed = Self::defaults();
        let mut mode_seen = false;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    parsed.config_path = Self::next_path(&mut args, "--config")?;
                }
                "--logs" => {
                    parsed.logs_dir = Self::next_path(&mut args, "--logs")?;
                }
                flag if flag.starts_with("--") => {
                    return Err(format!("Unknown argument: {arg}"));
                }
                word if !mode_seen => {
                    parsed.mode = parse_variant(word, "mode")?;
                    mode_seen = true;
                }
                _ => return Err(format!("Unknown argument: {arg}")),
            }
        }
        Ok(parsed)
    }

    fn next_path<I>(args: &mut I, flag: &str) -> Result<PathBuf, String>
    where
        I: Iterator<Item = String>,
    {
        args.next()
            .map(PathBuf::from)
            .ok_or_else(|| format!("Missing value for {flag}"))
    }

    fn defaults() -> Self {
        Self {
            mode: RunMode::Desk,
            config_path: PathBuf::from("config.json"),
            logs_dir: PathBuf::from("logs"),
        }
    }
}
