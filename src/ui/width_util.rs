use crate::ui::ansi::ESC_BYTE;
use terminal_size::{Width, terminal_size};

const FALLBACK_TERMINAL_WIDTH: usize = 80;

/// Column math that ignores ANSI styling.
#[derive(Debug, Default, Clone)]
pub struct WidthUtil;

impl WidthUtil {
    /// Drops `ESC [ ... <letter>` sequences; everything else is kept.
    pub(crate) fn strip_ansi(s: &str) -> String {
        if !s.as_bytes().contains(&ESC_BYTE) {
            return s.to_string();
        }
        let mut out = String::with_capacity(s.len());
        let mut chars = s.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch as u32 == u32::from(ESC_BYTE) && chars.peek() == Some(&'[') {
                chars.next();
                for next in chars.by_ref() {
                    if next.is_ascii_alphabetic() {
                        break;
                    }
                }
                continue;
            }
            out.push(ch);
        }
        out
    }

    /// One column per `char`; Hebrew letters count as one each.
    pub fn visible_width(&self, s: &str) -> usize {
        Self::strip_ansi(s).chars().count()
    }

    pub fn pad_visible(&self, s: &str, width: usize) -> String {
        let missing = width.saturating_sub(self.visible_width(s));
        format!("{s}{}", " ".repeat(missing))
    }

    pub fn terminal_width(&self) -> usize {
        terminal_size()
            .map(|(Width(w), _)| w as usize)
            .unwrap_or(FALLBACK_TERMINAL_WIDTH)
    }

    /// Left padding that centers `content_width` columns in the terminal.
    pub fn center_pad(&self, content_width: usize) -> usize {
        self.terminal_width().saturating_sub(content_width) / 2
    }
}
