// VT100 control sequences for the desk console.

/// ESC as a byte, for scanning rendered text.
pub const ESC_BYTE: u8 = 0x1B;

#[macro_export]
macro_rules! csi {
    ($($part:literal),+) => {
        concat!($("\x1B[", $part),+)
    };
}

pub const CLEAR_SCREEN: &str = crate::csi!("2J");
pub const CURSOR_HOME: &str = crate::csi!("H");
pub const CLEAR_LINE_REST: &str = crate::csi!("0K");
pub const CURSOR_UP_ONE: &str = crate::csi!("1A");
pub const HIDE_CURSOR: &str = crate::csi!("?25l");
pub const SHOW_CURSOR: &str = crate::csi!("?25h");
pub const CURSOR_BLINKING_BLOCK: &str = crate::csi!("1 q");

pub const STYLE_RESET: &str = crate::csi!("0m");
pub const STYLE_BOLD: &str = crate::csi!("1m");
pub const STYLE_ITALIC: &str = crate::csi!("3m");
pub const FG_LIGHT_GRAY: &str = crate::csi!("37m");
pub const FG_GREEN: &str = crate::csi!("32m");
/// White on dark gray, used for the input line.
pub const PROMPT_STYLE: &str = crate::csi!("38;5;15m", "48;5;236m");
