use crate::ui::ansi::{
    CLEAR_LINE_REST, CLEAR_SCREEN, CURSOR_HOME, CURSOR_UP_ONE, FG_GREEN, FG_LIGHT_GRAY,
    PROMPT_STYLE, STYLE_BOLD, STYLE_ITALIC, STYLE_RESET,
};
use crate::ui::width_util::WidthUtil;
use std::io::{self, IsTerminal, Write};

const BANNER_WIDTH: usize = 50;

/// Banner, prompt line and centered messages for the desk console. Styling
/// is dropped when stdout is not a terminal.
#[derive(Debug, Clone)]
pub struct UiChrome {
    util: WidthUtil,
    styled: bool,
}

impl Default for UiChrome {
    fn default() -> Self {
        Self {
            util: WidthUtil,
            styled: io::stdout().is_terminal(),
        }
    }
}

impl UiChrome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn banner_lines(&self) -> Vec<String> {
        let version = env!("CARGO_PKG_VERSION");
        let title = format!(
            "{STYLE_BOLD}S H O P L I S T{STYLE_RESET} {FG_LIGHT_GRAY}(v{version}){STYLE_RESET}"
        );
        let subtitle = format!("{STYLE_ITALIC}One list for the whole household{STYLE_RESET}");
        let blank = " ".repeat(BANNER_WIDTH);
        let edge = "─".repeat(BANNER_WIDTH);
        vec![
            format!("╭{edge}╮"),
            format!("│{blank}│"),
            format!("│{}│", self.center(&title, BANNER_WIDTH)),
            format!("│{}│", self.center(&subtitle, BANNER_WIDTH)),
            format!("│{blank}│"),
            format!("╰{edge}╯"),
        ]
    }

    pub fn print_banner(&self) {
        if !self.styled {
            return self.print_banner_plain();
        }
        for line in self.banner_lines() {
            self.println_centered(&line, BANNER_WIDTH + 2);
        }
    }

    pub fn print_banner_plain(&self) {
        for line in self.banner_lines() {
            println!("{}", WidthUtil::strip_ansi(&line));
        }
    }

    pub fn clear_screen(&self) {
        if self.styled {
            print!("{CLEAR_SCREEN}{CURSOR_HOME}");
            let _ = io::stdout().flush();
        }
    }

    pub fn success(&self, message: &str) {
        if self.styled {
            println!("{FG_GREEN}{message}{STYLE_RESET}");
        } else {
            println!("{message}");
        }
    }

    /// Shaded input line; the cursor is left right after `prompt`.
    pub fn print_prompt(&self, prompt: &str) {
        if !self.styled {
            print!("{prompt}");
            let _ = io::stdout().flush();
            return;
        }
        print!("{PROMPT_STYLE}{CLEAR_LINE_REST}{STYLE_RESET}\n");
        print!("{PROMPT_STYLE}{prompt}{CLEAR_LINE_REST}{STYLE_RESET}\n");
        print!("{PROMPT_STYLE}{CLEAR_LINE_REST}{STYLE_RESET}");
        let column = self.util.visible_width(prompt) + 1;
        print!("{CURSOR_UP_ONE}\x1B[{column}G{PROMPT_STYLE}");
        let _ = io::stdout().flush();
    }

    /// Closes the shaded block after the user pressed enter.
    pub fn end_prompt(&self) {
        if !self.styled {
            return;
        }
        print!("{PROMPT_STYLE}{CLEAR_LINE_REST}{STYLE_RESET}\n\n");
        let _ = io::stdout().flush();
    }

    pub fn format_centered_line(&self, s: &str, box_width: usize) -> String {
        let left = self.util.center_pad(box_width);
        let inner = box_width.saturating_sub(self.util.visible_width(s)) / 2;
        format!("{}{s}", " ".repeat(left + inner))
    }

    pub fn println_centered(&self, s: &str, box_width: usize) {
        println!("{}", self.format_centered_line(s, box_width));
    }

    fn center(&self, content: &str, width: usize) -> String {
        let content_width = self.util.visible_width(content);
        if content_width >= width {
            return content.to_string();
        }
        let left = (width - content_width) / 2;
        let right = width - content_width - left;
        format!("{}{content}{}", " ".repeat(left), " ".repeat(right))
    }
}
