use crate::errors::Result;
use crate::prompter::models::{Flow, FlowCtrl};
use crate::ui::ansi::{CURSOR_BLINKING_BLOCK, HIDE_CURSOR, SHOW_CURSOR, STYLE_RESET};
use std::io::{self, BufRead, IsTerminal, Write};

/// Drives a [`Flow`]: render, read one line, hand it over, repeat.
#[derive(Debug, Clone)]
pub struct Prompter {
    styled: bool,
}

impl Default for Prompter {
    fn default() -> Self {
        Self {
            styled: io::stdout().is_terminal(),
        }
    }
}

impl Prompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// No cursor control codes, for piped output.
    pub fn plain() -> Self {
        Self { styled: false }
    }

    fn control(&self, seq: &str) {
        if self.styled {
            print!("{seq}");
            let _ = io::stdout().flush();
        }
    }

    pub fn run<F: Flow>(&self, flow: F) -> Result<()> {
        self.run_with_reader(flow, io::stdin().lock())
    }

    /// Stops on EOF, on a bare `exit` the flow does not capture, or when the
    /// flow finishes.
    pub fn run_with_reader<F: Flow, R: BufRead>(&self, mut flow: F, mut reader: R) -> Result<()> {
        loop {
            self.control(HIDE_CURSOR);
            flow.render()?;
            self.control(&format!("{SHOW_CURSOR}{CURSOR_BLINKING_BLOCK}"));

            let mut line = String::new();
            if reader.read_line(&mut line)? == 0 {
                self.control(STYLE_RESET);
                return Ok(());
            }
            self.control(STYLE_RESET);
            let line = line.trim();
            if line.eq_ignore_ascii_case("exit") && !flow.captures_exit() {
                return Ok(());
            }

            match flow.handle_input(line)? {
                FlowCtrl::Continue => {}
                FlowCtrl::Finish | FlowCtrl::Abort => return Ok(()),
            }
        }
    }
}
