pub trait NormalizeWhitespace {
    /// Trims and collapses every whitespace run into a single space.
    fn normalize_whitespace(&self) -> String;
}

impl NormalizeWhitespace for str {
    fn normalize_whitespace(&self) -> String {
        self.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl NormalizeWhitespace for String {
    fn normalize_whitespace(&self) -> String {
        self.as_str().normalize_whitespace()
    }
}

/// Characters that open an entity in Telegram's legacy Markdown mode.
const MARKDOWN_SPECIALS: [char; 4] = ['_', '*', '`', '['];

pub trait EscapeMarkdown {
    fn escape_markdown(&self) -> String;
}

impl EscapeMarkdown for str {
    fn escape_markdown(&self) -> String {
        let mut out = String::with_capacity(self.len());
        for ch in self.chars() {
            if MARKDOWN_SPECIALS.contains(&ch) {
                out.push('\\');
            }
            out.push(ch);
        }
        out
    }
}

/// Splits a console line into words, keeping double-quoted runs together.
/// An unterminated quote swallows the rest of the line.
pub fn split_args(line: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut had_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                had_quotes = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() || had_quotes {
                    out.push(std::mem::take(&mut current));
                }
                had_quotes = false;
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() || had_quotes {
        out.push(current);
    }
    out
}
