use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

const COLUMN_SEPARATOR: &str = " | ";

/// A titled grid of cells with an optional empty-state message and footer.
#[derive(Debug, Clone, Default)]
pub struct Table<'a> {
    pub title: &'a str,
    pub headers: &'a [&'a str],
    pub rows: Vec<Vec<String>>,
    pub empty_message: Option<&'a str>,
    pub footer: Option<String>,
    pub min_width: usize,
}

impl<'a> Table<'a> {
    pub fn new(title: &'a str, headers: &'a [&'a str], rows: Vec<Vec<String>>) -> Self {
        Self {
            title,
            headers,
            rows,
            ..Self::default()
        }
    }

    pub fn empty_message(mut self, message: &'a str) -> Self {
        self.empty_message = Some(message);
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn min_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct TablePrinter {
    util: WidthUtil,
    left_pad: usize,
}

impl TablePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy that indents every line by `pad` spaces.
    pub fn with_left_pad(&self, pad: usize) -> Self {
        Self {
            left_pad: pad,
            ..self.clone()
        }
    }

    fn column_widths(&self, table: &Table<'_>) -> Vec<usize> {
        let mut widths: Vec<usize> = table
            .headers
            .iter()
            .map(|h| self.util.visible_width(h))
            .collect();
        for row in &table.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(self.util.visible_width(cell));
            }
        }
        widths
    }

    /// Width of the widest line the table will print.
    pub fn table_width(&self, table: &Table<'_>) -> usize {
        let widths = self.column_widths(table);
        let grid = widths.iter().sum::<usize>()
            + widths.len().saturating_sub(1) * COLUMN_SEPARATOR.len();
        let mut width = grid
            .max(table.min_width)
            .max(self.util.visible_width(table.title));
        if table.rows.is_empty() {
            if let Some(message) = table.empty_message {
                width = width.max(self.util.visible_width(message));
            }
        }
        if let Some(footer) = &table.footer {
            width = width.max(self.util.visible_width(footer));
        }
        width
    }

    pub fn print(&self, table: &Table<'_>) {
        let _ = self.render(table, &mut io::stdout());
    }

    pub fn render<W: Write + ?Sized>(&self, table: &Table<'_>, out: &mut W) -> io::Result<()> {
        let width = self.table_width(table);
        self.rule(out, width)?;
        self.line(out, &table.title.to_uppercase())?;
        self.rule(out, width)?;

        if table.rows.is_empty() {
            if let Some(message) = table.empty_message {
                self.line(out, message)?;
                return self.rule(out, width);
            }
        }

        let widths = self.column_widths(table);
        let header: Vec<String> = table.headers.iter().map(|h| h.to_string()).collect();
        self.line(out, &self.join_cells(&header, &widths))?;
        self.rule(out, width)?;
        for row in &table.rows {
            self.line(out, &self.join_cells(row, &widths))?;
        }
        self.rule(out, width)?;

        if let Some(footer) = &table.footer {
            self.line(out, footer)?;
            self.rule(out, width)?;
        }
        Ok(())
    }

    fn join_cells(&self, cells: &[String], widths: &[usize]) -> String {
        let last = widths.len().saturating_sub(1);
        cells
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, width))| {
                if i == last {
                    cell.clone()
                } else {
                    self.util.pad_visible(cell, *width)
                }
            })
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR)
    }

    fn line<W: Write + ?Sized>(&self, out: &mut W, text: &str) -> io::Result<()> {
        writeln!(out, "{}{text}", " ".repeat(self.left_pad))
    }

    fn rule<W: Write + ?Sized>(&self, out: &mut W, width: usize) -> io::Result<()> {
        self.line(out, &"-".repeat(width.max(1)))
    }
}
