use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

const COLUMN_GAP: &str = " | ";

/// Everything one rendered table needs besides the writer.
#[derive(Debug, Clone)]
pub struct Table<'a, H: AsRef<str>, T: AsRef<str>> {
    pub title: &'a str,
    pub headers: &'a [H],
    pub rows: &'a [Vec<T>],
    /// Printed instead of the header and rows when there are no rows.
    pub empty_message: Option<&'a str>,
    pub min_width: usize,
}

impl<'a, H: AsRef<str>, T: AsRef<str>> Table<'a, H, T> {
    pub fn new(title: &'a str, headers: &'a [H], rows: &'a [Vec<T>]) -> Self {
        Self {
            title,
            headers,
            rows,
            empty_message: None,
            min_width: 0,
        }
    }

    pub fn empty_message(mut self, msg: &'a str) -> Self {
        self.empty_message = Some(msg);
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

    /// A copy that indents every printed line by `pad` spaces.
    pub fn with_left_pad(&self, pad: usize) -> Self {
        let mut c = self.clone();
        c.left_pad = pad;
        c
    }

    fn write_indented<W: Write + ?Sized>(&self, out: &mut W, s: &str) -> io::Result<()> {
        if self.left_pad > 0 {
            write!(out, "{}", " ".repeat(self.left_pad))?;
        }
        writeln!(out, "{s}")
    }

    fn write_rule<W: Write + ?Sized>(&self, out: &mut W, ch: char, width: usize) -> io::Result<()> {
        self.write_indented(out, &ch.to_string().repeat(width.max(1)))
    }

    /// Title between two `=` rules, used as a document heading.
    pub fn render_banner<W: Write + ?Sized>(
        &self,
        title: &str,
        width: usize,
        out: &mut W,
    ) -> io::Result<()> {
        let w = width.max(self.util.visible_width(title));
        self.write_rule(out, '=', w)?;
        self.write_indented(out, &title.to_uppercase())?;
        self.write_rule(out, '=', w)
    }

    pub fn table_width<H: AsRef<str>, T: AsRef<str>>(&self, table: &Table<'_, H, T>) -> usize {
        let widths = self.column_widths(table.headers, table.rows);
        self.natural_width(&widths)
            .max(table.min_width)
            .max(self.util.visible_width(table.title))
    }

    pub fn render<H: AsRef<str>, T: AsRef<str>, W: Write + ?Sized>(
        &self,
        table: &Table<'_, H, T>,
        out: &mut W,
    ) -> io::Result<()> {
        let widths = self.column_widths(table.headers, table.rows);
        let mut total = self.table_width(table);

        if table.rows.is_empty() {
            if let Some(msg) = table.empty_message {
                total = total.max(self.util.visible_width(msg));
                self.write_title(out, table.title, total)?;
                self.write_indented(out, msg)?;
                return self.write_rule(out, '-', total);
            }
        }

        self.write_title(out, table.title, total)?;
        if !table.headers.is_empty() {
            self.write_indented(out, &self.join_cells(table.headers, &widths))?;
            self.write_rule(out, '-', total)?;
        }
        for row in table.rows {
            self.write_indented(out, &self.join_cells(row, &widths))?;
        }
        self.write_rule(out, '-', total)
    }

    fn write_title<W: Write + ?Sized>(&self, out: &mut W, title: &str, width: usize) -> io::Result<()> {
        self.write_rule(out, '-', width)?;
        self.write_indented(out, title)?;
        self.write_rule(out, '-', width)
    }

    fn column_widths<H: AsRef<str>, T: AsRef<str>>(&self, headers: &[H], rows: &[Vec<T>]) -> Vec<usize> {
        let mut widths: Vec<usize> = headers
            .iter()
            .map(|h| self.util.visible_width(h.as_ref()))
            .collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                let w = self.util.visible_width(cell.as_ref());
                match widths.get_mut(i) {
                    Some(slot) => *slot = (*slot).max(w),
                    None => widths.push(w),
                }
            }
        }
        widths
    }

    fn natural_width(&self, widths: &[usize]) -> usize {
        if widths.is_empty() {
            return 0;
        }
        widths.iter().sum::<usize>() + (widths.len() - 1) * COLUMN_GAP.len()
    }

    fn join_cells<C: AsRef<str>>(&self, cells: &[C], widths: &[usize]) -> String {
        let line = cells
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let w = widths.get(i).copied().unwrap_or(0);
                self.util.pad_visible(c.as_ref(), w)
            })
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        line.trim_end().to_string()
    }
}
