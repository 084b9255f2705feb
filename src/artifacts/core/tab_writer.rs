//! Column-aligning writer
//!
//! Accepts tab-delimited text through `std::io::Write` and holds it until `flush`, where every
//! tab-terminated cell is padded to the width of its column. Text after the last tab of a line
//! is written as is. Widths are display widths: ANSI escapes count for nothing and wide
//! characters count double.

use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Cells are right-aligned, with one space of padding and no minimum width.
const PADDING: usize = 1;

pub struct TabWriter<W: Write> {
    inner: W,
    buffer: Vec<u8>,
}

impl<W: Write> TabWriter<W> {
    pub fn new(inner: W) -> Self {
        TabWriter {
            inner,
            buffer: Vec::new(),
        }
    }

    fn column_widths(lines: &[Vec<&str>]) -> Vec<usize> {
        let mut widths = Vec::<usize>::new();

        for cells in lines {
            // the last segment is not terminated by a tab, so it is not a column cell
            let terminated = cells.len().saturating_sub(1);
            for (column, cell) in cells[..terminated].iter().enumerate() {
                let width = display_width(cell) + PADDING;
                match widths.get_mut(column) {
                    Some(current) => *current = (*current).max(width),
                    None => widths.push(width),
                }
            }
        }

        widths
    }

    fn format_buffer(&mut self) -> String {
        let bytes = std::mem::take(&mut self.buffer);
        let text = String::from_utf8_lossy(&bytes);
        let ends_with_newline = text.ends_with('\n');

        let lines = text
            .split_terminator('\n')
            .map(|line| line.split('\t').collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let widths = Self::column_widths(&lines);

        let mut out = String::with_capacity(text.len());
        for (index, cells) in lines.iter().enumerate() {
            let terminated = cells.len().saturating_sub(1);
            for (column, cell) in cells[..terminated].iter().enumerate() {
                let missing = widths[column].saturating_sub(display_width(cell));
                out.extend(std::iter::repeat_n(' ', missing));
                out.push_str(cell);
            }
            if let Some(trailing) = cells.last() {
                out.push_str(trailing);
            }
            if index + 1 < lines.len() || ends_with_newline {
                out.push('\n');
            }
        }

        out
    }
}

fn display_width(cell: &str) -> usize {
    if cell.contains('\x1b') {
        strip_ansi_escapes::strip_str(cell).width()
    } else {
        cell.width()
    }
}

impl<W: Write> Write for TabWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buffer.is_empty() {
            let aligned = self.format_buffer();
            self.inner.write_all(aligned.as_bytes())?;
        }
        self.inner.flush()
    }
}
