//! Markdown output formatter

use super::{ReportFormatter, ReportRow};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs rows as a pipe table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    row_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            row_count: 0,
        }
    }
}

impl<W: Write> ReportFormatter for MarkdownFormatter<W> {
    fn begin(&mut self, algorithm: &str) -> Result<()> {
        writeln!(self.writer, "## {algorithm}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| size | case | value |")?;
        writeln!(self.writer, "| ---: | :--- | ---: |")?;
        Ok(())
    }

    fn record(&mut self, row: &ReportRow) -> Result<()> {
        self.row_count += 1;
        writeln!(
            self.writer,
            "| {} | {} | {} |",
            row.size,
            row.category,
            row.value_cell()
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "*Total rows: {}*", self.row_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
