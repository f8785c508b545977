//! Plain text output formatter

use super::{ReportFormatter, ReportRow};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - aligned columns, one row per measurement
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportFormatter for TextFormatter<W> {
    fn begin(&mut self, algorithm: &str) -> Result<()> {
        writeln!(self.writer, "# {algorithm}")?;
        writeln!(self.writer, "{:>10}  {:<8}  {}", "size", "case", "value")?;
        Ok(())
    }

    fn record(&mut self, row: &ReportRow) -> Result<()> {
        writeln!(
            self.writer,
            "{:>10}  {:<8}  {}",
            row.size,
            row.category.to_string(),
            row.value_cell()
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
