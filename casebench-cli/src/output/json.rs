//! JSON output formatter

use super::{ReportFormatter, ReportRow};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs rows as a pretty-printed JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    rows: Vec<ReportRow>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows: Vec::new(),
        }
    }
}

impl<W: Write> ReportFormatter for JsonFormatter<W> {
    fn begin(&mut self, _algorithm: &str) -> Result<()> {
        Ok(())
    }

    fn record(&mut self, row: &ReportRow) -> Result<()> {
        self.rows.push(row.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.rows)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
