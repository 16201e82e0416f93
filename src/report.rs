use serde::Serialize;
use std::io::Write;
use std::time::Duration;

use crate::Result;

/// The data sent during a report event.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportData {
    /// The number of equations emitted.
    pub equations: usize,
    /// The number of unique states expanded.
    pub unique_states: usize,
    /// Maximum depth of the exploration stack.
    pub max_depth: usize,
    /// The average number of terms per equation.
    pub average_out_degree: f64,
    /// Time spent expanding states.
    pub duration: Duration,
}

/// A reporter for emission statistics.
pub trait Reporter {
    /// Report the statistics of a finished emission.
    fn report_emission(&mut self, data: &ReportData) -> Result<()>;
}

/// Writes a human readable summary line.
pub struct WriteReporter<'a, W> {
    writer: &'a mut W,
}

impl<'a, W> WriteReporter<'a, W> {
    pub fn new(writer: &'a mut W) -> Self {
        Self { writer }
    }
}

impl<'a, W: Write> Reporter for WriteReporter<'a, W> {
    fn report_emission(&mut self, data: &ReportData) -> Result<()> {
        writeln!(
            self.writer,
            "Done. equations={}, unique={}, depth={}, avg out degree={:.3}, ms={}",
            data.equations,
            data.unique_states,
            data.max_depth,
            data.average_out_degree,
            data.duration.as_millis(),
        )?;
        Ok(())
    }
}

/// Writes each report as a single-line JSON object.
pub struct JsonReporter<'a, W> {
    writer: &'a mut W,
}

impl<'a, W> JsonReporter<'a, W> {
    pub fn new(writer: &'a mut W) -> Self {
        Self { writer }
    }
}

impl<'a, W: Write> Reporter for JsonReporter<'a, W> {
    fn report_emission(&mut self, data: &ReportData) -> Result<()> {
        serde_json::to_writer(&mut *self.writer, data)?;
        writeln!(self.writer)?;
        Ok(())
    }
}
