/*
MIT License

Copyright (c) 2025 Philipp Schuster

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/
//! Plain-text presenter for terminals and log files.

use crate::report::{AnalysisReport, Presenter};
use crate::signal::Signal;
use std::io::{self, Write};

/// Presenter that writes the report as plain-text lines.
///
/// Durations and rates are printed with two decimal places, the windowed
/// counts as a plain integer list.
#[derive(Debug)]
pub struct ConsolePresenter<W: Write> {
    out: W,
}

impl ConsolePresenter<io::Stdout> {
    /// Creates a presenter that writes to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsolePresenter<W> {
    /// Creates a presenter writing to the given sink.
    pub const fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    type Error = io::Error;

    fn present(&mut self, _signal: &Signal, report: &AnalysisReport) -> io::Result<()> {
        let metrics = report.metrics();
        writeln!(self.out, "Total Beats: {}", metrics.total_beats())?;
        writeln!(self.out, "Duration (sec): {:.2}", metrics.duration_secs())?;
        writeln!(
            self.out,
            "Beats per Minute (BPM): {:.2}",
            metrics.beats_per_minute()
        )?;
        writeln!(
            self.out,
            "Beats per 10 seconds: {:?}",
            metrics.windowed_counts()
        )?;
        Ok(())
    }
}
