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
//! PNG presenter: waveform with the detected onsets marked.

use crate::report::{AnalysisReport, Presenter};
use crate::signal::Signal;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Longest line series the chart draws at full resolution. Longer signals
/// are decimated for drawing only; the analysis itself never decimates.
const MAX_DRAWN_POINTS: usize = 100_000;

/// The waveform plot could not be rendered or written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to render the waveform plot: {0}")]
pub struct PlotError(String);

/// Presenter that renders the prepared signal as a PNG time-series plot
/// with every detected onset marked on the waveform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotPresenter {
    path: PathBuf,
    width: u32,
    height: u32,
}

impl PlotPresenter {
    /// Creates a presenter that writes a PNG to the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            width: 1200,
            height: 400,
        }
    }

    /// Overrides the default resolution of 1200x400 pixels.
    #[must_use]
    pub const fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl Presenter for PlotPresenter {
    type Error = PlotError;

    fn present(&mut self, signal: &Signal, report: &AnalysisReport) -> Result<(), PlotError> {
        render(&self.path, self.width, self.height, signal, report)
            .map_err(|error| PlotError(error.to_string()))
    }
}

fn render(
    path: &Path,
    width: u32,
    height: u32,
    signal: &Signal,
    report: &AnalysisReport,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    let duration_secs = signal.duration_secs();
    // An empty chart still needs a non-empty axis range.
    let x_max = if duration_secs > 0.0 { duration_secs } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption("Heartbeat Detection", ("sans-serif", 24))
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0_f32..x_max, -1.05_f32..1.05_f32)?;
    chart
        .configure_mesh()
        .x_desc("Time (seconds)")
        .y_desc("Amplitude")
        .draw()?;

    let step = signal.len().div_ceil(MAX_DRAWN_POINTS).max(1);
    if step > 1 {
        log::debug!("decimating waveform for drawing: every {step}th sample");
    }
    let time_per_sample = 1.0 / signal.sample_rate_hz() as f32;
    chart
        .draw_series(LineSeries::new(
            signal
                .data()
                .iter()
                .enumerate()
                .step_by(step)
                .map(|(index, &value)| (index as f32 * time_per_sample, value)),
            &BLUE,
        ))?
        .label("Heartbeat Signal")
        .legend(|(x, y)| PathElement::new([(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(report.onsets().iter().map(|onset| {
            Circle::new(
                (onset.timestamp.as_secs_f32(), onset.value),
                3,
                RED.filled(),
            )
        }))?
        .label("Detected Beats")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, RED.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio_input::AudioInput;
    use crate::beat_detector::DetectorConfig;
    use crate::report::analyze;
    use crate::test_utils;
    use assert2::check;
    use std::fs;

    #[test]
    fn renders_overlay_png() {
        let dir = test_utils::target_dir_test_artifacts();
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("waveform_overlay.png");

        let samples = test_utils::samples::pulse_train(12, 100);
        let (signal, report) =
            analyze(AudioInput::Mono(&samples), 100, DetectorConfig::default()).unwrap();
        check!(report.metrics().total_beats() == 12);

        PlotPresenter::new(&path).present(&signal, &report).unwrap();

        let metadata = fs::metadata(&path).unwrap();
        check!(metadata.len() > 0);
    }

    #[test]
    fn renders_even_an_empty_signal() {
        let dir = test_utils::target_dir_test_artifacts();
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("waveform_overlay_empty.png");

        let (signal, report) =
            analyze(AudioInput::Mono(&[]), 100, DetectorConfig::default()).unwrap();

        PlotPresenter::new(&path).present(&signal, &report).unwrap();
        check!(fs::metadata(&path).unwrap().len() > 0);
    }
}
