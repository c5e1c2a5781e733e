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
//! Module for [`AnalysisReport`], the [`Presenter`] contract, and the
//! [`analyze`] pipeline entry point.

use crate::audio_input::{AudioInput, InputError};
use crate::beat_detector::{BeatDetector, DetectorConfig, InvalidConfigError};
use crate::metrics::BeatMetrics;
use crate::signal::{SampleInfo, Signal};
use alloc::vec::Vec;
use thiserror::Error;

/// Errors of the [`analyze`] pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AnalysisError {
    /// The raw audio input violates the `(samples, sample rate)` contract.
    #[error(transparent)]
    Input(#[from] InputError),
    /// The detector configuration violates the threshold invariant.
    #[error(transparent)]
    Config(#[from] InvalidConfigError),
}

/// The complete result payload of one analysis run.
///
/// Next to the [`BeatMetrics`], the report carries the detected onsets
/// themselves. Each onset is a [`SampleInfo`], so its timestamp and the
/// amplitude value at the onset stay paired for overlay plotting.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    metrics: BeatMetrics,
    onsets: Vec<SampleInfo>,
}

impl AnalysisReport {
    /// Getter for the summary and windowed statistics.
    pub const fn metrics(&self) -> &BeatMetrics {
        &self.metrics
    }

    /// The detected onsets, in strictly increasing index order.
    pub fn onsets(&self) -> &[SampleInfo] {
        &self.onsets
    }
}

/// Presentation capability that consumes a finished analysis.
///
/// The analytical core never formats or renders anything itself; it hands
/// the prepared signal and the report to an injected implementation of this
/// trait. This keeps the core free of I/O side effects and independently
/// testable.
pub trait Presenter {
    /// Error the presentation backend can fail with.
    type Error;

    /// Presents the report for the given signal.
    fn present(&mut self, signal: &Signal, report: &AnalysisReport) -> Result<(), Self::Error>;
}

/// Runs the full pipeline on raw audio input: signal preparation, onset
/// scan, and metric aggregation.
///
/// The configuration is validated before anything else happens. Returns the
/// prepared signal together with the report so that presenters can overlay
/// the onsets onto the waveform.
///
/// ```rust
/// use heartbeat_detector::{analyze, AudioInput, DetectorConfig};
///
/// let samples = [0.0, 0.5, 0.05, 0.0, 0.5, 0.05];
/// let (signal, report) = analyze(
///     AudioInput::Mono(&samples),
///     1,
///     DetectorConfig::default(),
/// )
/// .unwrap();
/// assert_eq!(report.metrics().total_beats(), 2);
/// assert_eq!(signal.len(), 6);
/// ```
pub fn analyze(
    input: AudioInput,
    sample_rate_hz: u32,
    config: DetectorConfig,
) -> Result<(Signal, AnalysisReport), AnalysisError> {
    let detector = BeatDetector::new(config)?;
    let signal = Signal::prepare(input, sample_rate_hz)?;
    let report = analyze_signal(&signal, &detector);
    Ok((signal, report))
}

/// Runs onset scan and metric aggregation on an already prepared signal.
pub fn analyze_signal(signal: &Signal, detector: &BeatDetector) -> AnalysisReport {
    let onsets = detector.detect_onsets(signal);
    log::debug!(
        "found {} onset(s) in {} samples",
        onsets.len(),
        signal.len()
    );
    let metrics = BeatMetrics::compute(signal, &onsets);
    AnalysisReport { metrics, onsets }
}
