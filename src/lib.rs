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
//! # heartbeat-detector
//!
//! heartbeat-detector finds heartbeat pulses in recorded audio waveforms and
//! reports beat count, duration, average rate, and rate per fixed 10-second
//! window, optionally with a waveform overlay plot of the detected beats.
//!
//! The detection is a two-level comparator (Schmitt trigger): a beat onset is
//! recorded when the normalized signal strictly exceeds the high threshold,
//! and the comparator only re-arms once the signal drops strictly below the
//! low threshold. The gap between the two thresholds prevents re-triggering
//! on noise. There is no filtering or spectral analysis; the whole analysis
//! is one forward scan over the samples.
//!
//! ## Pipeline
//!
//! 1. **Preparation** ([`Signal::prepare`]): reduce multi-channel input to
//!    its first channel and normalize the peak amplitude to `1.0`.
//! 2. **Detection** ([`BeatDetector`]): scan for beat onsets.
//! 3. **Aggregation** ([`BeatMetrics`]): derive the summary and windowed
//!    statistics.
//! 4. **Presentation** ([`Presenter`]): hand the payload to an injected
//!    presentation backend. The analytical core performs no I/O itself.
//!
//! ## Example
//!
//! ```rust
//! use heartbeat_detector::{analyze, AudioInput, DetectorConfig};
//!
//! let samples = [0.0, 0.5, 0.05, 0.0, 0.5, 0.05];
//! let (signal, report) = analyze(
//!     AudioInput::Mono(&samples),
//!     1, // sample rate in Hz
//!     DetectorConfig::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(report.metrics().total_beats(), 2);
//! assert_eq!(report.metrics().beats_per_minute(), 20.0);
//! ```
//!
//! ## Cargo features
//!
//! The analytical core is `no_std`-compatible (it needs `alloc`). The
//! `std`-only collaborators are gated:
//!
//! - `wav`: WAV file loading via `hound` ([`wav::WavAudio`]).
//! - `plot`: PNG waveform overlay via `plotters` ([`plot::PlotPresenter`]).
//! - `cli`: the `wav-analyzer` binary (implies `wav` and `plot`).
//!
//! `wav` and `plot` are default features.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

mod audio_input;
mod beat_detector;
pub mod conversion;
mod metrics;
mod report;
mod signal;

#[cfg(feature = "std")]
pub mod console;
#[cfg(feature = "plot")]
pub mod plot;
#[cfg(feature = "wav")]
pub mod wav;

#[cfg(test)]
pub(crate) mod test_utils;

pub use audio_input::{AudioInput, FirstChannel, InputError};
pub use beat_detector::{
    BeatDetector, DetectorConfig, InvalidConfigError, OnsetIterator, DEFAULT_HIGH_THRESHOLD,
    DEFAULT_LOW_THRESHOLD,
};
pub use metrics::{BeatMetrics, WINDOW_DURATION};
pub use report::{analyze, analyze_signal, AnalysisError, AnalysisReport, Presenter};
pub use signal::{SampleInfo, Signal};
