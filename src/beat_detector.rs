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
//! Module for [`BeatDetector`].

use crate::signal::{SampleInfo, Signal};
use alloc::vec::Vec;
use thiserror::Error;

/// Default value for [`DetectorConfig::high_threshold`].
pub const DEFAULT_HIGH_THRESHOLD: f32 = 0.4;

/// Default value for [`DetectorConfig::low_threshold`].
pub const DEFAULT_LOW_THRESHOLD: f32 = 0.1;

/// The threshold pair of a [`DetectorConfig`] violates the invariant
/// `0.0 <= low_threshold < high_threshold <= 1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidConfigError {
    /// A threshold is NaN, infinite, or outside the amplitude range of a
    /// normalized signal.
    #[error("threshold {0} is not a finite value in range 0.0..=1.0")]
    ThresholdOutOfRange(f32),
    /// The high threshold does not strictly exceed the low threshold. A
    /// comparator with overlapping thresholds has no hysteresis band and
    /// would re-trigger on noise.
    #[error("high threshold {high} must strictly exceed low threshold {low}")]
    ThresholdOrder {
        /// The configured high threshold.
        high: f32,
        /// The configured low threshold.
        low: f32,
    },
}

/// Thresholds of the two-level comparator.
///
/// The detector switches from waiting to triggered when a sample strictly
/// exceeds [`Self::high_threshold`] and only re-arms once a sample drops
/// strictly below [`Self::low_threshold`]. The gap between the two levels is
/// the hysteresis band that swallows noise around a single threshold.
///
/// The thresholds refer to the amplitude of a prepared (peak-normalized)
/// [`Signal`], hence the valid range `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorConfig {
    /// Rising threshold: a sample strictly above this value triggers a beat.
    pub high_threshold: f32,
    /// Falling threshold: a sample strictly below this value re-arms the
    /// comparator.
    pub low_threshold: f32,
}

impl DetectorConfig {
    /// Checks the threshold invariant `0.0 <= low < high <= 1.0`.
    pub fn validate(&self) -> Result<(), InvalidConfigError> {
        for threshold in [self.high_threshold, self.low_threshold] {
            if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
                return Err(InvalidConfigError::ThresholdOutOfRange(threshold));
            }
        }
        if self.high_threshold <= self.low_threshold {
            return Err(InvalidConfigError::ThresholdOrder {
                high: self.high_threshold,
                low: self.low_threshold,
            });
        }
        Ok(())
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            high_threshold: DEFAULT_HIGH_THRESHOLD,
            low_threshold: DEFAULT_LOW_THRESHOLD,
        }
    }
}

/// State of the comparator. Lives only for the duration of one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ComparatorState {
    /// Waiting for the signal to exceed the high threshold.
    Idle,
    /// Inside a detected beat, waiting for the signal to drop below the low
    /// threshold.
    Armed,
}

/// Iterates the beat onsets of a [`Signal`].
///
/// The iterator performs a single forward scan. The comparator decisions are
/// order-dependent, so the scan must not be reordered or parallelized. The
/// iterator is lazy; dropping it early simply stops the scan.
///
/// This iterator is supposed to be created via [`BeatDetector::onsets`],
/// which guarantees a validated configuration.
#[derive(Debug, Clone)]
pub struct OnsetIterator<'a> {
    signal: &'a Signal,
    config: DetectorConfig,
    index: usize,
    state: ComparatorState,
}

impl<'a> OnsetIterator<'a> {
    /// Creates a new iterator starting at the first sample.
    ///
    /// Must only be called with a config that passed
    /// [`DetectorConfig::validate`].
    pub(crate) fn new(signal: &'a Signal, config: DetectorConfig) -> Self {
        debug_assert!(config.validate().is_ok());
        Self {
            signal,
            config,
            index: 0,
            state: ComparatorState::Idle,
        }
    }
}

impl Iterator for OnsetIterator<'_> {
    type Item = SampleInfo;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.signal.len() {
            let index = self.index;
            let value = self.signal.data()[index];
            self.index += 1;

            match self.state {
                ComparatorState::Idle if value > self.config.high_threshold => {
                    self.state = ComparatorState::Armed;
                    return Some(self.signal.index_to_sample_info(index));
                }
                ComparatorState::Armed if value < self.config.low_threshold => {
                    self.state = ComparatorState::Idle;
                }
                // Neither transition condition holds; stay in the current
                // state.
                _ => {}
            }
        }
        // The scan ends at the last sample regardless of state.
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.signal.len() - self.index))
    }
}

/// Beat detector over prepared signals.
///
/// The detector holds only its validated [`DetectorConfig`]; every call to
/// [`Self::detect_onsets`] is a pure function of the signal. Running the
/// detection twice on the same signal yields identical onset sequences.
///
/// ```rust
/// use heartbeat_detector::{AudioInput, BeatDetector, DetectorConfig, Signal};
///
/// let samples = [0.0, 0.8, 0.05, 0.0, 0.9, 0.05];
/// let signal = Signal::prepare(AudioInput::Mono(&samples), 1).unwrap();
/// let detector = BeatDetector::new(DetectorConfig::default()).unwrap();
/// let onsets = detector.detect_onsets(&signal);
/// assert_eq!(
///     onsets.iter().map(|onset| onset.index).collect::<Vec<_>>(),
///     [1, 4]
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BeatDetector {
    config: DetectorConfig,
}

impl BeatDetector {
    /// Creates a new detector. The configuration is validated here, before
    /// any scan can start.
    pub fn new(config: DetectorConfig) -> Result<Self, InvalidConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Getter for the validated configuration.
    pub const fn config(&self) -> DetectorConfig {
        self.config
    }

    /// Returns a lazy iterator over the onsets of the given signal.
    pub fn onsets<'a>(&self, signal: &'a Signal) -> OnsetIterator<'a> {
        OnsetIterator::new(signal, self.config)
    }

    /// Scans the whole signal and collects all onsets, in strictly
    /// increasing index order. An empty signal yields an empty sequence.
    pub fn detect_onsets(&self, signal: &Signal) -> Vec<SampleInfo> {
        self.onsets(signal).collect()
    }
}
