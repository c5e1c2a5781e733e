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
//! Module for [`BeatMetrics`].

use crate::signal::{SampleInfo, Signal};
use alloc::vec::Vec;
use core::time::Duration;

/// Width of the fixed reporting windows.
pub const WINDOW_DURATION: Duration = Duration::from_secs(10);

/// Summary and windowed statistics derived from the onsets of one signal.
///
/// All values are pure functions of the onset sequence and the signal
/// length; computing them does not touch any detector state. The struct is
/// immutable once computed.
#[derive(Debug, Clone, PartialEq)]
pub struct BeatMetrics {
    total_beats: usize,
    duration_secs: f32,
    beats_per_minute: f32,
    windowed_counts: Vec<u32>,
}

impl BeatMetrics {
    /// Computes all statistics for the given signal and its onsets.
    ///
    /// The onsets must stem from a scan over the same signal, i.e. their
    /// indices must be valid indices into it.
    pub fn compute(signal: &Signal, onsets: &[SampleInfo]) -> Self {
        let total_beats = onsets.len();
        let duration_secs = signal.duration_secs();

        let beats_per_minute = if duration_secs == 0.0 {
            // A zero-length signal has no rate.
            0.0
        } else {
            total_beats as f32 / duration_secs * 60.0
        };

        // Bucketing happens on sample indices: the window of an onset at
        // index i is floor(i / (rate * 10)), which is exactly
        // floor(timestamp / 10) on the derived time axis but free of float
        // rounding at the window borders.
        let window_len = signal.sample_rate_hz() as u64 * WINDOW_DURATION.as_secs();
        let window_count = (signal.len() as u64).div_ceil(window_len) as usize;
        let mut windowed_counts = alloc::vec![0_u32; window_count];
        for onset in onsets {
            debug_assert!(onset.index < signal.len());
            windowed_counts[(onset.index as u64 / window_len) as usize] += 1;
        }

        Self {
            total_beats,
            duration_secs,
            beats_per_minute,
            windowed_counts,
        }
    }

    /// Total number of detected beats.
    pub const fn total_beats(&self) -> usize {
        self.total_beats
    }

    /// Length of the analyzed signal on the time axis, in seconds.
    pub const fn duration_secs(&self) -> f32 {
        self.duration_secs
    }

    /// Length of the analyzed signal on the time axis.
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f32(self.duration_secs)
    }

    /// Average beat rate over the whole signal. `0.0` for a zero-length
    /// signal.
    pub const fn beats_per_minute(&self) -> f32 {
        self.beats_per_minute
    }

    /// Beat count per consecutive 10-second window over `[0, duration)`,
    /// in increasing window order. The last window may span less than
    /// 10 seconds. Empty for a zero-length signal.
    pub fn windowed_counts(&self) -> &[u32] {
        &self.windowed_counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beat_detector::{BeatDetector, DetectorConfig};
    use crate::test_utils;
    use assert2::check;
    use float_cmp::approx_eq;
    use std::vec::Vec;

    fn metrics_of(samples: Vec<f32>, sample_rate_hz: u32) -> BeatMetrics {
        let signal = Signal::from_mono(samples, sample_rate_hz).unwrap();
        let detector = BeatDetector::new(DetectorConfig::default()).unwrap();
        let onsets = detector.detect_onsets(&signal);
        BeatMetrics::compute(&signal, &onsets)
    }

    #[test]
    fn two_pulses_over_six_seconds() {
        let metrics = metrics_of(Vec::from([0.0, 0.5, 0.05, 0.0, 0.5, 0.05]), 1);
        check!(metrics.total_beats() == 2);
        check!(metrics.duration_secs() == 6.0);
        check!(metrics.beats_per_minute() == 20.0);
        assert_eq!(metrics.windowed_counts(), [2]);
    }

    #[test]
    fn silent_signal_yields_zero_statistics() {
        let metrics = metrics_of(alloc::vec![0.0; 100], 10);
        check!(metrics.total_beats() == 0);
        check!(metrics.duration_secs() == 10.0);
        check!(metrics.beats_per_minute() == 0.0);
        assert_eq!(metrics.windowed_counts(), [0]);
    }

    #[test]
    fn zero_length_signal_yields_no_windows_and_zero_bpm() {
        let metrics = metrics_of(Vec::new(), 44100);
        check!(metrics.total_beats() == 0);
        check!(metrics.duration_secs() == 0.0);
        check!(metrics.beats_per_minute() == 0.0);
        check!(metrics.windowed_counts().is_empty());
    }

    #[test]
    fn bpm_is_derived_from_count_and_duration() {
        let samples = test_utils::samples::pulse_train(30, 100);
        let metrics = metrics_of(samples, 100);
        check!(metrics.total_beats() == 30);
        check!(approx_eq!(
            f32,
            metrics.beats_per_minute(),
            metrics.total_beats() as f32 / metrics.duration_secs() * 60.0
        ));
    }

    #[test]
    fn window_counts_partition_the_beats() {
        // 25 one-second beat periods: 25 s of signal, 3 windows, the last
        // one covering only 5 s.
        let samples = test_utils::samples::pulse_train(25, 100);
        let metrics = metrics_of(samples, 100);
        check!(metrics.total_beats() == 25);
        check!(metrics.duration_secs() == 25.0);
        assert_eq!(metrics.windowed_counts(), [10, 10, 5]);
        let sum = metrics.windowed_counts().iter().sum::<u32>();
        check!(sum as usize == metrics.total_beats());
    }

    #[test]
    fn onset_on_a_window_border_counts_into_the_later_window() {
        // One onset exactly at t = 10 s of a 10.5 s signal.
        let mut samples = alloc::vec![0.0; 21];
        samples[20] = 0.8;
        let metrics = metrics_of(samples, 2);
        check!(metrics.total_beats() == 1);
        assert_eq!(metrics.windowed_counts(), [0, 1]);
    }

    #[test]
    fn window_count_is_ceil_of_duration() {
        // 10.5 s at 2 Hz: 21 samples, two windows.
        let metrics = metrics_of(alloc::vec![0.0; 21], 2);
        assert_eq!(metrics.windowed_counts(), [0, 0]);

        // Exactly 20 s: two full windows, no empty third one.
        let metrics = metrics_of(alloc::vec![0.0; 40], 2);
        assert_eq!(metrics.windowed_counts(), [0, 0]);
    }
}
