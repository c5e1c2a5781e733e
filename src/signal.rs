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
//! Module for [`Signal`]: the prepared, single-channel view of the audio
//! that all further analysis operates on.

use crate::audio_input::{AudioInput, InputError};
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::time::Duration;

/// Sample info with time context.
#[derive(Copy, Clone, Debug)]
pub struct SampleInfo {
    /// The value of the sample in range `[-1.0..=1.0]`.
    pub value: f32,
    /// The index of the sample in the signal.
    pub index: usize,
    /// Relative timestamp since the beginning of the signal.
    pub timestamp: Duration,
}

impl Default for SampleInfo {
    fn default() -> Self {
        Self {
            value: 0.0,
            index: 0,
            timestamp: Duration::default(),
        }
    }
}

impl PartialEq for SampleInfo {
    fn eq(&self, other: &Self) -> bool {
        self.index.eq(&other.index)
    }
}

impl Eq for SampleInfo {}

impl PartialOrd for SampleInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SampleInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

/// A single-channel amplitude sequence paired with its sample rate.
///
/// Construct it with [`Signal::prepare`] to run the full preparation
/// (channel reduction + peak normalization), or with [`Signal::from_mono`]
/// if the data is already single-channel and scaled the way you want it.
///
/// After [`Signal::prepare`], the maximum absolute sample value is `1.0`.
/// The one exception is entirely silent input: a zero peak would make
/// normalization a division by zero, so the all-zero sequence is passed
/// through unchanged and the run yields zero statistics downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    samples: Vec<f32>,
    sample_rate_hz: u32,
    time_per_sample: f32,
}

impl Signal {
    /// Reduces the raw input to its first channel and normalizes the
    /// amplitude so that the peak magnitude is `1.0`.
    pub fn prepare(input: AudioInput, sample_rate_hz: u32) -> Result<Self, InputError> {
        input.validate()?;
        let samples = input.first_channel().collect::<Vec<_>>();
        let mut signal = Self::from_mono(samples, sample_rate_hz)?;
        signal.normalize();
        Ok(signal)
    }

    /// Creates a signal from samples that are already single-channel.
    /// No normalization is performed.
    pub fn from_mono(samples: Vec<f32>, sample_rate_hz: u32) -> Result<Self, InputError> {
        if sample_rate_hz == 0 {
            return Err(InputError::ZeroSampleRate);
        }
        debug_assert!(samples.iter().all(|sample| sample.is_finite()));
        Ok(Self {
            samples,
            sample_rate_hz,
            time_per_sample: 1.0 / sample_rate_hz as f32,
        })
    }

    /// Scales all samples by the global peak magnitude.
    fn normalize(&mut self) {
        let peak = self
            .samples
            .iter()
            .fold(0.0_f32, |peak, &sample| {
                let magnitude = libm::fabsf(sample);
                if magnitude > peak {
                    magnitude
                } else {
                    peak
                }
            });

        if peak == 0.0 {
            // Silent input. Dividing by the zero peak is undefined, so the
            // all-zero signal flows on unchanged.
            log::debug!("signal is entirely silent; skipping normalization");
            return;
        }

        for sample in &mut self.samples {
            *sample /= peak;
        }
    }

    /// Access the underlying sample data.
    pub fn data(&self) -> &[f32] {
        &self.samples
    }

    /// Getter for the sample rate in Hertz.
    pub const fn sample_rate_hz(&self) -> u32 {
        self.sample_rate_hz
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns whether the signal holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Length of the signal on the time axis.
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f32(self.duration_secs())
    }

    /// Length of the signal on the time axis, in seconds.
    pub fn duration_secs(&self) -> f32 {
        self.samples.len() as f32 * self.time_per_sample
    }

    /// Returns the [`SampleInfo`] for the sample at the given index.
    #[inline]
    pub fn index_to_sample_info(&self, index: usize) -> SampleInfo {
        assert!(index < self.samples.len());
        SampleInfo {
            value: self.samples[index],
            index,
            timestamp: Duration::from_secs_f32(index as f32 * self.time_per_sample),
        }
    }
}
