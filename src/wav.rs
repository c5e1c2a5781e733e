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
//! WAV loading via `hound`.

use crate::audio_input::AudioInput;
use crate::conversion::i16_sample_to_f32;
use std::path::Path;
use std::vec::Vec;
use thiserror::Error;

/// The WAV file could not be loaded into samples usable by the analysis.
#[derive(Debug, Error)]
pub enum WavError {
    /// The file could not be opened or decoded.
    #[error("cannot read WAV file")]
    Read(#[from] hound::Error),
    /// Only 16-bit integer and 32-bit float PCM are supported.
    #[error("unsupported WAV encoding: {bits_per_sample} bit {sample_format:?}")]
    UnsupportedEncoding {
        /// Bits per sample of the file.
        bits_per_sample: u16,
        /// Sample format of the file.
        sample_format: hound::SampleFormat,
    },
}

/// Decoded WAV audio, still in its interleaved on-disk channel layout.
///
/// Integer samples are converted to `f32` in range `-1.0..=1.0`; the channel
/// reduction happens later, during signal preparation.
#[derive(Debug, Clone, PartialEq)]
pub struct WavAudio {
    samples: Vec<f32>,
    channels: u16,
    sample_rate_hz: u32,
}

impl WavAudio {
    /// Reads the WAV file at the given path.
    ///
    /// 16-bit integer and 32-bit float PCM are supported; every other
    /// encoding is rejected with [`WavError::UnsupportedEncoding`].
    pub fn read_file(path: impl AsRef<Path>) -> Result<Self, WavError> {
        let mut reader = hound::WavReader::open(path)?;
        let spec = reader.spec();
        let samples = match (spec.sample_format, spec.bits_per_sample) {
            (hound::SampleFormat::Int, 16) => reader
                .samples::<i16>()
                .map(|sample| sample.map(i16_sample_to_f32))
                .collect::<Result<Vec<_>, _>>()?,
            (hound::SampleFormat::Float, 32) => {
                reader.samples::<f32>().collect::<Result<Vec<_>, _>>()?
            }
            (sample_format, bits_per_sample) => {
                return Err(WavError::UnsupportedEncoding {
                    bits_per_sample,
                    sample_format,
                })
            }
        };
        log::debug!(
            "loaded WAV: {} Hz, {} channel(s), {} sample(s)",
            spec.sample_rate,
            spec.channels,
            samples.len()
        );
        Ok(Self {
            samples,
            channels: spec.channels,
            sample_rate_hz: spec.sample_rate,
        })
    }

    /// Returns the audio as [`AudioInput`] for signal preparation.
    pub fn as_input(&self) -> AudioInput<'_> {
        if self.channels == 1 {
            AudioInput::Mono(&self.samples)
        } else {
            AudioInput::Interleaved {
                samples: &self.samples,
                channels: self.channels,
            }
        }
    }

    /// The interleaved samples, in range `-1.0..=1.0`.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Number of channels of the file.
    pub const fn channels(&self) -> u16 {
        self.channels
    }

    /// Sample rate of the file in Hertz.
    pub const fn sample_rate_hz(&self) -> u32 {
        self.sample_rate_hz
    }
}
