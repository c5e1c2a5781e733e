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
//! Module for [`AudioInput`].

use alloc::vec::Vec;
use thiserror::Error;

/// The `(samples, sample rate)` contract of the raw audio input is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The sample rate is zero.
    #[error("sample rate must be a positive number of Hertz")]
    ZeroSampleRate,
    /// The input carries no audio channels at all.
    #[error("input carries no audio channels")]
    NoChannels,
    /// Interleaved data whose length is not a multiple of the channel count.
    #[error("interleaved input of {len} samples cannot be split into frames of {channels} channels")]
    RaggedInterleavedInput {
        /// Total number of interleaved samples.
        len: usize,
        /// Channel count the frames were supposed to have.
        channels: u16,
    },
}

/// Raw audio input in one of the channel layouts that common decoders emit.
///
/// The analysis operates on a single channel. Multi-channel input is reduced
/// to its **first** channel; there is no stereo downmix.
///
/// ```rust
/// use heartbeat_detector::AudioInput;
///
/// // Interleaved LRLR stereo data: the first channel is [0.1, 0.3].
/// let stereo = [0.1, 0.2, 0.3, 0.4];
/// let input = AudioInput::Interleaved {
///     samples: &stereo,
///     channels: 2,
/// };
/// assert_eq!(input.first_channel().collect::<Vec<_>>(), [0.1, 0.3]);
/// ```
#[derive(Debug, Clone, Copy)]
pub enum AudioInput<'a> {
    /// The input only consists of mono samples.
    Mono(&'a [f32]),
    /// Sample-major layout: consecutive frames of `channels` samples each,
    /// e.g. a LRLRLR scheme for stereo. This is typically what WAV decoders
    /// emit.
    Interleaved {
        /// The interleaved sample data.
        samples: &'a [f32],
        /// Samples per frame.
        channels: u16,
    },
    /// Channel-major layout: one complete sample sequence per channel.
    Planar(&'a [Vec<f32>]),
}

impl<'a> AudioInput<'a> {
    /// Returns the number of channels the input carries.
    pub const fn channels(&self) -> usize {
        match self {
            Self::Mono(_) => 1,
            Self::Interleaved { channels, .. } => *channels as usize,
            Self::Planar(channels) => channels.len(),
        }
    }

    /// Checks the layout invariants that [`Self::first_channel`] relies on.
    pub fn validate(&self) -> Result<(), InputError> {
        match self {
            Self::Mono(_) => Ok(()),
            Self::Interleaved { samples, channels } => {
                if *channels == 0 {
                    Err(InputError::NoChannels)
                } else if samples.len() % *channels as usize != 0 {
                    Err(InputError::RaggedInterleavedInput {
                        len: samples.len(),
                        channels: *channels,
                    })
                } else {
                    Ok(())
                }
            }
            Self::Planar(channels) => {
                if channels.is_empty() {
                    Err(InputError::NoChannels)
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Returns an iterator over the samples of the first channel.
    ///
    /// Must only be called on input that passed [`Self::validate`].
    pub fn first_channel(&self) -> FirstChannel<'a> {
        let inner = match self {
            Self::Mono(samples) => FirstChannelInner::Contiguous(samples.iter()),
            Self::Interleaved { samples, channels } => {
                assert!(*channels > 0);
                FirstChannelInner::Strided(samples.iter().step_by(*channels as usize))
            }
            Self::Planar(channels) => {
                assert!(!channels.is_empty());
                FirstChannelInner::Contiguous(channels[0].iter())
            }
        };
        FirstChannel { inner }
    }
}

/// Iterator over the samples of the first channel of an [`AudioInput`].
#[derive(Debug, Clone)]
pub struct FirstChannel<'a> {
    inner: FirstChannelInner<'a>,
}

#[derive(Debug, Clone)]
enum FirstChannelInner<'a> {
    Contiguous(core::slice::Iter<'a, f32>),
    Strided(core::iter::StepBy<core::slice::Iter<'a, f32>>),
}

impl Iterator for FirstChannel<'_> {
    type Item = f32;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            FirstChannelInner::Contiguous(iter) => iter.next().copied(),
            FirstChannelInner::Strided(iter) => iter.next().copied(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            FirstChannelInner::Contiguous(iter) => iter.size_hint(),
            FirstChannelInner::Strided(iter) => iter.size_hint(),
        }
    }
}
