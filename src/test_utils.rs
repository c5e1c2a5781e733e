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
//! Utilities for tests.

use std::path::PathBuf;

/// Returns the cargo target dir.
pub fn target_dir() -> PathBuf {
    // 1. Check if CARGO_TARGET_DIR is set
    if let Ok(dir) = std::env::var("CARGO_TARGET_DIR") {
        PathBuf::from(dir)
    } else {
        // 2. Fall back to default: go up from CARGO_MANIFEST_DIR
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        manifest_dir.join("target")
    }
}

/// Returns a directory within the cargo target dir to store test artifacts.
pub fn target_dir_test_artifacts() -> PathBuf {
    let mut path = target_dir();
    path.push("test_generated");
    path
}

/// Synthetic signal generators. Real recordings are not needed to exercise
/// the comparator; a pulse train with known onset positions is easier to
/// reason about in assertions.
pub mod samples {
    use alloc::vec::Vec;

    /// Returns a signal with one rectangular pulse per second, `beats`
    /// seconds long in total.
    ///
    /// Each second starts with 50 ms of amplitude `0.9` followed by
    /// silence, so with the default thresholds every pulse produces exactly
    /// one onset at the first sample of its second.
    pub fn pulse_train(beats: usize, sample_rate_hz: u32) -> Vec<f32> {
        let period = sample_rate_hz as usize;
        let pulse_len = (period / 20).max(1);
        let mut samples = alloc::vec![0.0_f32; beats * period];
        for beat in 0..beats {
            for sample in &mut samples[beat * period..beat * period + pulse_len] {
                *sample = 0.9;
            }
        }
        samples
    }

    #[test]
    fn pulse_train_has_the_expected_shape() {
        let samples = pulse_train(2, 100);
        assert_eq!(samples.len(), 200);
        assert_eq!(samples[0], 0.9);
        assert_eq!(samples[4], 0.9);
        assert_eq!(samples[5], 0.0);
        assert_eq!(samples[100], 0.9);
        assert_eq!(samples[105], 0.0);
    }
}
