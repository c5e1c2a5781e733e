use criterion::{black_box, criterion_group, criterion_main, Criterion};
use heartbeat_detector::{AudioInput, BeatDetector, DetectorConfig, Signal};

fn criterion_benchmark(c: &mut Criterion) {
    // One minute of a synthetic pulse train at a typical WAV sample rate.
    let samples = samples::pulse_train(60, 44100);
    let signal = Signal::prepare(AudioInput::Mono(&samples), 44100).unwrap();
    let detector = BeatDetector::new(DetectorConfig::default()).unwrap();

    c.bench_function("onset scan over 60s pulse train at 44.1kHz", |b| {
        b.iter(|| {
            let _ = detector.detect_onsets(black_box(&signal));
        })
    });

    c.bench_function("signal preparation of 60s mono input at 44.1kHz", |b| {
        b.iter(|| {
            let _ = Signal::prepare(AudioInput::Mono(black_box(&samples)), 44100).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

mod samples {
    /// Returns a signal with one rectangular pulse per second, `beats`
    /// seconds long in total.
    pub fn pulse_train(beats: usize, sample_rate_hz: u32) -> Vec<f32> {
        let period = sample_rate_hz as usize;
        let pulse_len = (period / 20).max(1);
        let mut samples = vec![0.0_f32; beats * period];
        for beat in 0..beats {
            for sample in &mut samples[beat * period..beat * period + pulse_len] {
                *sample = 0.9;
            }
        }
        samples
    }
}
