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
//! Analyzes one WAV file: prints the beat report to stdout and writes a
//! waveform overlay PNG next to the input file.

use heartbeat_detector::console::ConsolePresenter;
use heartbeat_detector::plot::PlotPresenter;
use heartbeat_detector::wav::WavAudio;
use heartbeat_detector::{analyze, DetectorConfig, Presenter};
use log::LevelFilter;
use std::path::PathBuf;
use std::process::exit;

fn main() {
    init_logger();

    let path = match std::env::args_os().nth(1) {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("Usage: wav-analyzer <FILE.wav>");
            exit(1);
        }
    };

    let audio = WavAudio::read_file(&path).expect("should read the WAV file");
    log::info!(
        "loaded {}: {} Hz, {} channel(s), {} sample(s)",
        path.display(),
        audio.sample_rate_hz(),
        audio.channels(),
        audio.samples().len()
    );

    let (signal, report) = analyze(
        audio.as_input(),
        audio.sample_rate_hz(),
        DetectorConfig::default(),
    )
    .expect("should analyze the audio");

    ConsolePresenter::stdout()
        .present(&signal, &report)
        .expect("should print the report");

    let png_path = path.with_extension("png");
    PlotPresenter::new(&png_path)
        .present(&signal, &report)
        .expect("should render the waveform overlay");
    log::info!("wrote waveform overlay to {}", png_path.display());
}

fn init_logger() {
    simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .with_colors(true)
        .with_utc_timestamps()
        .init()
        .unwrap();
}
