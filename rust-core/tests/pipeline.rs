//! End-to-end: CSV file -> FFT -> magnitude -> centered frequency axis

use std::f64::consts::PI;
use std::io::Write;

use spectra::ingest::{read_series_with, HeaderMode, ReadOptions};
use spectra::spectrum::{
    fft, fft_shift, fft_shift_pair, frequencies, ifft, magnitude, shifted_frequencies,
    AnalyzerConfig, FrequencyAxis, SpectrumAnalyzer,
};
use spectra::{read_series, SpectralError};
use tempfile::NamedTempFile;

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn tone_csv(freq_hz: f64, sample_rate: f64, len: usize) -> String {
    let mut csv = String::from("time,measured_data\n");
    for n in 0..len {
        let t = n as f64 / sample_rate;
        csv.push_str(&format!("{},{}\n", t, (2.0 * PI * freq_hz * t).cos()));
    }
    csv
}

#[test]
fn test_manual_pipeline_matches_analyzer() {
    let file = write_csv(&tone_csv(50.0, 1000.0, 200));
    let series = read_series(file.path()).unwrap();
    assert_eq!(series.len(), 200);

    let spectrum = fft(series.amplitude()).unwrap();
    let dt = series.sampling_interval().unwrap();
    let freqs = frequencies(series.len(), dt).unwrap();
    assert_eq!(freqs.len(), 200);

    let shifted_freqs = shifted_frequencies(series.len(), dt).unwrap();
    let (shifted_real, shifted_imag) = fft_shift_pair(spectrum.real(), spectrum.imag()).unwrap();
    let shifted_mag = magnitude(&shifted_real, &shifted_imag).unwrap();

    // Shifting the magnitude directly gives the same answer
    assert_eq!(shifted_mag, fft_shift(&spectrum.magnitude()));

    let report = SpectrumAnalyzer::default()
        .analyze_file(file.path(), &ReadOptions::default())
        .unwrap();
    assert_eq!(report.frequencies.len(), shifted_freqs.len());
    for (a, b) in report.frequencies.values().iter().zip(shifted_freqs.iter()) {
        assert!((a - b).abs() < 1e-9);
    }
    for (a, b) in report.magnitude.iter().zip(shifted_mag.iter()) {
        assert!((a - b).abs() < 1e-9);
    }

    // Cosine at 50 Hz: two peaks of N/2 at +/-50 Hz
    let (peak_freq, peak_mag) = report.peak().unwrap();
    assert!((peak_freq.abs() - 50.0).abs() < 1e-6);
    assert!((peak_mag - 100.0).abs() < 1e-6);
}

#[test]
fn test_round_trip_from_file() {
    let file = write_csv("0,0.5\n1,-1.25\n2,3.0\n3,0.0\n4,2.5\n5,-0.75\n6,1.0\n");
    let series = read_series(file.path()).unwrap();
    let restored = ifft(&fft(series.amplitude()).unwrap()).unwrap();
    for (a, b) in restored.iter().zip(series.amplitude()) {
        assert!((a - b).abs() < 1e-9);
    }
}

#[test]
fn test_centered_axis_scenario() {
    let axis = FrequencyAxis::natural(4, 1.0).unwrap();
    assert_eq!(axis.values(), &[0.0, 0.25, 0.5, 0.75]);
    assert_eq!(axis.shifted().values(), &[-0.5, -0.25, 0.0, 0.25]);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_series(dir.path().join("missing.csv")).unwrap_err();
    assert!(matches!(err, SpectralError::Io(_)));
}

#[test]
fn test_malformed_file() {
    let file = write_csv("time,amp\n0,1\n1,oops\n2,3\n");
    let err = read_series(file.path()).unwrap_err();
    assert!(matches!(err, SpectralError::MalformedInput { line: 3, .. }));
}

#[test]
fn test_single_row_file() {
    let file = write_csv("time,amp\n0,1\n");
    let err = read_series(file.path()).unwrap_err();
    assert!(matches!(err, SpectralError::EmptyInput { found: 1, .. }));
}

#[test]
fn test_semicolon_file_with_header() {
    let file = write_csv("t;x\n0;1\n0.5;2\n1.0;3\n");
    let options = ReadOptions {
        header: HeaderMode::Present,
        delimiter: b';',
    };
    let series = read_series_with(file.path(), &options).unwrap();
    assert!((series.sampling_interval().unwrap() - 0.5).abs() < 1e-12);
}

#[test]
fn test_uncentered_analyzer() {
    let file = write_csv("0,1\n1,0\n2,0\n3,0\n");
    let mut analyzer = SpectrumAnalyzer::new(AnalyzerConfig {
        center: false,
        ..AnalyzerConfig::default()
    });
    let report = analyzer.analyze_file(file.path(), &ReadOptions::default()).unwrap();
    assert_eq!(report.points().len(), 4);
    assert_eq!(report.frequencies.values()[0], 0.0);
}
