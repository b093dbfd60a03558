//! High-level spectrum analyzer
//!
//! Runs the full chain on a sample series: interval check, windowing, FFT,
//! optional centering, magnitude.

use std::path::Path;

use log::debug;

use super::fft::{FftEngine, Spectrum, TransformStrategy};
use super::frequency::FrequencyAxis;
use super::windowing::{apply_window, window_correction_factor};
use super::windows::WindowType;
use crate::error::Result;
use crate::ingest::series::DEFAULT_INTERVAL_TOLERANCE;
use crate::ingest::{read_series_with, ReadOptions, SampleSeries};

/// Spectrum analyzer configuration
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Window applied before the transform
    pub window_type: WindowType,

    /// Scale magnitudes by the window's amplitude correction factor
    pub apply_correction: bool,

    /// Center the zero-frequency bin in the report
    pub center: bool,

    /// Transform evaluation strategy
    pub strategy: TransformStrategy,

    /// Relative tolerance for uniform sampling
    pub interval_tolerance: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            window_type: WindowType::Rectangular,
            apply_correction: true,
            center: true,
            strategy: TransformStrategy::Auto,
            interval_tolerance: DEFAULT_INTERVAL_TOLERANCE,
        }
    }
}

/// Output of one analysis run
///
/// `frequencies`, `spectrum` and `magnitude` are index-aligned and share
/// the same bin order.
#[derive(Debug, Clone)]
pub struct SpectralReport {
    pub frequencies: FrequencyAxis,
    pub spectrum: Spectrum,
    pub magnitude: Vec<f64>,
    pub sampling_interval: f64,
}

impl SpectralReport {
    /// (frequency, magnitude) of the strongest bin
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.frequencies
            .values()
            .iter()
            .zip(self.magnitude.iter())
            .fold(None, |best: Option<(f64, f64)>, (&f, &m)| match best {
                Some((_, best_m)) if best_m >= m => best,
                _ => Some((f, m)),
            })
    }

    /// (frequency, magnitude) pairs, ready for a plotting collaborator
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.frequencies
            .values()
            .iter()
            .copied()
            .zip(self.magnitude.iter().copied())
            .collect()
    }
}

/// Spectrum analyzer for uniformly sampled series
pub struct SpectrumAnalyzer {
    config: AnalyzerConfig,
    engine: Option<FftEngine>,
}

impl SpectrumAnalyzer {
    /// Create new spectrum analyzer
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            engine: None,
        }
    }

    /// Analyze a series
    ///
    /// # Errors
    /// `InvalidInterval` / `IrregularSampling` if the time column is not
    /// uniformly increasing; transform errors are passed through.
    pub fn analyze(&mut self, series: &SampleSeries) -> Result<SpectralReport> {
        let dt = series.sampling_interval_within(self.config.interval_tolerance)?;
        let n = series.len();
        debug!("Analyzing {} samples at dt = {}", n, dt);

        let windowed = apply_window(series.amplitude(), self.config.window_type);
        let spectrum = self.engine_for(n)?.forward(&windowed)?;
        let mut frequencies = FrequencyAxis::natural(n, dt)?;

        let spectrum = if self.config.center {
            frequencies = frequencies.shifted();
            spectrum.shifted()
        } else {
            spectrum
        };

        let mut magnitude = spectrum.magnitude();
        if self.config.apply_correction && self.config.window_type != WindowType::Rectangular {
            let factor = window_correction_factor(self.config.window_type, n);
            for m in magnitude.iter_mut() {
                *m *= factor;
            }
        }

        Ok(SpectralReport {
            frequencies,
            spectrum,
            magnitude,
            sampling_interval: dt,
        })
    }

    /// Read a CSV file and analyze it
    pub fn analyze_file<P: AsRef<Path>>(
        &mut self,
        path: P,
        options: &ReadOptions,
    ) -> Result<SpectralReport> {
        let series = read_series_with(path, options)?;
        self.analyze(&series)
    }

    /// Update configuration
    pub fn update_config(&mut self, config: AnalyzerConfig) {
        if config.strategy != self.config.strategy {
            self.engine = None;
        }
        self.config = config;
    }

    /// Get current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    fn engine_for(&mut self, len: usize) -> Result<&mut FftEngine> {
        let engine = match self.engine.take() {
            Some(engine) if engine.fft_size() == len => engine,
            _ => FftEngine::new(len, self.config.strategy)?,
        };
        Ok(self.engine.insert(engine))
    }
}

impl Default for SpectrumAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpectralError;
    use std::f64::consts::PI;

    fn sine_series(freq_hz: f64, sample_rate: f64, len: usize) -> SampleSeries {
        let amplitude = (0..len)
            .map(|n| (2.0 * PI * freq_hz * n as f64 / sample_rate).sin())
            .collect();
        SampleSeries::from_amplitudes(amplitude, 1.0 / sample_rate).unwrap()
    }

    #[test]
    fn test_analyzer_basic() {
        let mut analyzer = SpectrumAnalyzer::default();
        let report = analyzer.analyze(&sine_series(1000.0, 48000.0, 480)).unwrap();

        assert_eq!(report.magnitude.len(), 480);
        assert_eq!(report.frequencies.len(), 480);

        let (peak_freq, peak_mag) = report.peak().unwrap();
        assert!((peak_freq.abs() - 1000.0).abs() < 1e-6);
        assert!((peak_mag - 240.0).abs() < 1e-6);
    }

    #[test]
    fn test_centered_report_is_aligned() {
        let mut analyzer = SpectrumAnalyzer::default();
        let series = SampleSeries::from_amplitudes(vec![3.0, 1.0, 2.0, 5.0, 4.0], 0.1).unwrap();
        let report = analyzer.analyze(&series).unwrap();

        // DC sits at the center of a centered report
        let center = 5 / 2;
        assert_eq!(report.frequencies.values()[center], 0.0);
        assert!((report.magnitude[center] - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_natural_order_report() {
        let config = AnalyzerConfig {
            center: false,
            ..AnalyzerConfig::default()
        };
        let mut analyzer = SpectrumAnalyzer::new(config);
        let series = SampleSeries::from_amplitudes(vec![1.0, 0.0, 0.0, 0.0], 1.0).unwrap();
        let report = analyzer.analyze(&series).unwrap();

        assert_eq!(report.frequencies.values(), &[0.0, 0.25, 0.5, 0.75]);
        for m in &report.magnitude {
            assert!((m - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_window_correction() {
        let config = AnalyzerConfig {
            window_type: WindowType::Hann,
            ..AnalyzerConfig::default()
        };
        let mut analyzer = SpectrumAnalyzer::new(config);
        let report = analyzer.analyze(&sine_series(1000.0, 48000.0, 480)).unwrap();

        // Corrected peak stays near N/2 for a unit sine
        let (_, peak_mag) = report.peak().unwrap();
        assert!(peak_mag > 200.0 && peak_mag < 260.0);
    }

    #[test]
    fn test_engine_replanned_on_length_change() {
        let mut analyzer = SpectrumAnalyzer::default();
        assert_eq!(analyzer.analyze(&sine_series(10.0, 100.0, 64)).unwrap().magnitude.len(), 64);
        assert_eq!(analyzer.analyze(&sine_series(10.0, 100.0, 97)).unwrap().magnitude.len(), 97);
    }

    #[test]
    fn test_irregular_series_rejected() {
        let mut analyzer = SpectrumAnalyzer::default();
        let series = SampleSeries::new(vec![0.0, 1.0, 3.0], vec![1.0, 2.0, 3.0]).unwrap();
        assert!(matches!(
            analyzer.analyze(&series),
            Err(SpectralError::IrregularSampling { index: 2, .. })
        ));
    }
}
