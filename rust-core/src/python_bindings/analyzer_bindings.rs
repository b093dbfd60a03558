//! Python bindings for the spectrum analyzer

use numpy::PyArray1;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::ingest::ReadOptions;
use crate::spectrum::{AnalyzerConfig, SpectrumAnalyzer, WindowType};

/// Window type enum exposed to Python
#[pyclass(name = "WindowType")]
#[derive(Clone)]
pub enum PyWindowType {
    Rectangular,
    Hann,
    Hamming,
    Blackman,
}

impl From<PyWindowType> for WindowType {
    fn from(py_win: PyWindowType) -> Self {
        match py_win {
            PyWindowType::Rectangular => WindowType::Rectangular,
            PyWindowType::Hann => WindowType::Hann,
            PyWindowType::Hamming => WindowType::Hamming,
            PyWindowType::Blackman => WindowType::Blackman,
        }
    }
}

/// Spectrum analyzer exposed to Python
#[pyclass(name = "SpectrumAnalyzer")]
pub struct PySpectrumAnalyzer {
    analyzer: SpectrumAnalyzer,
}

#[pymethods]
impl PySpectrumAnalyzer {
    /// Create a new spectrum analyzer
    ///
    /// Args:
    ///     window_type: Window applied before the FFT
    ///     center: Center the zero-frequency bin
    ///     apply_correction: Whether to apply amplitude correction for windowing
    #[new]
    #[pyo3(signature = (window_type=PyWindowType::Rectangular, center=true, apply_correction=true))]
    fn new(window_type: PyWindowType, center: bool, apply_correction: bool) -> Self {
        let config = AnalyzerConfig {
            window_type: window_type.into(),
            center,
            apply_correction,
            ..AnalyzerConfig::default()
        };

        Self {
            analyzer: SpectrumAnalyzer::new(config),
        }
    }

    /// Analyze a CSV file
    ///
    /// Returns:
    ///     Dictionary with keys: 'frequencies', 'magnitude', 'real', 'imag',
    ///     'sampling_interval'
    fn analyze_file(&mut self, py: Python<'_>, path: String) -> PyResult<PyObject> {
        let report = self.analyzer.analyze_file(path, &ReadOptions::default())?;
        let (real, imag) = report.spectrum.into_parts();

        let dict = PyDict::new(py);
        dict.set_item("frequencies", PyArray1::from_vec(py, report.frequencies.into_values()))?;
        dict.set_item("magnitude", PyArray1::from_vec(py, report.magnitude))?;
        dict.set_item("real", PyArray1::from_vec(py, real))?;
        dict.set_item("imag", PyArray1::from_vec(py, imag))?;
        dict.set_item("sampling_interval", report.sampling_interval)?;

        Ok(dict.into())
    }

    /// Whether reports are centered on zero frequency
    fn is_centered(&self) -> bool {
        self.analyzer.config().center
    }
}
