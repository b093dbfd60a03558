//! Spectra - FFT Core for Sampled Time Series
//!
//! CSV ingestion, forward/inverse DFT, magnitude, frequency axes and
//! zero-frequency centering, with optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![allow(non_local_definitions)]

pub mod error;
pub mod ingest;
pub mod spectrum;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{Result, SpectralError};
pub use ingest::{read_series, SampleSeries};
pub use spectrum::{
    fft, fft_shift, fft_shift_pair, frequencies, ifft, magnitude, shifted_frequencies,
    FftEngine, FrequencyAxis, Spectrum, SpectrumAnalyzer,
};
