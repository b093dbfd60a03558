//! Spectral analysis with FFT

pub mod analysis;
pub mod fft;
pub mod frequency;
pub mod magnitude;
pub mod shift;
pub mod windowing;
pub mod windows;

pub use analysis::{AnalyzerConfig, SpectralReport, SpectrumAnalyzer};
pub use fft::{fft, fft_with, ifft, FftEngine, Spectrum, TransformStrategy};
pub use frequency::{frequencies, shifted_frequencies, signed_frequencies, BinOrder, FrequencyAxis};
pub use magnitude::{magnitude, magnitude_db};
pub use shift::{fft_shift, fft_shift_pair, ifft_shift};
pub use windowing::apply_window;
pub use windows::{generate_window, WindowType};
