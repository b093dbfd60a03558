//! Applies windows to time-domain signals before the FFT to reduce spectral leakage

use super::windows::{generate_window, WindowType};

/// Apply window to signal
///
/// # Returns
/// Windowed copy of the signal
pub fn apply_window(signal: &[f64], window_type: WindowType) -> Vec<f64> {
    if window_type == WindowType::Rectangular {
        return signal.to_vec();
    }

    let window = generate_window(window_type, signal.len());
    signal
        .iter()
        .zip(window.iter())
        .map(|(&s, &w)| s * w)
        .collect()
}

/// Amplitude correction factor for a window (N / sum(w))
///
/// Multiply FFT magnitudes of a windowed signal by this to recover the
/// amplitude of a coherent tone.
pub fn window_correction_factor(window_type: WindowType, length: usize) -> f64 {
    let window = generate_window(window_type, length);
    let sum: f64 = window.iter().sum();
    if sum == 0.0 {
        return 1.0;
    }
    length as f64 / sum
}
