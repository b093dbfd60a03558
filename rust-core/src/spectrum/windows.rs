//! Window functions for spectral analysis

use std::f64::consts::PI;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowType {
    /// Rectangular window (no windowing)
    #[default]
    Rectangular,

    /// Hann window: w[n] = 0.5 - 0.5*cos(2πn/(M-1))
    /// Sidelobe attenuation: ~31 dB
    Hann,

    /// Hamming window: w[n] = 0.54 - 0.46*cos(2πn/(M-1))
    Hamming,

    /// Blackman window: w[n] = 0.42 - 0.5*cos(2πn/(M-1)) + 0.08*cos(4πn/(M-1))
    Blackman,
}

/// Generate window coefficients
///
/// # Arguments
/// * `window_type` - Type of window function
/// * `length` - Number of samples (M)
///
/// # Returns
/// Symmetric coefficients w[n] for n = 0..M-1. A single-sample window is [1.0].
pub fn generate_window(window_type: WindowType, length: usize) -> Vec<f64> {
    if length <= 1 || window_type == WindowType::Rectangular {
        return vec![1.0; length];
    }

    let m = length as f64;
    (0..length)
        .map(|n| {
            let angle = 2.0 * PI * n as f64 / (m - 1.0);
            match window_type {
                WindowType::Hann => 0.5 - 0.5 * angle.cos(),
                WindowType::Hamming => 0.54 - 0.46 * angle.cos(),
                WindowType::Blackman => 0.42 - 0.5 * angle.cos() + 0.08 * (2.0 * angle).cos(),
                WindowType::Rectangular => 1.0,
            }
        })
        .collect()
}
