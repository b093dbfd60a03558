//! Zero-frequency centering
//!
//! `fft_shift` rotates left by ceil(N/2): the first ceil(N/2) elements move to
//! the end, so bin 0 lands at index floor(N/2). For even N this swaps the two
//! halves and is its own inverse. For odd N use `ifft_shift` to undo it.

use crate::error::{Result, SpectralError};

/// Move the zero-frequency element to the center
pub fn fft_shift(data: &[f64]) -> Vec<f64> {
    let mut shifted = data.to_vec();
    shifted.rotate_left(data.len().div_ceil(2));
    shifted
}

/// Inverse of `fft_shift` for every length
pub fn ifft_shift(data: &[f64]) -> Vec<f64> {
    let mut unshifted = data.to_vec();
    unshifted.rotate_left(data.len() / 2);
    unshifted
}

/// Shift real and imaginary parts with the same rotation
pub fn fft_shift_pair(real: &[f64], imag: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
    if real.len() != imag.len() {
        return Err(SpectralError::LengthMismatch {
            expected: real.len(),
            found: imag.len(),
        });
    }
    Ok((fft_shift(real), fft_shift(imag)))
}
