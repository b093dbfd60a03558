//! Magnitude of complex spectra

use crate::error::{Result, SpectralError};

/// Floor applied before taking logarithms
const MAGNITUDE_FLOOR: f64 = 1e-10;

/// Elementwise sqrt(re^2 + im^2)
///
/// # Errors
/// `LengthMismatch` if `real` and `imag` differ in length.
pub fn magnitude(real: &[f64], imag: &[f64]) -> Result<Vec<f64>> {
    if real.len() != imag.len() {
        return Err(SpectralError::LengthMismatch {
            expected: real.len(),
            found: imag.len(),
        });
    }

    Ok(real
        .iter()
        .zip(imag.iter())
        .map(|(re, im)| re.hypot(*im))
        .collect())
}

/// Magnitude in dB: 20*log10(|X[k]| / reference)
pub fn magnitude_db(magnitude: &[f64], reference: f64) -> Vec<f64> {
    magnitude
        .iter()
        .map(|&mag| {
            let mag_clamped = mag.max(MAGNITUDE_FLOOR); // Avoid log(0)
            20.0 * (mag_clamped / reference).log10()
        })
        .collect()
}
