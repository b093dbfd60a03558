//! Frequency axis generation for DFT bins

use super::shift::fft_shift;
use crate::error::{Result, SpectralError};

/// Order of the bins on a frequency axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOrder {
    /// k = 0..N-1, as produced by the transform
    Natural,

    /// Zero frequency centered, negative frequencies first
    Shifted,
}

fn validate(len: usize, sampling_interval: f64) -> Result<()> {
    if len == 0 {
        return Err(SpectralError::InvalidLength);
    }
    if !(sampling_interval.is_finite() && sampling_interval > 0.0) {
        return Err(SpectralError::InvalidInterval(sampling_interval));
    }
    Ok(())
}

/// Bin frequencies f[k] = k / (N * dt) in natural order
///
/// # Errors
/// `InvalidLength` if `len` is zero, `InvalidInterval` if `sampling_interval`
/// is not a positive finite number.
pub fn frequencies(len: usize, sampling_interval: f64) -> Result<Vec<f64>> {
    validate(len, sampling_interval)?;
    let total_duration = len as f64 * sampling_interval;
    Ok((0..len).map(|k| k as f64 / total_duration).collect())
}

/// Bin frequencies with bins above Nyquist aliased to negative values
///
/// Bins k <= (N-1)/2 are positive; the rest map to (k - N) / (N * dt).
pub fn signed_frequencies(len: usize, sampling_interval: f64) -> Result<Vec<f64>> {
    validate(len, sampling_interval)?;
    let total_duration = len as f64 * sampling_interval;
    let last_positive = (len - 1) / 2;

    Ok((0..len)
        .map(|k| {
            if k <= last_positive {
                k as f64 / total_duration
            } else {
                -((len - k) as f64) / total_duration
            }
        })
        .collect())
}

/// Centered frequency axis, index-aligned with a shifted spectrum
pub fn shifted_frequencies(len: usize, sampling_interval: f64) -> Result<Vec<f64>> {
    Ok(fft_shift(&signed_frequencies(len, sampling_interval)?))
}

/// Frequency axis together with the (N, dt) it was generated from
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyAxis {
    values: Vec<f64>,
    sampling_interval: f64,
    order: BinOrder,
}

impl FrequencyAxis {
    /// Natural-order axis for `len` bins
    pub fn natural(len: usize, sampling_interval: f64) -> Result<Self> {
        Ok(Self {
            values: frequencies(len, sampling_interval)?,
            sampling_interval,
            order: BinOrder::Natural,
        })
    }

    /// Centered axis for `len` bins
    pub fn centered(len: usize, sampling_interval: f64) -> Result<Self> {
        Self::natural(len, sampling_interval).map(|axis| axis.shifted())
    }

    /// Same bins in shifted order, with the upper half folded to negative frequencies
    ///
    /// Already-shifted axes are returned unchanged.
    pub fn shifted(&self) -> Self {
        if self.order == BinOrder::Shifted {
            return self.clone();
        }

        let len = self.values.len();
        let last_positive = (len - 1) / 2;
        let sample_rate = 1.0 / self.sampling_interval;
        let signed: Vec<f64> = self
            .values
            .iter()
            .enumerate()
            .map(|(k, &f)| if k <= last_positive { f } else { f - sample_rate })
            .collect();

        Self {
            values: fft_shift(&signed),
            sampling_interval: self.sampling_interval,
            order: BinOrder::Shifted,
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn order(&self) -> BinOrder {
        self.order
    }

    pub fn sampling_interval(&self) -> f64 {
        self.sampling_interval
    }

    /// Spacing between adjacent bins, 1 / (N * dt)
    pub fn resolution(&self) -> f64 {
        1.0 / (self.values.len() as f64 * self.sampling_interval)
    }

    /// Nyquist frequency, 1 / (2 * dt)
    pub fn nyquist(&self) -> f64 {
        0.5 / self.sampling_interval
    }
}
