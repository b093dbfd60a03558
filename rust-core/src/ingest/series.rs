//! Uniformly sampled time series

use crate::error::{Result, SpectralError, MIN_SAMPLES};

/// Default relative tolerance when checking that time steps are uniform
pub const DEFAULT_INTERVAL_TOLERANCE: f64 = 1e-6;

/// Ordered (time, amplitude) samples
///
/// Times and amplitudes are stored as parallel vectors in temporal order.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    time: Vec<f64>,
    amplitude: Vec<f64>,
}

impl SampleSeries {
    /// Build a series from parallel time and amplitude columns
    ///
    /// # Errors
    /// `LengthMismatch` if the columns differ in length, `EmptyInput` if
    /// there are fewer than two samples, `NonFiniteSample` if any time or
    /// amplitude is NaN or infinite.
    pub fn new(time: Vec<f64>, amplitude: Vec<f64>) -> Result<Self> {
        if time.len() != amplitude.len() {
            return Err(SpectralError::LengthMismatch {
                expected: time.len(),
                found: amplitude.len(),
            });
        }
        if time.len() < MIN_SAMPLES {
            return Err(SpectralError::EmptyInput {
                found: time.len(),
                required: MIN_SAMPLES,
            });
        }

        if let Some(index) = time
            .iter()
            .zip(amplitude.iter())
            .position(|(t, a)| !(t.is_finite() && a.is_finite()))
        {
            return Err(SpectralError::NonFiniteSample { index });
        }

        Ok(Self { time, amplitude })
    }

    /// Build a series from amplitudes sampled every `interval` starting at t = 0
    pub fn from_amplitudes(amplitude: Vec<f64>, interval: f64) -> Result<Self> {
        if !(interval.is_finite() && interval > 0.0) {
            return Err(SpectralError::InvalidInterval(interval));
        }
        let time = (0..amplitude.len()).map(|n| n as f64 * interval).collect();
        Self::new(time, amplitude)
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn amplitude(&self) -> &[f64] {
        &self.amplitude
    }

    /// Consume the series, returning `(time, amplitude)`
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.time, self.amplitude)
    }

    /// Step between the first two samples, without checking the rest
    pub fn nominal_interval(&self) -> f64 {
        self.time[1] - self.time[0]
    }

    /// Sampling interval, verified to be uniform across the whole series
    ///
    /// Every step must lie within `DEFAULT_INTERVAL_TOLERANCE` (relative) of
    /// the first step.
    pub fn sampling_interval(&self) -> Result<f64> {
        self.sampling_interval_within(DEFAULT_INTERVAL_TOLERANCE)
    }

    /// Sampling interval with a caller-chosen relative tolerance
    pub fn sampling_interval_within(&self, tolerance: f64) -> Result<f64> {
        if !(tolerance.is_finite() && tolerance >= 0.0) {
            return Err(SpectralError::InvalidTolerance(tolerance));
        }

        let dt = self.nominal_interval();
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SpectralError::InvalidInterval(dt));
        }

        let allowed = tolerance * dt;
        for (index, pair) in self.time.windows(2).enumerate() {
            let step = pair[1] - pair[0];
            if (step - dt).abs() > allowed {
                return Err(SpectralError::IrregularSampling {
                    index: index + 1,
                    expected: dt,
                    found: step,
                });
            }
        }

        Ok(dt)
    }

    /// Total time covered by the samples (N * dt)
    pub fn duration(&self) -> f64 {
        self.len() as f64 * self.nominal_interval()
    }
}
