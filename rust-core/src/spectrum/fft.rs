//! FFT engine for real-valued signals of arbitrary length
//!
//! Forward transforms go through realfft (the positive half is mirrored into
//! the full spectrum); lengths with large prime factors fall back to a direct
//! O(N^2) DFT.

use std::f64::consts::PI;
use std::sync::Arc;

use log::debug;
use num_complex::Complex;
use realfft::{RealFftPlanner, RealToComplex};
use rustfft::{Fft, FftPlanner};

use super::shift::{fft_shift, ifft_shift};
use crate::error::{Result, SpectralError};

/// Longest non-smooth length that `Auto` evaluates directly
pub const DIRECT_MAX_LEN: usize = 1024;

/// How the transform is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformStrategy {
    /// Fast for 7-smooth lengths and lengths above `DIRECT_MAX_LEN`, direct otherwise
    #[default]
    Auto,

    /// O(N log N) mixed-radix / Bluestein through realfft and rustfft
    Fast,

    /// O(N^2) direct evaluation of the DFT sum
    Direct,
}

impl TransformStrategy {
    /// Concrete strategy used for a transform of length `len`
    pub fn resolve(self, len: usize) -> TransformStrategy {
        match self {
            TransformStrategy::Auto => {
                if len > 1 && (is_smooth(len) || len > DIRECT_MAX_LEN) {
                    TransformStrategy::Fast
                } else {
                    TransformStrategy::Direct
                }
            }
            other => other,
        }
    }
}

/// True when every prime factor of `n` is at most 7
fn is_smooth(mut n: usize) -> bool {
    if n == 0 {
        return false;
    }
    for p in [2, 3, 5, 7] {
        while n % p == 0 {
            n /= p;
        }
    }
    n == 1
}

/// Complex spectrum in natural bin order, stored as parallel real/imaginary parts
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    real: Vec<f64>,
    imag: Vec<f64>,
}

impl Spectrum {
    /// Build a spectrum from index-aligned real and imaginary parts
    pub fn from_parts(real: Vec<f64>, imag: Vec<f64>) -> Result<Self> {
        if real.len() != imag.len() {
            return Err(SpectralError::LengthMismatch {
                expected: real.len(),
                found: imag.len(),
            });
        }
        Ok(Self { real, imag })
    }

    fn from_complex(bins: &[Complex<f64>]) -> Self {
        Self {
            real: bins.iter().map(|c| c.re).collect(),
            imag: bins.iter().map(|c| c.im).collect(),
        }
    }

    fn to_complex(&self) -> Vec<Complex<f64>> {
        self.real
            .iter()
            .zip(self.imag.iter())
            .map(|(&re, &im)| Complex::new(re, im))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.real.len()
    }

    pub fn is_empty(&self) -> bool {
        self.real.is_empty()
    }

    pub fn real(&self) -> &[f64] {
        &self.real
    }

    pub fn imag(&self) -> &[f64] {
        &self.imag
    }

    /// Consume the spectrum, returning `(real, imag)`
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.real, self.imag)
    }

    /// |X[k]| for every bin
    pub fn magnitude(&self) -> Vec<f64> {
        self.real
            .iter()
            .zip(self.imag.iter())
            .map(|(re, im)| re.hypot(*im))
            .collect()
    }

    /// Spectrum with the zero-frequency bin moved to the center
    pub fn shifted(&self) -> Spectrum {
        Self {
            real: fft_shift(&self.real),
            imag: fft_shift(&self.imag),
        }
    }

    /// Undo `shifted`, restoring natural bin order
    pub fn unshifted(&self) -> Spectrum {
        Self {
            real: ifft_shift(&self.real),
            imag: ifft_shift(&self.imag),
        }
    }
}

enum Backend {
    Fast {
        r2c: Arc<dyn RealToComplex<f64>>,
        c2c_inverse: Arc<dyn Fft<f64>>,
        input_buffer: Vec<f64>,
        half_spectrum: Vec<Complex<f64>>,
    },
    Direct {
        /// twiddles[m] = exp(-2*pi*i*m/N)
        twiddles: Vec<Complex<f64>>,
    },
}

/// Planned transform for signals of one fixed length
pub struct FftEngine {
    fft_size: usize,
    strategy: TransformStrategy,
    backend: Backend,
}

impl FftEngine {
    /// Plan a transform
    ///
    /// # Arguments
    /// * `fft_size` - Signal length N (any positive value)
    /// * `strategy` - Evaluation strategy, `Auto` resolves from N
    pub fn new(fft_size: usize, strategy: TransformStrategy) -> Result<Self> {
        if fft_size == 0 {
            return Err(SpectralError::InvalidLength);
        }

        let strategy = strategy.resolve(fft_size);
        debug!("Planning {:?} transform of length {}", strategy, fft_size);

        let backend = match strategy {
            TransformStrategy::Direct => Backend::Direct {
                twiddles: (0..fft_size)
                    .map(|m| Complex::from_polar(1.0, -2.0 * PI * m as f64 / fft_size as f64))
                    .collect(),
            },
            _ => {
                let r2c = RealFftPlanner::<f64>::new().plan_fft_forward(fft_size);
                let c2c_inverse = FftPlanner::<f64>::new().plan_fft_inverse(fft_size);
                let half_spectrum = r2c.make_output_vec();

                Backend::Fast {
                    r2c,
                    c2c_inverse,
                    input_buffer: vec![0.0; fft_size],
                    half_spectrum,
                }
            }
        };

        Ok(Self {
            fft_size,
            strategy,
            backend,
        })
    }

    /// Forward DFT of a real signal
    ///
    /// # Errors
    /// `InvalidLength` for an empty signal, `LengthMismatch` if the signal
    /// length differs from the planned size.
    pub fn forward(&mut self, signal: &[f64]) -> Result<Spectrum> {
        self.check_len(signal.len())?;
        let n = self.fft_size;

        let bins = match &mut self.backend {
            Backend::Fast {
                r2c,
                input_buffer,
                half_spectrum,
                ..
            } => {
                input_buffer.copy_from_slice(signal);
                r2c.process(input_buffer, half_spectrum)?;

                // Real input: X[N-k] = conj(X[k])
                let mut bins = Vec::with_capacity(n);
                bins.extend_from_slice(half_spectrum);
                for k in half_spectrum.len()..n {
                    bins.push(half_spectrum[n - k].conj());
                }
                bins
            }
            Backend::Direct { twiddles } => (0..n)
                .map(|k| {
                    let mut acc = Complex::new(0.0, 0.0);
                    let mut idx = 0;
                    for &x in signal {
                        acc += twiddles[idx] * x;
                        idx += k;
                        if idx >= n {
                            idx -= n;
                        }
                    }
                    acc
                })
                .collect(),
        };

        Ok(Spectrum::from_complex(&bins))
    }

    /// Inverse DFT, returning the real part of (1/N) * sum X[k] exp(+2*pi*i*k*n/N)
    ///
    /// The imaginary part vanishes for spectra of real signals and is dropped.
    pub fn inverse(&mut self, spectrum: &Spectrum) -> Result<Vec<f64>> {
        self.check_len(spectrum.len())?;
        let n = self.fft_size;
        let scale = 1.0 / n as f64;

        let signal = match &self.backend {
            Backend::Fast { c2c_inverse, .. } => {
                let mut buffer = spectrum.to_complex();
                c2c_inverse.process(&mut buffer);
                buffer.iter().map(|c| c.re * scale).collect()
            }
            Backend::Direct { twiddles } => {
                let bins = spectrum.to_complex();
                (0..n)
                    .map(|t| {
                        let mut acc = Complex::new(0.0, 0.0);
                        let mut idx = 0;
                        for bin in &bins {
                            acc += bin * twiddles[idx].conj();
                            idx += t;
                            if idx >= n {
                                idx -= n;
                            }
                        }
                        acc.re * scale
                    })
                    .collect()
            }
        };

        Ok(signal)
    }

    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Strategy this engine resolved to (never `Auto`)
    pub fn strategy(&self) -> TransformStrategy {
        self.strategy
    }

    fn check_len(&self, len: usize) -> Result<()> {
        if len == 0 {
            return Err(SpectralError::InvalidLength);
        }
        if len != self.fft_size {
            return Err(SpectralError::LengthMismatch {
                expected: self.fft_size,
                found: len,
            });
        }
        Ok(())
    }
}

/// Forward DFT of a real signal with the default strategy
pub fn fft(signal: &[f64]) -> Result<Spectrum> {
    fft_with(signal, TransformStrategy::Auto)
}

/// Forward DFT of a real signal with an explicit strategy
pub fn fft_with(signal: &[f64], strategy: TransformStrategy) -> Result<Spectrum> {
    FftEngine::new(signal.len(), strategy)?.forward(signal)
}

/// Inverse DFT of a full (natural order) spectrum
pub fn ifft(spectrum: &Spectrum) -> Result<Vec<f64>> {
    FftEngine::new(spectrum.len(), TransformStrategy::Auto)?.inverse(spectrum)
}
