//! Error types shared by the ingestor, transformer and post-processor

use thiserror::Error;

/// Minimum number of rows needed to infer a sampling interval
pub const MIN_SAMPLES: usize = 2;

#[derive(Error, Debug)]
pub enum SpectralError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed input on line {line}: {reason}")]
    MalformedInput { line: u64, reason: String },

    #[error("Not enough samples: found {found}, need at least {required}")]
    EmptyInput { found: usize, required: usize },

    #[error("Sequence length must be greater than zero")]
    InvalidLength,

    #[error("Length mismatch: expected {expected} values, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("Sampling interval must be positive and finite (got {0})")]
    InvalidInterval(f64),

    #[error("Sample {index} is not finite")]
    NonFiniteSample { index: usize },

    #[error("Interval tolerance must be non-negative and finite (got {0})")]
    InvalidTolerance(f64),

    #[error("Irregular sampling at sample {index}: expected step {expected}, found {found}")]
    IrregularSampling {
        index: usize,
        expected: f64,
        found: f64,
    },

    #[error("FFT processing failed: {0}")]
    Transform(String),
}

impl From<csv::Error> for SpectralError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|pos| pos.line()).unwrap_or(0);
        let reason = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io) => SpectralError::Io(io),
            _ => SpectralError::MalformedInput { line, reason },
        }
    }
}

impl From<realfft::FftError> for SpectralError {
    fn from(err: realfft::FftError) -> Self {
        SpectralError::Transform(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SpectralError>;
