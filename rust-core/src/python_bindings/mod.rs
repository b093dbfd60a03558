//! PyO3 bindings for Python integration

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::error::SpectralError;

mod analyzer_bindings;
mod function_bindings;

impl From<SpectralError> for PyErr {
    fn from(err: SpectralError) -> Self {
        match err {
            SpectralError::Io(_) => PyIOError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Python module definition
#[pymodule]
fn spectra(_py: Python, m: &PyModule) -> PyResult<()> {
    function_bindings::register(m)?;
    m.add_class::<analyzer_bindings::PySpectrumAnalyzer>()?;
    m.add_class::<analyzer_bindings::PyWindowType>()?;

    Ok(())
}
