//! Python bindings for the numeric API

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::ingest;
use crate::spectrum::{self, Spectrum};

/// Read a two-column (time, amplitude) CSV file
///
/// Returns:
///     Tuple of (time, amplitude) numpy arrays
#[pyfunction]
fn read_series<'py>(py: Python<'py>, path: String) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let (time, amplitude) = ingest::read_series(path)?.into_parts();
    Ok((PyArray1::from_vec(py, time), PyArray1::from_vec(py, amplitude)))
}

/// Forward FFT of a real signal
///
/// Returns:
///     Tuple of (real, imag) numpy arrays in natural bin order
#[pyfunction]
fn fft<'py>(py: Python<'py>, data: Vec<f64>) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let (real, imag) = spectrum::fft(&data)?.into_parts();
    Ok((PyArray1::from_vec(py, real), PyArray1::from_vec(py, imag)))
}

/// Inverse FFT of a natural-order spectrum
#[pyfunction]
fn ifft<'py>(py: Python<'py>, real: Vec<f64>, imag: Vec<f64>) -> PyResult<&'py PyArray1<f64>> {
    let signal = spectrum::ifft(&Spectrum::from_parts(real, imag)?)?;
    Ok(PyArray1::from_vec(py, signal))
}

/// Elementwise magnitude of (real, imag)
#[pyfunction]
fn magnitude<'py>(py: Python<'py>, real: Vec<f64>, imag: Vec<f64>) -> PyResult<&'py PyArray1<f64>> {
    Ok(PyArray1::from_vec(py, spectrum::magnitude(&real, &imag)?))
}

/// Natural-order bin frequencies k / (N * dt)
#[pyfunction]
fn frequencies<'py>(py: Python<'py>, len: usize, sampling_interval: f64) -> PyResult<&'py PyArray1<f64>> {
    Ok(PyArray1::from_vec(py, spectrum::frequencies(len, sampling_interval)?))
}

/// Centered frequency axis, aligned with fft_shift_pair output
#[pyfunction]
fn shifted_frequencies<'py>(
    py: Python<'py>,
    len: usize,
    sampling_interval: f64,
) -> PyResult<&'py PyArray1<f64>> {
    Ok(PyArray1::from_vec(py, spectrum::shifted_frequencies(len, sampling_interval)?))
}

/// Move the zero-frequency element to the center
#[pyfunction]
fn fft_shift<'py>(py: Python<'py>, data: Vec<f64>) -> PyResult<&'py PyArray1<f64>> {
    Ok(PyArray1::from_vec(py, spectrum::fft_shift(&data)))
}

/// Shift real and imaginary parts together
#[pyfunction]
fn fft_shift_pair<'py>(
    py: Python<'py>,
    real: Vec<f64>,
    imag: Vec<f64>,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let (real, imag) = spectrum::fft_shift_pair(&real, &imag)?;
    Ok((PyArray1::from_vec(py, real), PyArray1::from_vec(py, imag)))
}

pub(super) fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(read_series, m)?)?;
    m.add_function(wrap_pyfunction!(fft, m)?)?;
    m.add_function(wrap_pyfunction!(ifft, m)?)?;
    m.add_function(wrap_pyfunction!(magnitude, m)?)?;
    m.add_function(wrap_pyfunction!(frequencies, m)?)?;
    m.add_function(wrap_pyfunction!(shifted_frequencies, m)?)?;
    m.add_function(wrap_pyfunction!(fft_shift, m)?)?;
    m.add_function(wrap_pyfunction!(fft_shift_pair, m)?)?;
    Ok(())
}
