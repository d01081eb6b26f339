#![allow(dead_code)]

use pyo3::prelude::*;
use pyo3::types::PyModule;
use pyo3::wrap_pymodule;

/// The extension module, initialized in the embedded interpreter.
pub fn module(py: Python<'_>) -> Bound<'_, PyModule> {
    wrap_pymodule!(serialsub_py::serialsub_module)(py).into_bound(py)
}
