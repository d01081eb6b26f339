mod pybench;
mod pyrules;

pub use pybench::{benchmark, check_thread_safety, compare_with_baseline, faster_than_baseline};
pub use pyrules::{TruncatedScalarError, batch_replace, serialized_batch_replace, serialized_replace};

use pyo3::prelude::*;

/// The `serialsub` Python module.
#[pymodule]
#[pyo3(name = "serialsub")]
pub fn serialsub_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(batch_replace, m)?)?;
    m.add_function(wrap_pyfunction!(serialized_replace, m)?)?;
    m.add_function(wrap_pyfunction!(serialized_batch_replace, m)?)?;
    m.add_function(wrap_pyfunction!(benchmark, m)?)?;
    m.add_function(wrap_pyfunction!(compare_with_baseline, m)?)?;
    m.add_function(wrap_pyfunction!(faster_than_baseline, m)?)?;
    m.add_function(wrap_pyfunction!(check_thread_safety, m)?)?;
    m.add("TruncatedScalarError", m.py().get_type::<TruncatedScalarError>())?;
    m.add("VERSION", serialsub::VERSION)?;
    m.add("THREAD_SAFE", serialsub::THREAD_SAFE)?;
    Ok(())
}
