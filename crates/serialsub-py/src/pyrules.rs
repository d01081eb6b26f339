use pyo3::create_exception;
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PySequence, PyString};
use serialsub::{ArgumentError, ReplaceError, ReplaceOptions, ReplacementRule, RuleSet};

create_exception!(
    serialsub,
    TruncatedScalarError,
    PyValueError,
    "A serialized string scalar declares more bytes than remain, or is not closed by `\";`."
);

pub(crate) fn to_py_err(err: ReplaceError) -> PyErr {
    match err {
        ReplaceError::InvalidArgument(_) => PyValueError::new_err(err.to_string()),
        ReplaceError::TruncatedScalar { .. } => TruncatedScalarError::new_err(err.to_string()),
    }
}

/// Borrow the bytes of a `str` (as UTF-8) or `bytes` argument. The flag is
/// `true` for `str`, so results can be handed back as the same type.
pub(crate) fn arg_bytes<'a>(obj: &'a Bound<'_, PyAny>) -> PyResult<(&'a [u8], bool)> {
    if let Ok(s) = obj.downcast::<PyString>() {
        return Ok((s.to_str()?.as_bytes(), true));
    }
    if let Ok(b) = obj.downcast::<PyBytes>() {
        return Ok((b.as_bytes(), false));
    }
    Err(PyTypeError::new_err(format!(
        "expected str or bytes, got {}",
        obj.get_type().name()?
    )))
}

/// Turn a result buffer back into `str` when the input was `str` and the
/// output is still valid UTF-8, otherwise into `bytes`.
pub(crate) fn to_py_output(py: Python<'_>, out: Vec<u8>, as_text: bool) -> Bound<'_, PyAny> {
    if as_text {
        match String::from_utf8(out) {
            Ok(text) => PyString::new(py, &text).into_any(),
            Err(err) => PyBytes::new(py, err.as_bytes()).into_any(),
        }
    } else {
        PyBytes::new(py, &out).into_any()
    }
}

/// Convert a Python sequence of `(pattern, replacement)` pairs.
pub(crate) fn extract_rules(rules: &Bound<'_, PyAny>, options: ReplaceOptions) -> PyResult<RuleSet> {
    let mut collected = Vec::new();
    for (index, item) in rules.try_iter()?.enumerate() {
        let item = item?;
        let malformed = || to_py_err(ArgumentError::MalformedRule { index }.into());
        if item.is_instance_of::<PyString>() || item.is_instance_of::<PyBytes>() {
            return Err(malformed());
        }
        let pair = item.downcast::<PySequence>().map_err(|_| malformed())?;
        if pair.len()? != 2 {
            return Err(malformed());
        }
        let (pattern, replacement) = (pair.get_item(0)?, pair.get_item(1)?);
        collected.push(ReplacementRule::new(
            arg_bytes(&pattern)?.0,
            arg_bytes(&replacement)?.0,
        ));
    }
    RuleSet::with_options(collected, options).map_err(to_py_err)
}

/// Replace every `(pattern, replacement)` pair in `input` in one pass.
///
/// Earlier pairs win when several match at the same position; replacement
/// text is never re-scanned. Returns `str` for `str` input, `bytes` otherwise.
#[pyfunction]
#[pyo3(signature = (input, rules, *, case_insensitive = false))]
pub fn batch_replace<'py>(
    py: Python<'py>,
    input: &Bound<'py, PyAny>,
    rules: &Bound<'py, PyAny>,
    case_insensitive: bool,
) -> PyResult<Bound<'py, PyAny>> {
    let rules = extract_rules(rules, ReplaceOptions { case_insensitive })?;
    let (input, as_text) = arg_bytes(input)?;
    let out = py.allow_threads(|| rules.apply(input));
    Ok(to_py_output(py, out, as_text))
}

/// Replace `old` with `new` inside PHP-serialized string scalars, fixing
/// their `s:<N>:` length prefixes.
#[pyfunction]
#[pyo3(signature = (blob, old, new, *, case_insensitive = false))]
pub fn serialized_replace<'py>(
    py: Python<'py>,
    blob: &Bound<'py, PyAny>,
    old: &Bound<'py, PyAny>,
    new: &Bound<'py, PyAny>,
    case_insensitive: bool,
) -> PyResult<Bound<'py, PyAny>> {
    let (blob, as_text) = arg_bytes(blob)?;
    let (old, _) = arg_bytes(old)?;
    let (new, _) = arg_bytes(new)?;
    let options = ReplaceOptions { case_insensitive };
    let out = py
        .allow_threads(|| serialsub::serialized_replace_with(blob, old, new, options))
        .map_err(to_py_err)?;
    Ok(to_py_output(py, out, as_text))
}

/// Apply many `(pattern, replacement)` pairs inside every serialized string
/// scalar in one pass.
#[pyfunction]
#[pyo3(signature = (blob, rules, *, case_insensitive = false))]
pub fn serialized_batch_replace<'py>(
    py: Python<'py>,
    blob: &Bound<'py, PyAny>,
    rules: &Bound<'py, PyAny>,
    case_insensitive: bool,
) -> PyResult<Bound<'py, PyAny>> {
    let rules = extract_rules(rules, ReplaceOptions { case_insensitive })?;
    let (blob, as_text) = arg_bytes(blob)?;
    let out = py
        .allow_threads(|| serialsub::serialized_batch_replace(blob, &rules))
        .map_err(to_py_err)?;
    Ok(to_py_output(py, out, as_text))
}
