use std::thread;
use std::time::{Duration, Instant};

use pyo3::prelude::*;
use pyo3::types::PyDict;
use serialsub::{ReplaceOptions, RuleSet, baseline::sequential_replace};

use crate::pyrules::{arg_bytes, extract_rules, to_py_output};

struct Timings {
    baseline: Duration,
    engine: Duration,
}

fn time_both(input: &[u8], rules: &RuleSet, iterations: usize) -> Timings {
    let start = Instant::now();
    for _ in 0..iterations {
        std::hint::black_box(sequential_replace(input, rules));
    }
    let baseline = start.elapsed();

    let start = Instant::now();
    for _ in 0..iterations {
        std::hint::black_box(rules.apply(input));
    }
    let engine = start.elapsed();

    Timings { baseline, engine }
}

/// Run `batch_replace` `iterations` times and return the last result, or
/// `None` when `iterations` is zero.
#[pyfunction]
pub fn benchmark<'py>(
    py: Python<'py>,
    iterations: usize,
    input: &Bound<'py, PyAny>,
    rules: &Bound<'py, PyAny>,
) -> PyResult<Option<Bound<'py, PyAny>>> {
    let rules = extract_rules(rules, ReplaceOptions::default())?;
    let (input, as_text) = arg_bytes(input)?;
    let last = py.allow_threads(|| (0..iterations).map(|_| rules.apply(input)).last());
    Ok(last.map(|out| to_py_output(py, out, as_text)))
}

/// Time the one-pass engine against applying each pair in turn.
///
/// Returns a dict with `baseline` and `engine` wall-clock seconds and their
/// ratio as `speedup`.
#[pyfunction]
#[pyo3(signature = (input, rules, iterations = 1000))]
pub fn compare_with_baseline<'py>(
    py: Python<'py>,
    input: &Bound<'py, PyAny>,
    rules: &Bound<'py, PyAny>,
    iterations: usize,
) -> PyResult<Bound<'py, PyDict>> {
    let rules = extract_rules(rules, ReplaceOptions::default())?;
    let (input, _) = arg_bytes(input)?;
    let timings = py.allow_threads(|| time_both(input, &rules, iterations));

    let engine = timings.engine.as_secs_f64();
    let baseline = timings.baseline.as_secs_f64();
    let result = PyDict::new(py);
    result.set_item("baseline", baseline)?;
    result.set_item("engine", engine)?;
    result.set_item("speedup", if engine > 0.0 { baseline / engine } else { f64::INFINITY })?;
    Ok(result)
}

/// `True` if, over 100 runs, the engine beat the rule-by-rule baseline on
/// this workload.
#[pyfunction]
pub fn faster_than_baseline<'py>(
    py: Python<'py>,
    input: &Bound<'py, PyAny>,
    rules: &Bound<'py, PyAny>,
) -> PyResult<bool> {
    let rules = extract_rules(rules, ReplaceOptions::default())?;
    let (input, _) = arg_bytes(input)?;
    let timings = py.allow_threads(|| time_both(input, &rules, 100));
    Ok(timings.engine < timings.baseline)
}

/// Run `batch_replace` from `threads` threads at once, `iterations` times
/// each, and report whether every thread produced the expected output.
#[pyfunction]
#[pyo3(signature = (threads = 10, iterations = 1000))]
pub fn check_thread_safety(py: Python<'_>, threads: usize, iterations: usize) -> PyResult<bool> {
    const INPUT: &str = "This is old1 test string with old2 and old3 values";
    const EXPECTED: &[u8] = b"This is new1 test string with new2 and new3 values";

    let rules = RuleSet::new([("old1", "new1"), ("old2", "new2"), ("old3", "new3")])
        .map_err(crate::pyrules::to_py_err)?;
    let ok = py.allow_threads(|| {
        thread::scope(|scope| {
            let workers: Vec<_> = (0..threads)
                .map(|_| {
                    scope.spawn(|| {
                        (0..iterations).all(|_| rules.apply(INPUT) == EXPECTED)
                    })
                })
                .collect();
            workers
                .into_iter()
                .all(|worker| worker.join().unwrap_or(false))
        })
    });
    Ok(ok)
}
