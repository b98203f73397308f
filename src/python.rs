//! Python bindings
//!
//! Thin pyo3 wrappers around the word similarity functions. Argument errors
//! surface as `ValidationError`, a subclass of `FuzzyTrgmError`.

use crate::algorithms::{self, ScanMode, TrigramConfig, WordSimilarity, WordSimilarityConfig};
use crate::error::WordSimilarityError;
use pyo3::create_exception;
use pyo3::prelude::*;

create_exception!(fuzzytrgm, FuzzyTrgmError, pyo3::exceptions::PyException);
create_exception!(fuzzytrgm, ValidationError, FuzzyTrgmError);

impl From<WordSimilarityError> for PyErr {
    fn from(err: WordSimilarityError) -> Self {
        ValidationError::new_err(err.to_string())
    }
}

fn build_config(threshold: f64, exact: bool, right_padding: usize) -> PyResult<WordSimilarityConfig> {
    let config = WordSimilarityConfig {
        threshold,
        mode: if exact { ScanMode::Exact } else { ScanMode::CheckOnly },
        trigram: TrigramConfig {
            right_padding,
            ..Default::default()
        },
    };
    config.validate()?;
    Ok(config)
}

/// Compute the word similarity of `a` within `b` (0.0 to 1.0).
///
/// # Arguments
/// * `exact` - Return the true maximum (default). With `exact=False` the scan
///   stops once `threshold` is exceeded.
/// * `right_padding` - Blanks appended after each word (1 or 2)
#[pyfunction]
#[pyo3(signature = (a, b, threshold=0.6, exact=true, right_padding=1))]
fn word_similarity(
    a: &str,
    b: &str,
    threshold: f64,
    exact: bool,
    right_padding: usize,
) -> PyResult<f64> {
    let config = build_config(threshold, exact, right_padding)?;
    Ok(algorithms::word_similarity_with(a, b, &config))
}

/// Check whether `a` occurs in `b` with a word similarity of at least `threshold`.
#[pyfunction]
#[pyo3(signature = (a, b, threshold=0.6))]
fn word_similarity_match(a: &str, b: &str, threshold: f64) -> PyResult<bool> {
    let config = build_config(threshold, false, 1)?;
    Ok(WordSimilarity::try_from_config(config)?.is_match(a, b))
}

/// Word similarity distance (1.0 - word_similarity).
#[pyfunction]
fn word_similarity_distance(a: &str, b: &str) -> f64 {
    algorithms::word_similarity_distance(a, b)
}

/// Extract the padded trigrams of `s`, in order and with duplicates.
#[pyfunction]
#[pyo3(signature = (s, right_padding=1))]
fn extract_trigrams(s: &str, right_padding: usize) -> PyResult<Vec<String>> {
    let config = build_config(0.6, true, right_padding)?;
    Ok(algorithms::extract_trigrams_with(s, &config.trigram)
        .into_iter()
        .map(String::from)
        .collect())
}

/// Extract the distinct padded trigrams of `s`.
#[pyfunction]
#[pyo3(signature = (s, right_padding=1))]
fn extract_trigram_set(s: &str, right_padding: usize) -> PyResult<Vec<String>> {
    let config = build_config(0.6, true, right_padding)?;
    let mut trigrams: Vec<String> = algorithms::extract_trigram_set(s, &config.trigram)
        .into_iter()
        .map(String::from)
        .collect();
    trigrams.sort_unstable();
    Ok(trigrams)
}

#[pymodule]
fn fuzzytrgm(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("FuzzyTrgmError", py.get_type::<FuzzyTrgmError>())?;
    m.add("ValidationError", py.get_type::<ValidationError>())?;

    m.add_function(wrap_pyfunction!(word_similarity, m)?)?;
    m.add_function(wrap_pyfunction!(word_similarity_match, m)?)?;
    m.add_function(wrap_pyfunction!(word_similarity_distance, m)?)?;
    m.add_function(wrap_pyfunction!(extract_trigrams, m)?)?;
    m.add_function(wrap_pyfunction!(extract_trigram_set, m)?)?;

    Ok(())
}
