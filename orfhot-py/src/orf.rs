use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::utils::{self, to_py_err};
use orfhot_core::classify::{classify as classify_lengths, DEFAULT_CODING_THRESHOLD};
use orfhot_core::encode::{decode_rows, encode as encode_matrix, OneHotRow};
use orfhot_core::orf;
use orfhot_core::seq::dna::DnaSeq;
use orfhot_core::seq::frame::SixFrames;

fn ascii_string(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[pyfunction]
fn reverse_complement(seq: &Bound<'_, PyAny>) -> PyResult<String> {
    let seq = DnaSeq::new(utils::extract_seq_bytes(seq)?).map_err(to_py_err)?;
    Ok(ascii_string(seq.reverse_complement().as_bytes()))
}

/// `(label, frame)` pairs in the order +1, +2, +3, -1, -2, -3.
#[pyfunction]
fn frames(seq: &Bound<'_, PyAny>) -> PyResult<Vec<(String, String)>> {
    let bytes = utils::extract_seq_bytes(seq)?;
    let six = SixFrames::new(&bytes);
    Ok(six
        .frames()
        .iter()
        .map(|f| (f.label().to_string(), ascii_string(f.as_bytes())))
        .collect())
}

#[pyfunction]
fn scan_frame(frame: &Bound<'_, PyAny>) -> PyResult<Vec<usize>> {
    Ok(orf::scan(&utils::extract_seq_bytes(frame)?))
}

#[pyfunction]
fn scan_orfs(seq: &Bound<'_, PyAny>) -> PyResult<Vec<usize>> {
    let bytes = utils::extract_seq_bytes(seq)?;
    let six = SixFrames::new(&bytes);
    Ok(orf::scan_all(&six.frames()))
}

#[pyfunction]
#[pyo3(signature = (orf_lengths, threshold = DEFAULT_CODING_THRESHOLD))]
fn classify(orf_lengths: Vec<usize>, threshold: usize) -> &'static str {
    classify_lengths(&orf_lengths, threshold).as_str()
}

#[pyfunction]
#[pyo3(signature = (length, capacities = None))]
fn select_bucket(length: usize, capacities: Option<Vec<usize>>) -> PyResult<usize> {
    utils::bucket_set(capacities)?
        .select(length)
        .map_err(to_py_err)
}

#[pyfunction]
fn encode(seq: &Bound<'_, PyAny>, capacity: usize) -> PyResult<Vec<OneHotRow>> {
    let bytes = utils::extract_seq_bytes(seq)?;
    let matrix = encode_matrix(&bytes, capacity).map_err(to_py_err)?;
    Ok(matrix.rows().to_vec())
}

#[pyfunction]
fn decode(rows: Vec<OneHotRow>) -> String {
    ascii_string(&decode_rows(&rows))
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(reverse_complement, m)?)?;
    m.add_function(wrap_pyfunction!(frames, m)?)?;
    m.add_function(wrap_pyfunction!(scan_frame, m)?)?;
    m.add_function(wrap_pyfunction!(scan_orfs, m)?)?;
    m.add_function(wrap_pyfunction!(classify, m)?)?;
    m.add_function(wrap_pyfunction!(select_bucket, m)?)?;
    m.add_function(wrap_pyfunction!(encode, m)?)?;
    m.add_function(wrap_pyfunction!(decode, m)?)?;
    m.add("DEFAULT_CODING_THRESHOLD", DEFAULT_CODING_THRESHOLD)?;
    m.add("DEFAULT_BUCKETS", orfhot_core::bucket::DEFAULT_BUCKETS.to_vec())?;
    Ok(())
}
