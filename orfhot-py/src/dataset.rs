use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList, PyModule};

use crate::utils::{self, to_py_err};
use orfhot_core::classify::DEFAULT_CODING_THRESHOLD;
use orfhot_core::io::fasta;
use orfhot_core::io::{OnError, SkippedRecord as CoreSkippedRecord};
use orfhot_core::pipeline::{self, PipelineConfig};
use orfhot_core::seq::dna::DnaSeq;

#[pyclass(frozen)]
#[derive(Clone)]
pub struct SkippedRecord {
    pub(crate) index: usize,
    pub(crate) id: Option<String>,
    pub(crate) message: String,
}

#[pymethods]
impl SkippedRecord {
    #[getter]
    fn index(&self) -> usize {
        self.index
    }

    #[getter]
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[getter]
    fn message(&self) -> &str {
        &self.message
    }

    fn __repr__(&self) -> PyResult<String> {
        let id = match &self.id {
            Some(id) => format!("{id:?}"),
            None => "None".to_string(),
        };
        Ok(format!(
            "SkippedRecord(index={}, id={}, message={:?})",
            self.index, id, self.message
        ))
    }
}

impl From<CoreSkippedRecord> for SkippedRecord {
    fn from(value: CoreSkippedRecord) -> Self {
        Self {
            index: value.index,
            id: value.id.map(String::from),
            message: value.message.to_string(),
        }
    }
}

/// Classify every record of a FASTA file and encode the coding ones.
///
/// Returns `(dataset, skipped)` where `dataset` maps bucket capacity to a
/// list of `(id, rows)` pairs.
#[pyfunction]
#[pyo3(signature = (path, threshold = DEFAULT_CODING_THRESHOLD, buckets = None, skip_errors = true))]
fn process_fasta<'py>(
    py: Python<'py>,
    path: &str,
    threshold: usize,
    buckets: Option<Vec<usize>>,
    skip_errors: bool,
) -> PyResult<(Bound<'py, PyDict>, Vec<SkippedRecord>)> {
    let config = PipelineConfig::new(threshold, utils::bucket_set(buckets)?);
    let on_error = if skip_errors {
        OnError::Skip
    } else {
        OnError::Raise
    };

    let records = fasta::fasta_records_from_path::<DnaSeq>(path).map_err(to_py_err)?;
    let mut report = py
        .allow_threads(|| pipeline::process_records(records, &config, on_error))
        .map_err(to_py_err)?;
    let skipped = std::mem::take(&mut report.skipped);

    let out = PyDict::new_bound(py);
    for (capacity, entries) in report.into_dataset().iter() {
        let list = PyList::empty_bound(py);
        for (id, matrix) in entries {
            list.append((id.to_string(), matrix.rows().to_vec()))?;
        }
        out.set_item(capacity, list)?;
    }

    Ok((out, skipped.into_iter().map(SkippedRecord::from).collect()))
}

#[pyfunction]
fn count_records(path: &str) -> PyResult<usize> {
    fasta::count_records_from_path(path).map_err(to_py_err)
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<SkippedRecord>()?;
    m.add_function(wrap_pyfunction!(process_fasta, m)?)?;
    m.add_function(wrap_pyfunction!(count_records, m)?)?;
    Ok(())
}
