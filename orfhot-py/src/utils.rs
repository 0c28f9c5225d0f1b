use pyo3::exceptions::{PyIOError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyString;

use orfhot_core::bucket::BucketSet;
use orfhot_core::error::OrfError;

pub fn extract_seq_bytes(obj: &Bound<'_, PyAny>) -> PyResult<Vec<u8>> {
    if let Ok(s) = obj.downcast::<PyString>() {
        return Ok(s.to_str()?.as_bytes().to_vec());
    }

    obj.extract::<Vec<u8>>()
        .map_err(|_| PyTypeError::new_err("expected str or bytes-like object"))
}

pub fn to_py_err(err: OrfError) -> PyErr {
    match err {
        OrfError::Io(io) => PyIOError::new_err(io.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

pub fn bucket_set(capacities: Option<Vec<usize>>) -> PyResult<BucketSet> {
    match capacities {
        Some(capacities) => BucketSet::new(capacities).map_err(to_py_err),
        None => Ok(BucketSet::default()),
    }
}
