use pyo3::prelude::*;

mod dataset;
mod orf;
mod utils;

#[pymodule]
fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    orf::register(m)?;
    dataset::register(m)?;
    Ok(())
}
