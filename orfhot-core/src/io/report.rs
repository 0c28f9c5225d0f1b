use crate::error::OrfResult;
use crate::pipeline::RecordOutcome;
use csv::{Writer, WriterBuilder};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    id: &'a str,
    classification: &'static str,
    orf_count: usize,
    max_orf: Option<usize>,
    length: usize,
    bucket: Option<usize>,
    unrecognized: usize,
}

impl<'a> From<&'a RecordOutcome> for ReportRow<'a> {
    fn from(outcome: &'a RecordOutcome) -> Self {
        Self {
            id: &outcome.id,
            classification: outcome.evidence.classification.as_str(),
            orf_count: outcome.evidence.orf_lengths.len(),
            max_orf: outcome.evidence.max_orf(),
            length: outcome.length,
            bucket: outcome.encoded.as_ref().map(|e| e.capacity),
            unrecognized: outcome.unrecognized,
        }
    }
}

/// One CSV row per processed record, header row first.
pub struct ReportWriter<W: Write> {
    inner: Writer<W>,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W) -> Self {
        let inner = WriterBuilder::new().has_headers(true).from_writer(writer);
        Self { inner }
    }

    pub fn write(&mut self, outcome: &RecordOutcome) -> OrfResult<()> {
        self.inner.serialize(ReportRow::from(outcome))?;
        Ok(())
    }

    pub fn finish(mut self) -> OrfResult<W> {
        self.inner.flush()?;
        self.inner
            .into_inner()
            .map_err(|e| e.into_error().into())
    }
}

pub fn write_report<'a, W: Write>(
    writer: W,
    outcomes: impl IntoIterator<Item = &'a RecordOutcome>,
) -> OrfResult<W> {
    let mut report = ReportWriter::new(writer);
    for outcome in outcomes {
        report.write(outcome)?;
    }
    report.finish()
}

pub fn write_report_to_path<'a>(
    path: impl AsRef<Path>,
    outcomes: impl IntoIterator<Item = &'a RecordOutcome>,
) -> OrfResult<()> {
    let file = File::create(path)?;
    write_report(file, outcomes)?;
    Ok(())
}
