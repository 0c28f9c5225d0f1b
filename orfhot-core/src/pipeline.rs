//! Per-record driver: classify, then bucket and encode coding records.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::bucket::BucketSet;
use crate::classify::{Evidence, DEFAULT_CODING_THRESHOLD};
use crate::encode::{self, EncodedMatrix};
use crate::error::{OrfError, OrfResult};
use crate::io::{OnError, SkippedRecord};
use crate::seq::dna::DnaSeq;
use crate::seq::record::SeqRecord;

/// Classification threshold and bucket capacities.
///
/// ```toml
/// coding_threshold = 200
/// buckets = [500, 700, 900]
/// ```
///
/// Missing keys fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub coding_threshold: usize,
    pub buckets: BucketSet,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            coding_threshold: DEFAULT_CODING_THRESHOLD,
            buckets: BucketSet::default(),
        }
    }
}

impl PipelineConfig {
    pub fn new(coding_threshold: usize, buckets: BucketSet) -> Self {
        Self {
            coding_threshold,
            buckets,
        }
    }

    pub fn from_toml_str(text: &str) -> OrfResult<Self> {
        toml::from_str(text).map_err(|e| OrfError::Config(e.to_string()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> OrfResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketedMatrix {
    pub capacity: usize,
    pub matrix: EncodedMatrix,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordOutcome {
    pub id: Box<str>,
    pub length: usize,
    pub unrecognized: usize,
    pub evidence: Evidence,
    /// Present only for coding records.
    pub encoded: Option<BucketedMatrix>,
}

pub fn process_record(
    record: &SeqRecord<DnaSeq>,
    config: &PipelineConfig,
) -> OrfResult<RecordOutcome> {
    let seq = record.seq().as_bytes();
    let evidence = Evidence::from_sequence(seq, config.coding_threshold);
    tracing::debug!(
        id = record.id(),
        length = seq.len(),
        orfs = evidence.orf_lengths.len(),
        max_orf = ?evidence.max_orf(),
        classification = %evidence.classification,
        "classified record"
    );

    let encoded = if evidence.is_coding() {
        let capacity = config.buckets.select(seq.len())?;
        let matrix = encode::encode(seq, capacity)?;
        tracing::debug!(id = record.id(), capacity, "encoded record");
        Some(BucketedMatrix { capacity, matrix })
    } else {
        None
    };

    let unrecognized = match &encoded {
        Some(encoded) => encoded.matrix.unrecognized(),
        None => record.seq().unrecognized_count(),
    };

    Ok(RecordOutcome {
        id: record.id.clone(),
        length: seq.len(),
        unrecognized,
        evidence,
        encoded,
    })
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProcessReport {
    pub outcomes: Vec<RecordOutcome>,
    pub skipped: Vec<SkippedRecord>,
}

impl ProcessReport {
    pub fn coding_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.evidence.is_coding()).count()
    }

    pub fn into_dataset(self) -> BucketedDataset {
        let mut dataset = BucketedDataset::default();
        for outcome in self.outcomes {
            if let Some(encoded) = outcome.encoded {
                dataset.insert(outcome.id, encoded);
            }
        }
        dataset
    }
}

/// Runs [`process_record`] over `records` in order.
///
/// `records` is usually a [`FastaRecords`](crate::io::fasta::FastaRecords)
/// stream, so reader failures arrive as items. A failed item aborts the run
/// under [`OnError::Raise`]; under [`OnError::Skip`] it is listed in
/// `skipped` and processing continues. I/O errors always abort.
pub fn process_records<I>(
    records: I,
    config: &PipelineConfig,
    on_error: OnError,
) -> OrfResult<ProcessReport>
where
    I: IntoIterator<Item = OrfResult<SeqRecord<DnaSeq>>>,
{
    let mut report = ProcessReport::default();
    for (index, item) in records.into_iter().enumerate() {
        let (id, err) = match item {
            Ok(record) => match process_record(&record, config) {
                Ok(outcome) => {
                    report.outcomes.push(outcome);
                    continue;
                }
                Err(err) => (Some(record.id), err),
            },
            Err(err @ OrfError::Io(_)) => return Err(err),
            Err(err) => (err.record_id().map(Box::<str>::from), err),
        };

        match on_error {
            OnError::Raise => return Err(err),
            OnError::Skip => {
                tracing::warn!(index, id = id.as_deref(), error = %err, "skipping record");
                report.skipped.push(SkippedRecord {
                    index,
                    id,
                    message: err.to_string().into_boxed_str(),
                });
            }
        }
    }
    tracing::debug!(
        processed = report.outcomes.len(),
        coding = report.coding_count(),
        skipped = report.skipped.len(),
        "finished records"
    );
    Ok(report)
}

/// Encoded coding records grouped by bucket capacity, ascending.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BucketedDataset {
    buckets: BTreeMap<usize, Vec<(Box<str>, EncodedMatrix)>>,
}

impl BucketedDataset {
    pub fn insert(&mut self, id: Box<str>, encoded: BucketedMatrix) {
        self.buckets
            .entry(encoded.capacity)
            .or_default()
            .push((id, encoded.matrix));
    }

    pub fn capacities(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.keys().copied()
    }

    pub fn bucket(&self, capacity: usize) -> &[(Box<str>, EncodedMatrix)] {
        self.buckets.get(&capacity).map_or(&[][..], Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[(Box<str>, EncodedMatrix)])> + '_ {
        self.buckets.iter().map(|(&c, v)| (c, v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
