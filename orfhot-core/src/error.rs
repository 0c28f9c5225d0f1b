use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrfError {
    #[error("no bucket fits a sequence of length {length} (largest capacity is {largest})")]
    NoBucketFound { length: usize, largest: usize },

    #[error("sequence of length {length} does not fit capacity {capacity}")]
    SequenceTooLong { length: usize, capacity: usize },

    #[error("bucket list is empty")]
    EmptyBuckets,

    #[error("bucket list is not strictly ascending at index {index}")]
    UnsortedBuckets { index: usize },

    #[error("bucket capacity must be greater than zero")]
    ZeroCapacity,

    #[error("invalid character '{ch}' at position {pos}")]
    InvalidChar { ch: char, pos: usize },

    #[error("fasta format error at line {line}: {msg}")]
    FastaFormat { msg: &'static str, line: usize },

    #[error("invalid sequence for record '{id}' at line {line}: {source}")]
    FastaInvalidSequence {
        id: Box<str>,
        line: usize,
        #[source]
        source: Box<OrfError>,
    },

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("report csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl OrfError {
    /// Record id attached to a per-record reader failure.
    pub fn record_id(&self) -> Option<&str> {
        match self {
            OrfError::FastaInvalidSequence { id, .. } => Some(id.as_ref()),
            _ => None,
        }
    }
}

pub type OrfResult<T> = Result<T, OrfError>;
