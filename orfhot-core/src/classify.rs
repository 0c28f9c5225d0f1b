use std::fmt;

use crate::orf;
use crate::seq::frame::SixFrames;

/// Minimum ORF length, in nucleotides, for a sequence to count as coding.
pub const DEFAULT_CODING_THRESHOLD: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    Coding,
    Noncoding,
}

impl Classification {
    pub fn is_coding(self) -> bool {
        matches!(self, Classification::Coding)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Coding => "coding",
            Classification::Noncoding => "noncoding",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Noncoding when there is no evidence or the longest ORF is below
/// `threshold`.
pub fn classify(orf_lengths: &[usize], threshold: usize) -> Classification {
    match orf_lengths.iter().max() {
        Some(&longest) if longest >= threshold => Classification::Coding,
        _ => Classification::Noncoding,
    }
}

/// A classification together with the ORF lengths it was derived from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evidence {
    pub classification: Classification,
    pub orf_lengths: Vec<usize>,
}

impl Evidence {
    pub fn new(orf_lengths: Vec<usize>, threshold: usize) -> Self {
        Self {
            classification: classify(&orf_lengths, threshold),
            orf_lengths,
        }
    }

    pub fn from_sequence(seq: &[u8], threshold: usize) -> Self {
        let six = SixFrames::new(seq);
        Self::new(orf::scan_all(&six.frames()), threshold)
    }

    pub fn max_orf(&self) -> Option<usize> {
        self.orf_lengths.iter().copied().max()
    }

    pub fn is_coding(&self) -> bool {
        self.classification.is_coding()
    }
}
