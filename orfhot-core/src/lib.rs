//! Six-frame stop-codon screening of nucleotide sequences and bucketed
//! one-hot encoding of the ones that look protein-coding.
//!
//! ```
//! use orfhot_core::bucket::BucketSet;
//! use orfhot_core::classify::{Classification, Evidence, DEFAULT_CODING_THRESHOLD};
//! use orfhot_core::encode;
//!
//! let mut seq = b"TAA".to_vec();
//! seq.extend_from_slice(&b"C".repeat(300));
//! seq.extend_from_slice(b"TGA");
//!
//! let evidence = Evidence::from_sequence(&seq, DEFAULT_CODING_THRESHOLD);
//! assert_eq!(evidence.classification, Classification::Coding);
//!
//! let capacity = BucketSet::default().select(seq.len()).unwrap();
//! let matrix = encode::encode(&seq, capacity).unwrap();
//! assert_eq!(matrix.shape(), (500, 4));
//! ```

pub mod alphabets;
pub mod bucket;
pub mod classify;
pub mod encode;
pub mod error;
pub mod io;
pub mod orf;
pub mod pipeline;
pub mod seq;
