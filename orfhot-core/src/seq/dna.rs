use crate::alphabets::dna;
use crate::error::{OrfError, OrfResult};
use crate::seq::traits::SeqBytes;

/// Nucleotide bytes as read from the input. Any ASCII byte is kept; bases
/// outside A/C/G/T are tolerated and handled by each consumer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DnaSeq {
    bytes: Vec<u8>,
}

impl DnaSeq {
    pub fn new(bytes: Vec<u8>) -> OrfResult<Self> {
        if let Some(pos) = bytes.iter().position(|b| !b.is_ascii()) {
            return Err(OrfError::InvalidChar {
                ch: char_at(&bytes, pos),
                pos,
            });
        }
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn reverse_complement(&self) -> Self {
        let out = dna::reverse_complement(self.as_bytes());
        Self { bytes: out }
    }

    /// Number of bytes that are not A, C, G or T.
    pub fn unrecognized_count(&self) -> usize {
        dna::unrecognized_count(self.as_bytes())
    }
}

/// Character starting at byte `pos`, or U+FFFD when the bytes there are not
/// valid UTF-8.
fn char_at(bytes: &[u8], pos: usize) -> char {
    let end = bytes.len().min(pos + 4);
    String::from_utf8_lossy(&bytes[pos..end])
        .chars()
        .next()
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

impl SeqBytes for DnaSeq {
    fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn from_bytes(bytes: Vec<u8>) -> OrfResult<Self> {
        DnaSeq::new(bytes)
    }
}

impl TryFrom<&str> for DnaSeq {
    type Error = OrfError;

    fn try_from(value: &str) -> OrfResult<Self> {
        DnaSeq::new(value.as_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ambiguous_bases() {
        let s = DnaSeq::new(b"ACGNRT".to_vec()).unwrap();
        assert_eq!(s.len(), 6);
        assert_eq!(s.unrecognized_count(), 2);
    }

    #[test]
    fn rejects_non_ascii() {
        let err = DnaSeq::try_from("ACÉ").unwrap_err();
        match err {
            OrfError::InvalidChar { ch, pos } => {
                assert_eq!(ch, 'É');
                assert_eq!(pos, 2);
            }
            other => panic!("expected invalid char error, got {other:?}"),
        }
    }

    #[test]
    fn reverse_complement_roundtrip() {
        let s = DnaSeq::try_from("GATTACA").unwrap();
        assert_eq!(s.reverse_complement().as_bytes(), b"TGTAATC");
        assert_eq!(s.reverse_complement().reverse_complement(), s);
    }

    #[test]
    fn invalid_utf8_reports_replacement_char() {
        let err = DnaSeq::new(b"A\xffC".to_vec()).unwrap_err();
        assert!(matches!(
            err,
            OrfError::InvalidChar {
                ch: char::REPLACEMENT_CHARACTER,
                pos: 1
            }
        ));
    }

    #[test]
    fn empty_sequence() {
        let s = DnaSeq::new(Vec::new()).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.unrecognized_count(), 0);
    }
}
