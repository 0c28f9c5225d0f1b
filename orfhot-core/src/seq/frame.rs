//! Six-frame view of a nucleotide sequence.
//!
//! Frames +1, +2 and +3 start at offsets 0, 1 and 2 of the input; -1, -2
//! and -3 start at the same offsets of its reverse complement. The order is
//! always +1, +2, +3, -1, -2, -3.

use std::fmt;

use crate::alphabets::dna;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strand {
    Forward,
    Reverse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrameLabel {
    Plus1,
    Plus2,
    Plus3,
    Minus1,
    Minus2,
    Minus3,
}

impl FrameLabel {
    pub const ALL: [FrameLabel; 6] = [
        FrameLabel::Plus1,
        FrameLabel::Plus2,
        FrameLabel::Plus3,
        FrameLabel::Minus1,
        FrameLabel::Minus2,
        FrameLabel::Minus3,
    ];

    pub fn strand(self) -> Strand {
        match self {
            FrameLabel::Plus1 | FrameLabel::Plus2 | FrameLabel::Plus3 => Strand::Forward,
            FrameLabel::Minus1 | FrameLabel::Minus2 | FrameLabel::Minus3 => Strand::Reverse,
        }
    }

    /// Number of leading bases skipped on the frame's strand.
    pub fn offset(self) -> usize {
        match self {
            FrameLabel::Plus1 | FrameLabel::Minus1 => 0,
            FrameLabel::Plus2 | FrameLabel::Minus2 => 1,
            FrameLabel::Plus3 | FrameLabel::Minus3 => 2,
        }
    }
}

impl fmt::Display for FrameLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.strand() {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        };
        write!(f, "{}{}", sign, self.offset() + 1)
    }
}

/// One reading frame: a borrowed suffix of either strand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame<'a> {
    label: FrameLabel,
    bytes: &'a [u8],
}

impl<'a> Frame<'a> {
    pub fn label(&self) -> FrameLabel {
        self.label
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Owns the reverse complement so frames can borrow from both strands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SixFrames<'a> {
    forward: &'a [u8],
    reverse: Vec<u8>,
}

impl<'a> SixFrames<'a> {
    pub fn new(forward: &'a [u8]) -> Self {
        Self {
            forward,
            reverse: dna::reverse_complement(forward),
        }
    }

    pub fn frames(&self) -> [Frame<'_>; 6] {
        FrameLabel::ALL.map(|label| {
            let strand = match label.strand() {
                Strand::Forward => self.forward,
                Strand::Reverse => self.reverse.as_slice(),
            };
            let start = label.offset().min(strand.len());
            Frame {
                label,
                bytes: &strand[start..],
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn frame_order_and_offsets() {
        let six = SixFrames::new(b"ATGCGT");
        let frames = six.frames();
        let labels: Vec<String> = frames.iter().map(|f| f.label().to_string()).collect();
        assert_eq!(labels, ["+1", "+2", "+3", "-1", "-2", "-3"]);

        assert_eq!(frames[0].as_bytes(), b"ATGCGT");
        assert_eq!(frames[1].as_bytes(), b"TGCGT");
        assert_eq!(frames[2].as_bytes(), b"GCGT");
        assert_eq!(frames[3].as_bytes(), b"ACGCAT");
        assert_eq!(frames[4].as_bytes(), b"CGCAT");
        assert_eq!(frames[5].as_bytes(), b"GCAT");
    }

    #[test]
    fn empty_sequence_yields_six_empty_frames() {
        let six = SixFrames::new(b"");
        let frames = six.frames();
        assert_eq!(frames.len(), 6);
        assert!(frames.iter().all(|f| f.is_empty()));
    }

    #[test]
    fn short_sequence_clamps_offsets() {
        let six = SixFrames::new(b"A");
        let frames = six.frames();
        assert_eq!(frames[0].as_bytes(), b"A");
        assert!(frames[1].is_empty());
        assert!(frames[2].is_empty());
        assert_eq!(frames[3].as_bytes(), b"T");
        assert!(frames[5].is_empty());
    }

    #[test]
    fn frames_are_restartable() {
        let six = SixFrames::new(b"GATTACA");
        assert_eq!(six.frames(), six.frames());
    }

    proptest! {
        #[test]
        fn always_six_frames_in_order(
            s in prop::collection::vec(prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')], 0..60),
        ) {
            let six = SixFrames::new(&s);
            let frames = six.frames();
            prop_assert_eq!(frames.len(), 6);
            for (frame, label) in frames.iter().zip(FrameLabel::ALL) {
                prop_assert_eq!(frame.label(), label);
                prop_assert_eq!(frame.len(), s.len().saturating_sub(label.offset()));
            }
        }

        #[test]
        fn reverse_complement_is_involution(
            s in prop::collection::vec(prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T'), Just(b'N')], 0..60),
        ) {
            let rc = dna::reverse_complement(&s);
            prop_assert_eq!(dna::reverse_complement(&rc), s);
        }
    }
}
