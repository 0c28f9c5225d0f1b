//! Stop-codon scanning.
//!
//! An ORF length here is the distance from the start of one stop codon to
//! the end of the next stop codon in the same frame. There is no start-codon
//! anchoring, so a frame needs at least two stops to contribute evidence.

use crate::seq::frame::Frame;

pub const STOP_CODONS: [&[u8; 3]; 3] = [b"TAA", b"TAG", b"TGA"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StopCodonEvent {
    pub start: usize,
    pub end: usize,
}

#[inline]
pub fn is_stop_codon(codon: &[u8]) -> bool {
    STOP_CODONS.iter().any(|stop| &stop[..] == codon)
}

/// Stop codons of `frame` in discovery order, with frame-relative offsets.
pub fn stop_codon_events(frame: &[u8]) -> Vec<StopCodonEvent> {
    let mut events = Vec::new();
    let mut step = 0usize;
    for codon in frame.chunks_exact(3) {
        let start = step;
        step += 3;
        if is_stop_codon(codon) {
            events.push(StopCodonEvent { start, end: step });
        }
    }
    events
}

/// ORF lengths found in a single frame.
pub fn scan(frame: &[u8]) -> Vec<usize> {
    stop_codon_events(frame)
        .windows(2)
        .map(|pair| pair[1].end - pair[0].start)
        .collect()
}

/// ORF lengths of all frames, concatenated in frame order.
pub fn scan_all(frames: &[Frame<'_>]) -> Vec<usize> {
    frames
        .iter()
        .flat_map(|frame| scan(frame.as_bytes()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::frame::SixFrames;

    #[test]
    fn stop_codon_set() {
        assert!(is_stop_codon(b"TAA"));
        assert!(is_stop_codon(b"TAG"));
        assert!(is_stop_codon(b"TGA"));
        assert!(!is_stop_codon(b"ATG"));
        assert!(!is_stop_codon(b"taa"));
        assert!(!is_stop_codon(b"TA"));
    }

    #[test]
    fn known_frame_events() {
        let events = stop_codon_events(b"AAATAAAAATGA");
        assert_eq!(
            events,
            vec![
                StopCodonEvent { start: 3, end: 6 },
                StopCodonEvent { start: 9, end: 12 },
            ]
        );
        assert_eq!(scan(b"AAATAAAAATGA"), vec![9]);
    }

    #[test]
    fn adjacent_pairs_only() {
        // stops at 0, 6 and 15
        let frame = b"TAAGGGTAGCCCCCCTGA";
        assert_eq!(scan(frame), vec![9, 12]);
    }

    #[test]
    fn single_or_no_stop_contributes_nothing() {
        assert!(scan(b"").is_empty());
        assert!(scan(b"AAACCCGGG").is_empty());
        assert!(scan(b"AAATAGCCC").is_empty());
    }

    #[test]
    fn out_of_frame_stops_ignored() {
        // TAA straddles a codon boundary in frame +1
        assert!(stop_codon_events(b"ATAAGG").is_empty());
    }

    #[test]
    fn trailing_remainder_ignored() {
        assert_eq!(scan(b"TAATAGTA"), vec![6]);
        assert_eq!(stop_codon_events(b"TAATAGTG").len(), 2);
    }

    #[test]
    fn scan_all_concatenates_in_frame_order() {
        // +1: stops at 0 and 3 -> 6; -1 (rc = TTATTA): no stop in frame
        let six = SixFrames::new(b"TAATAA");
        let frames = six.frames();
        assert_eq!(scan_all(&frames), vec![6]);

        // rc of TTATTA is TAATAA, so only -1 contributes
        let six = SixFrames::new(b"TTATTA");
        assert_eq!(scan_all(&six.frames()), vec![6]);
    }

    #[test]
    fn scan_all_empty() {
        let six = SixFrames::new(b"");
        assert!(scan_all(&six.frames()).is_empty());
    }
}
