//! FASTA reader yielding one record per `>` header.
//!
//! Sequence lines following a header are joined with all whitespace
//! removed. Blank lines before the first header are ignored.

use crate::error::{OrfError, OrfResult};
use crate::seq::record::SeqRecord;
use crate::seq::traits::SeqBytes;
use memchr::memchr_iter;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::marker::PhantomData;
use std::path::Path;

struct HeaderLine {
    text: Vec<u8>,
    line_no: usize,
}

/// Streaming FASTA reader.
///
/// A record whose header or sequence is invalid yields an error and the
/// reader moves on to the next header. An I/O error ends the iteration.
pub struct FastaRecords<R, S> {
    reader: R,
    line_no: usize,
    line: Vec<u8>,
    pending: Option<HeaderLine>,
    seq_buf: Vec<u8>,
    failed: bool,
    _marker: PhantomData<S>,
}

impl<R: BufRead, S: SeqBytes> FastaRecords<R, S> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            line: Vec::new(),
            pending: None,
            seq_buf: Vec::new(),
            failed: false,
            _marker: PhantomData,
        }
    }

    /// Reads the next line into `self.line`. `Ok(false)` at end of input.
    fn advance(&mut self) -> OrfResult<bool> {
        self.line.clear();
        let n = self.reader.read_until(b'\n', &mut self.line)?;
        if n > 0 {
            self.line_no += 1;
        }
        Ok(n > 0)
    }

    fn at_header(&self) -> bool {
        self.line.first() == Some(&b'>')
    }

    fn take_header_line(&mut self) -> HeaderLine {
        HeaderLine {
            text: std::mem::take(&mut self.line),
            line_no: self.line_no,
        }
    }

    fn next_header(&mut self) -> OrfResult<Option<HeaderLine>> {
        if let Some(pending) = self.pending.take() {
            return Ok(Some(pending));
        }

        while self.advance()? {
            if self.at_header() {
                return Ok(Some(self.take_header_line()));
            }
            if !self.line.iter().all(u8::is_ascii_whitespace) {
                return Err(OrfError::FastaFormat {
                    msg: "expected header line starting with '>'",
                    line: self.line_no,
                });
            }
        }
        Ok(None)
    }

    /// Collects sequence lines up to the next header or end of input.
    fn read_sequence(&mut self) -> OrfResult<Vec<u8>> {
        self.seq_buf.clear();
        while self.advance()? {
            if self.at_header() {
                self.pending = Some(self.take_header_line());
                break;
            }
            self.seq_buf.extend(
                self.line
                    .iter()
                    .copied()
                    .filter(|b| !b.is_ascii_whitespace()),
            );
        }
        Ok(std::mem::take(&mut self.seq_buf))
    }

    fn read_record(&mut self) -> OrfResult<Option<SeqRecord<S>>> {
        let Some(header) = self.next_header()? else {
            return Ok(None);
        };
        // sequence lines are consumed even when the header is rejected
        let bytes = self.read_sequence()?;
        let (id, desc) = parse_header(&header.text, header.line_no)?;
        match S::from_bytes(bytes) {
            Ok(seq) => Ok(Some(SeqRecord { id, desc, seq })),
            Err(err) => Err(OrfError::FastaInvalidSequence {
                id,
                line: header.line_no,
                source: Box::new(err),
            }),
        }
    }
}

impl<R: BufRead, S: SeqBytes> Iterator for FastaRecords<R, S> {
    type Item = OrfResult<SeqRecord<S>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.read_record().transpose();
        if matches!(item, Some(Err(OrfError::Io(_)))) {
            self.failed = true;
        }
        item
    }
}

pub fn fasta_records_from_reader<R: BufRead, S: SeqBytes>(reader: R) -> FastaRecords<R, S> {
    FastaRecords::new(reader)
}

pub fn fasta_records_from_path<S: SeqBytes>(
    path: impl AsRef<Path>,
) -> OrfResult<FastaRecords<BufReader<File>, S>> {
    let file = File::open(path)?;
    Ok(FastaRecords::new(BufReader::new(file)))
}

pub fn read_fasta_records_from_reader<R: BufRead, S: SeqBytes>(
    reader: R,
) -> OrfResult<Vec<SeqRecord<S>>> {
    let mut out = Vec::new();
    for record in fasta_records_from_reader(reader) {
        out.push(record?);
    }
    Ok(out)
}

pub fn read_fasta_records_from_bytes<S: SeqBytes>(data: &[u8]) -> OrfResult<Vec<SeqRecord<S>>> {
    let reader = BufReader::new(Cursor::new(data));
    read_fasta_records_from_reader(reader)
}

/// Number of records in a FASTA buffer: lines that start with `>`.
pub fn count_records(data: &[u8]) -> usize {
    let first = usize::from(data.first() == Some(&b'>'));
    first
        + memchr_iter(b'\n', data)
            .filter(|&nl| data.get(nl + 1) == Some(&b'>'))
            .count()
}

pub fn count_records_from_path(path: impl AsRef<Path>) -> OrfResult<usize> {
    let data = std::fs::read(path)?;
    Ok(count_records(&data))
}

fn parse_header(header_line: &[u8], line_no: usize) -> OrfResult<(Box<str>, Option<Box<str>>)> {
    let header = header_line
        .strip_prefix(b">".as_slice())
        .ok_or(OrfError::FastaFormat {
            msg: "expected header line starting with '>'",
            line: line_no,
        })?;
    let header = std::str::from_utf8(header).map_err(|_| OrfError::FastaFormat {
        msg: "header is not valid UTF-8",
        line: line_no,
    })?;

    let header = header.trim_end_matches(&['\n', '\r'][..]).trim_start();
    if header.is_empty() {
        return Err(OrfError::FastaFormat {
            msg: "empty header",
            line: line_no,
        });
    }

    let (id, desc) = match header.find(|c: char| c.is_whitespace()) {
        Some(idx) => {
            let id = &header[..idx];
            let desc = header[idx..].trim();
            let desc = if desc.is_empty() { None } else { Some(desc) };
            (id, desc)
        }
        None => (header, None),
    };

    Ok((id.into(), desc.map(|s| s.into())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::dna::DnaSeq;

    #[test]
    fn parse_single_record() {
        let data = b">seq1\nACGT\n";
        let records = read_fasta_records_from_bytes::<DnaSeq>(data).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id(), "seq1");
        assert_eq!(records[0].desc(), None);
        assert_eq!(records[0].seq().as_bytes(), b"ACGT");
    }

    #[test]
    fn header_with_description() {
        let data = b">seq1 some desc here\nAC\nGT\n";
        let records = read_fasta_records_from_bytes::<DnaSeq>(data).unwrap();
        assert_eq!(records[0].id(), "seq1");
        assert_eq!(records[0].desc(), Some("some desc here"));
        assert_eq!(records[0].seq().as_bytes(), b"ACGT");
    }

    #[test]
    fn multiple_records() {
        let data = b">seq1\nAC\n>seq2\nGT\n";
        let records = read_fasta_records_from_bytes::<DnaSeq>(data).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id(), "seq1");
        assert_eq!(records[1].id(), "seq2");
    }

    #[test]
    fn empty_sequence_allowed() {
        let data = b">seq1\n>seq2\nA\n";
        let records = read_fasta_records_from_bytes::<DnaSeq>(data).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].seq().as_bytes(), b"");
        assert_eq!(records[1].seq().as_bytes(), b"A");
    }

    #[test]
    fn invalid_format_before_header() {
        let data = b"ACGT\n>seq1\nAC\n";
        let err = read_fasta_records_from_bytes::<DnaSeq>(data).unwrap_err();
        match err {
            OrfError::FastaFormat { .. } => {}
            other => panic!("expected fasta format error, got {other:?}"),
        }
    }

    #[test]
    fn ambiguous_bases_are_kept() {
        let data = b">seq1\nACN#\n";
        let records = read_fasta_records_from_bytes::<DnaSeq>(data).unwrap();
        assert_eq!(records[0].seq().as_bytes(), b"ACN#");
    }

    #[test]
    fn non_ascii_sequence_rejected() {
        let data = ">seq1\nACÉ\n".as_bytes();
        let err = read_fasta_records_from_bytes::<DnaSeq>(data).unwrap_err();
        assert_eq!(err.record_id(), Some("seq1"));
        match err {
            OrfError::FastaInvalidSequence { line, source, .. } => {
                assert_eq!(line, 1);
                assert!(matches!(*source, OrfError::InvalidChar { ch: 'É', pos: 2 }));
            }
            other => panic!("expected invalid sequence error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_sequence_is_invalid_char() {
        let data = b">seq1\nAC\xffGT\n>seq2\nACGT\n";
        let mut records = fasta_records_from_reader::<_, DnaSeq>(&data[..]);
        match records.next() {
            Some(Err(OrfError::FastaInvalidSequence { id, source, .. })) => {
                assert_eq!(&*id, "seq1");
                assert!(matches!(*source, OrfError::InvalidChar { pos: 2, .. }));
            }
            other => panic!("expected invalid sequence error, got {other:?}"),
        }
        let next = records.next().unwrap().unwrap();
        assert_eq!(next.id(), "seq2");
        assert_eq!(next.seq().as_bytes(), b"ACGT");
        assert!(records.next().is_none());
    }

    #[test]
    fn invalid_utf8_header_skips_its_record() {
        let data = b">s\xff1\nACGT\nACGT\n>s2\nTT\n";
        let mut records = fasta_records_from_reader::<_, DnaSeq>(&data[..]);
        assert!(matches!(
            records.next(),
            Some(Err(OrfError::FastaFormat { line: 1, .. }))
        ));
        assert_eq!(records.next().unwrap().unwrap().id(), "s2");
        assert!(records.next().is_none());
    }

    #[test]
    fn empty_header_rejected() {
        let err = read_fasta_records_from_bytes::<DnaSeq>(b">\nACGT\n").unwrap_err();
        assert!(matches!(err, OrfError::FastaFormat { line: 1, .. }));
    }

    #[test]
    fn crlf_line_endings() {
        let data = b">seq1 desc\r\nAC\r\nGT\r\n";
        let records = read_fasta_records_from_bytes::<DnaSeq>(data).unwrap();
        assert_eq!(records[0].desc(), Some("desc"));
        assert_eq!(records[0].seq().as_bytes(), b"ACGT");
    }

    #[test]
    fn count_headers() {
        assert_eq!(count_records(b""), 0);
        assert_eq!(count_records(b">a\nAC\n>b\nGT\n"), 2);
        assert_eq!(count_records(b"AC>\n>b\n"), 1);
        assert_eq!(count_records(b">only"), 1);
    }

    fn write_temp_fasta(name: &str, contents: &[u8]) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "orfhot_fasta_{name}_{}.fa",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn records_from_path() {
        let path = write_temp_fasta("records", b">a first\nAC\nGT\n>b\nTTT\n");
        let records: Vec<SeqRecord<DnaSeq>> = fasta_records_from_path::<DnaSeq>(&path)
            .unwrap()
            .collect::<OrfResult<_>>()
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].desc(), Some("first"));
        assert_eq!(records[1].seq().as_bytes(), b"TTT");
        assert_eq!(count_records_from_path(&path).unwrap(), 2);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_path_is_io_error() {
        let path = std::env::temp_dir().join("orfhot_fasta_does_not_exist.fa");
        assert!(matches!(
            fasta_records_from_path::<DnaSeq>(&path),
            Err(OrfError::Io(_))
        ));
        assert!(matches!(count_records_from_path(&path), Err(OrfError::Io(_))));
    }
}
