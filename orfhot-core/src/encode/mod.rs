//! One-hot encoding into fixed-capacity matrices.
//!
//! Each base becomes one row of four columns:
//!
//! | base | row          |
//! |------|--------------|
//! | A    | `[0,0,0,1]`  |
//! | G    | `[0,0,1,0]`  |
//! | C    | `[0,1,0,0]`  |
//! | T    | `[1,0,0,0]`  |
//!
//! Any other byte, lowercase included, becomes an all-zero row. Rows past
//! the end of the sequence are zero padding, so a matrix always has exactly
//! `capacity` rows.


use std::sync::LazyLock;

use crate::error::{OrfError, OrfResult};

pub type OneHotRow = [u8; 4];

pub const ZERO_ROW: OneHotRow = [0; 4];

/// Column of the set bit for each recognized base.
const COLUMNS: [(u8, usize); 4] = [(b'T', 0), (b'C', 1), (b'G', 2), (b'A', 3)];

static ONE_HOT: LazyLock<[OneHotRow; 256]> = LazyLock::new(|| {
    let mut table = [ZERO_ROW; 256];
    for (base, column) in COLUMNS {
        table[base as usize][column] = 1;
    }
    table
});

#[inline]
pub fn one_hot(base: u8) -> OneHotRow {
    ONE_HOT[base as usize]
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedMatrix {
    rows: Vec<OneHotRow>,
    seq_len: usize,
    unrecognized: usize,
}

impl EncodedMatrix {
    pub fn rows(&self) -> &[OneHotRow] {
        &self.rows
    }

    pub fn capacity(&self) -> usize {
        self.rows.len()
    }

    /// Number of rows taken by the sequence; the rest is padding.
    pub fn seq_len(&self) -> usize {
        self.seq_len
    }

    /// Sequence positions that fell back to a zero row.
    pub fn unrecognized(&self) -> usize {
        self.unrecognized
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), 4)
    }

    /// Row-major copy, `capacity * 4` values long.
    pub fn flatten(&self) -> Vec<u8> {
        self.rows.iter().flatten().copied().collect()
    }
}

/// Encode `seq` into a `capacity x 4` matrix, padding with zero rows.
pub fn encode(seq: &[u8], capacity: usize) -> OrfResult<EncodedMatrix> {
    if seq.len() > capacity {
        return Err(OrfError::SequenceTooLong {
            length: seq.len(),
            capacity,
        });
    }

    let mut rows = Vec::with_capacity(capacity);
    let mut unrecognized = 0usize;
    for &base in seq {
        let row = one_hot(base);
        if row == ZERO_ROW {
            unrecognized += 1;
        }
        rows.push(row);
    }
    rows.resize(capacity, ZERO_ROW);

    if unrecognized > 0 {
        tracing::warn!(
            unrecognized,
            length = seq.len(),
            "encoded unrecognized bases as zero rows"
        );
    }

    Ok(EncodedMatrix {
        rows,
        seq_len: seq.len(),
        unrecognized,
    })
}

/// Recover bases from a matrix by taking the set column of each row.
///
/// Trailing zero rows are dropped as padding. Zero rows before the last
/// set row decode as `N`.
pub fn decode(matrix: &EncodedMatrix) -> Vec<u8> {
    decode_rows(matrix.rows())
}

pub fn decode_rows(rows: &[OneHotRow]) -> Vec<u8> {
    let used = rows
        .iter()
        .rposition(|row| *row != ZERO_ROW)
        .map_or(0, |last| last + 1);

    rows[..used].iter().map(decode_row).collect()
}

fn decode_row(row: &OneHotRow) -> u8 {
    let column = row
        .iter()
        .enumerate()
        .max_by_key(|&(column, &v)| (v, std::cmp::Reverse(column)))
        .filter(|&(_, &v)| v > 0)
        .map(|(column, _)| column);

    match column {
        Some(column) => COLUMNS
            .iter()
            .find(|&&(_, c)| c == column)
            .map_or(b'N', |&(base, _)| base),
        None => b'N',
    }
}
