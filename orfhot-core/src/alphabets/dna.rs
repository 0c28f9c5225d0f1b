use crate::alphabets::Alphabet;
use std::sync::LazyLock;

/// The four bases the scanner and encoder recognize. Case-sensitive.
pub fn alphabet() -> Alphabet {
    Alphabet::new(b"ACGT")
}

pub fn n_alphabet() -> Alphabet {
    Alphabet::new(b"ACGTN")
}

static ACGT: LazyLock<Alphabet> = LazyLock::new(alphabet);

// Bytes outside A/C/G/T map to themselves.
static COMPLEMENT: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut comp = [0; 256];
    comp.iter_mut().enumerate().for_each(|(v, a)| {
        *a = v as u8;
    });
    b"ACGT"
        .iter()
        .zip(b"TGCA".iter())
        .for_each(|(&a, &b)| {
            comp[a as usize] = b;
        });
    comp
});

#[inline]
pub fn complement(a: u8) -> u8 {
    COMPLEMENT[a as usize]
}

pub fn reverse_complement(text: &[u8]) -> Vec<u8> {
    text.iter().rev().map(|&a| complement(a)).collect()
}

/// Count of bytes in `text` that are not A, C, G or T.
pub fn unrecognized_count(text: &[u8]) -> usize {
    ACGT.count_foreign(text)
}
