pub mod fasta;
pub mod report;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OnError {
    #[default]
    Raise,
    Skip,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedRecord {
    pub index: usize,
    /// `None` when the failure came before a record id was read.
    pub id: Option<Box<str>>,
    pub message: Box<str>,
}
