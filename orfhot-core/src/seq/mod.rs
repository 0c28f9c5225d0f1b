pub mod dna;
pub mod frame;
pub mod record;
pub mod traits;

pub use frame::{Frame, FrameLabel, SixFrames, Strand};
pub use record::SeqRecord;
