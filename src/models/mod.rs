pub mod segment;
pub mod sub_utterance;
pub mod time;

pub use segment::{RecordingSegments, Segment};
pub use sub_utterance::SubUtterance;
pub use time::Centiseconds;
