pub mod config;
pub mod grouping;
pub mod merge;
pub mod summary;

pub use config::MergeConfig;
pub use merge::{merge_sub_utterances, MergeResult, SegmentAccumulator};
pub use summary::MergeSummary;
