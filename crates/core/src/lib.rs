//! Merges independently produced, internally time-ordered record streams
//! into one globally ordered output stream. Each source is read ahead by a
//! background fetcher into a bounded buffer, so a slow source never blocks
//! emission from faster ones and no source is ever buffered in full.

pub mod merge;
pub mod records;
pub mod sinks;
pub mod sources;
pub mod test_utils;

pub use merge::{MergeError, MergeHeap, MergeStats, MergeTask, SourceError, DEFAULT_CAPACITY};
pub use records::LogEntry;
pub use sinks::{PrinterSink, RecordSink};
pub use sources::{IterSource, RandomLogSource, RecordSource};
