pub mod channel;
pub mod coordinator;
pub mod error;
pub mod heap;

pub(crate) mod fetcher;

pub use channel::{source_channel, SourceReceiver, SourceSender};
pub use coordinator::{MergeStats, MergeTask, DEFAULT_CAPACITY};
pub use error::{MergeError, SourceError};
pub use heap::MergeHeap;
