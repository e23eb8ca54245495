pub mod iter_source;
pub mod random_log_source;

pub use iter_source::IterSource;
pub use random_log_source::RandomLogSource;

use crate::merge::SourceError;
use async_trait::async_trait;

/// A destructively readable producer of records sorted by key.
///
/// `pop` is monotonic with no rewind: once it returns `Ok(None)` the source
/// is drained and stays drained. An `Err` is fatal to any merge reading it.
#[async_trait]
pub trait RecordSource<T>: Send {
    async fn pop(&mut self) -> Result<Option<T>, SourceError>;
}
