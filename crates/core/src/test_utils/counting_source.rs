use crate::merge::SourceError;
use crate::sources::RecordSource;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A source that counts how many records have been read from it, observable
/// from outside the merge. Used to verify read-ahead stays bounded.
pub struct CountingSource<T> {
    items: VecDeque<T>,
    pub fetched: Arc<AtomicUsize>,
}

impl<T> CountingSource<T> {
    pub fn new(items: Vec<T>) -> Self {
        CountingSource {
            items: items.into(),
            fetched: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl<T: Send> RecordSource<T> for CountingSource<T> {
    async fn pop(&mut self) -> Result<Option<T>, SourceError> {
        match self.items.pop_front() {
            Some(item) => {
                self.fetched.fetch_add(1, Ordering::SeqCst);
                Ok(Some(item))
            }
            None => Ok(None),
        }
    }
}
