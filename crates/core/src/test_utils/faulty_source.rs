use crate::merge::SourceError;
use crate::sources::RecordSource;
use async_trait::async_trait;
use std::collections::VecDeque;

/// A source that yields its records and then faults instead of draining.
/// Used to exercise error propagation and fetcher shutdown.
pub struct FaultySource<T> {
    items: VecDeque<T>,
    message: String,
}

impl<T> FaultySource<T> {
    pub fn new(items: Vec<T>, message: impl Into<String>) -> Self {
        FaultySource {
            items: items.into(),
            message: message.into(),
        }
    }
}

#[async_trait]
impl<T: Send> RecordSource<T> for FaultySource<T> {
    async fn pop(&mut self) -> Result<Option<T>, SourceError> {
        match self.items.pop_front() {
            Some(item) => Ok(Some(item)),
            None => Err(SourceError::new(self.message.clone())),
        }
    }
}
