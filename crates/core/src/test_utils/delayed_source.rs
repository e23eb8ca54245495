use crate::merge::SourceError;
use crate::sources::RecordSource;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::time::Duration;

/// A source that waits a configured delay before yielding each record.
/// Used to model a slow producer without touching real I/O.
pub struct DelayedSource<T> {
    items: VecDeque<(T, Duration)>,
}

impl<T> DelayedSource<T> {
    pub fn new(items: Vec<(T, Duration)>) -> Self {
        DelayedSource {
            items: items.into(),
        }
    }
}

#[async_trait]
impl<T: Send> RecordSource<T> for DelayedSource<T> {
    async fn pop(&mut self) -> Result<Option<T>, SourceError> {
        match self.items.pop_front() {
            Some((item, delay)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Ok(Some(item))
            }
            None => Ok(None),
        }
    }
}
