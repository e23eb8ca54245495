use super::RecordSource;
use crate::merge::SourceError;
use async_trait::async_trait;

/// Adapts any in-memory iterator into a source. Always ready, never faults.
pub struct IterSource<I> {
    iter: I,
}

impl<I: Iterator> IterSource<I> {
    pub fn new(items: impl IntoIterator<Item = I::Item, IntoIter = I>) -> Self {
        IterSource {
            iter: items.into_iter(),
        }
    }
}

#[async_trait]
impl<I> RecordSource<I::Item> for IterSource<I>
where
    I: Iterator + Send,
    I::Item: Send,
{
    async fn pop(&mut self) -> Result<Option<I::Item>, SourceError> {
        Ok(self.iter.next())
    }
}
