use super::error::SourceError;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::SendError;

/// What a fetcher delivers for one read: a record, or the source's fault.
pub type Fetched<T> = Result<T, SourceError>;

/// Write half of a source channel, owned by the source's fetcher.
pub struct SourceSender<T> {
    inner: mpsc::Sender<Fetched<T>>,
    source_id: usize,
}

/// Read half of a source channel, owned by the coordinator.
pub struct SourceReceiver<T> {
    inner: mpsc::Receiver<Fetched<T>>,
    source_id: usize,
    drained: bool,
}

/// Creates the bounded single-producer/single-consumer buffer for one source.
/// A full buffer suspends the fetcher in `send().await` until the coordinator
/// drains a slot; capacity is clamped to at least 1.
pub fn source_channel<T>(source_id: usize, capacity: usize) -> (SourceSender<T>, SourceReceiver<T>) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (
        SourceSender {
            inner: tx,
            source_id,
        },
        SourceReceiver {
            inner: rx,
            source_id,
            drained: false,
        },
    )
}

impl<T> SourceSender<T> {
    pub async fn send(&self, item: Fetched<T>) -> Result<(), SendError<Fetched<T>>> {
        self.inner.send(item).await
    }

    pub fn source_id(&self) -> usize {
        self.source_id
    }
}

impl<T> SourceReceiver<T> {
    /// Removes and returns the oldest buffered item, suspending while the
    /// buffer is empty but the fetcher is still running. Returns `None` once
    /// the source is drained; the transition is terminal.
    pub async fn next(&mut self) -> Option<Fetched<T>> {
        if self.drained {
            return None;
        }
        let item = self.inner.recv().await;
        if item.is_none() {
            self.drained = true;
        }
        item
    }

    pub fn source_id(&self) -> usize {
        self.source_id
    }

    pub fn is_drained(&self) -> bool {
        self.drained
    }
}
