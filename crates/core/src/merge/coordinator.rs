use super::channel::{source_channel, SourceReceiver};
use super::error::{MergeError, SourceError};
use super::fetcher;
use super::heap::MergeHeap;
use crate::sinks::RecordSink;
use crate::sources::RecordSource;
use futures::future::join_all;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Default per-source buffer capacity.
pub const DEFAULT_CAPACITY: usize = 10;

/// Counters for one completed merge run.
#[derive(Debug, Clone)]
pub struct MergeStats {
    /// Records forwarded to the sink, in total.
    pub emitted: u64,
    /// Records forwarded to the sink, per source.
    pub per_source: Vec<u64>,
}

impl MergeStats {
    fn new(num_sources: usize) -> Self {
        MergeStats {
            emitted: 0,
            per_source: vec![0; num_sources],
        }
    }
}

/// The merge coordinator.
///
/// Spawns one fetcher per source, reveals exactly one record per active
/// source in a min-heap, and repeatedly pops the global minimum into the
/// sink. The vacated source's slot is always refilled (or found drained)
/// before the next pop, so every pop sees a complete heap and the emitted
/// order is the true global order. The wait for a refill is a bounded
/// channel receive, the merge's only blocking point; a stalled source parks
/// the coordinator there indefinitely.
pub struct MergeTask<T, F> {
    sources: Vec<Box<dyn RecordSource<T>>>,
    key_fn: F,
    capacity: usize,
}

impl<T, F> MergeTask<T, F> {
    pub fn new(sources: Vec<Box<dyn RecordSource<T>>>, key_fn: F) -> Self {
        MergeTask {
            sources,
            key_fn,
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Sets the per-source buffer capacity (clamped to at least 1).
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl<T, F> MergeTask<T, F>
where
    T: Send + 'static,
{
    /// Runs the merge to completion. On success every record has been
    /// printed in global key order and `done()` has been called exactly
    /// once. On a source fault the merge aborts: no further prints, no
    /// `done()`, every fetcher stopped before the error is returned.
    pub async fn run<K, S>(self, sink: &mut S) -> Result<MergeStats, MergeError>
    where
        K: Ord,
        F: Fn(&T) -> K,
        S: RecordSink<T>,
    {
        let MergeTask {
            sources,
            key_fn,
            capacity,
        } = self;

        let num_sources = sources.len();
        debug!(
            "merge starting with {} sources, capacity {}",
            num_sources, capacity
        );

        let mut receivers = Vec::with_capacity(num_sources);
        let mut handles = Vec::with_capacity(num_sources);
        for (source_id, source) in sources.into_iter().enumerate() {
            let (tx, rx) = source_channel(source_id, capacity);
            handles.push(fetcher::spawn(source, tx));
            receivers.push(rx);
        }

        let mut heap = MergeHeap::new(num_sources);
        let mut stats = MergeStats::new(num_sources);
        let mut failure: Option<(usize, SourceError)> = None;

        // Bootstrap: reveal the first record of every source. A source that
        // reports drained here contributes nothing to the merge.
        for rx in receivers.iter_mut() {
            match rx.next().await {
                Some(Ok(record)) => {
                    let key = key_fn(&record);
                    heap.push(rx.source_id(), key, record);
                }
                Some(Err(e)) => {
                    failure = Some((rx.source_id(), e));
                    break;
                }
                None => debug!("source {} was empty", rx.source_id()),
            }
        }

        // Pop the minimum, emit it, then close the vacated slot before the
        // next pop. Waiting on exactly that source's channel keeps the heap
        // complete over every non-drained source at each extraction.
        while failure.is_none() {
            let Some((source_id, record)) = heap.pop_min() else {
                break;
            };
            sink.print(record);
            stats.emitted += 1;
            stats.per_source[source_id] += 1;

            match receivers[source_id].next().await {
                Some(Ok(record)) => {
                    let key = key_fn(&record);
                    heap.push(source_id, key, record);
                }
                Some(Err(e)) => failure = Some((source_id, e)),
                None => debug!("source {} drained", source_id),
            }
        }

        if let Some((source_id, source)) = failure {
            abort_fetchers(receivers, handles).await;
            return Err(MergeError::Source { source_id, source });
        }

        sink.done();
        info!("merge complete, {} records emitted", stats.emitted);

        // Every source has drained, so the fetchers have already returned.
        join_all(handles).await;
        Ok(stats)
    }
}

/// Stops all background fetching before an error propagates. Dropping the
/// receivers fails any fetcher parked on a full buffer; aborting covers one
/// parked inside its source's read call. No fetcher outlives this.
async fn abort_fetchers<T>(receivers: Vec<SourceReceiver<T>>, handles: Vec<JoinHandle<()>>) {
    drop(receivers);
    for handle in &handles {
        handle.abort();
    }
    // Cancelled tasks surface a benign JoinError, ignored here.
    let _ = join_all(handles).await;
}
